use glam::Vec3;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MaterialError {
    #[error("material color {0} must be finite and non-negative")]
    InvalidColor(Vec3),
    #[error("{name} weight {value} is outside [0, 1]")]
    WeightOutOfRange { name: &'static str, value: f32 },
    #[error("index of refraction {0} must be positive for a refractive material")]
    InvalidIndexOfRefraction(f32),
}
