use glam::*;

use crate::error::MaterialError;
use crate::path::Color;
use crate::util::schlick;

/// Surface description as stored in the scene's material table.
///
/// The two weights only select the scatter response; `index_of_refraction`
/// is read when both weights are non-zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub color: Color,
    pub has_reflective: f32,
    pub has_refractive: f32,
    pub index_of_refraction: f32,
}

impl Material {
    pub fn diffuse(color: Color) -> Material {
        Material { color, has_reflective: 0.0, has_refractive: 0.0, index_of_refraction: 1.0 }
    }

    pub fn mirror(color: Color) -> Material {
        Material { color, has_reflective: 1.0, has_refractive: 0.0, index_of_refraction: 1.0 }
    }

    pub fn dielectric(color: Color, index_of_refraction: f32) -> Material {
        Material { color, has_reflective: 1.0, has_refractive: 1.0, index_of_refraction }
    }

    pub fn validate(&self) -> Result<(), MaterialError> {
        if !self.color.is_finite() || self.color.min_element() < 0.0 {
            return Err(MaterialError::InvalidColor(self.color));
        }
        if !(0.0..=1.0).contains(&self.has_reflective) {
            return Err(MaterialError::WeightOutOfRange { name: "reflective", value: self.has_reflective });
        }
        if !(0.0..=1.0).contains(&self.has_refractive) {
            return Err(MaterialError::WeightOutOfRange { name: "refractive", value: self.has_refractive });
        }
        if self.has_refractive > 0.0 && !(self.index_of_refraction > 0.0) {
            return Err(MaterialError::InvalidIndexOfRefraction(self.index_of_refraction));
        }
        Ok(())
    }

    /// Pick the response lobe for a ray arriving along `incoming`.
    pub fn response(&self, incoming: Vec3, normal: Vec3, blend: BlendStrategy) -> MaterialResponse {
        if self.has_reflective > 0.0 && self.has_refractive > 0.0 {
            let specular_weight = match blend {
                BlendStrategy::Schlick => schlick(normal.dot(-incoming), self.index_of_refraction),
                BlendStrategy::Linear => {
                    let diffuse = self.has_refractive / (self.has_reflective + self.has_refractive);
                    1.0 - diffuse
                }
            };
            MaterialResponse::DielectricBlend { specular_weight }
        } else if self.has_reflective > 0.0 {
            MaterialResponse::Mirror
        } else {
            MaterialResponse::Diffuse
        }
    }
}

/// How the dielectric blend splits weight between its mirror and diffuse parts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BlendStrategy {
    #[default]
    Schlick,
    Linear,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MaterialResponse {
    Diffuse,
    Mirror,
    /// Mirror direction weighted by `specular_weight`, hemisphere sample by the rest.
    DielectricBlend { specular_weight: f32 },
}
