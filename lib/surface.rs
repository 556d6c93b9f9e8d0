use glam::*;

use crate::ray::Ray;

pub type MaterialId = usize;

pub trait Surface: Send + Sync {
    fn raycast(&self, r: &Ray, t_min: f32, t_max: f32) -> Option<Intersection>;
}

/// Hit record handed to the scatter step. `normal` is unit length and
/// faces the side the ray came from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intersection {
    pub t: f32,
    pub normal: Vec3,
    pub material: MaterialId,
}

impl Intersection {
    /// Build a record from an outward normal, flipping it towards the ray.
    pub fn facing(r: &Ray, t: f32, outward_normal: Vec3, material: MaterialId) -> Intersection {
        let front = r.direction.dot(outward_normal) < 0.0;
        let normal = if front { outward_normal } else { -outward_normal };
        Intersection { t, normal, material }
    }
}
