use glam::*;

pub fn reflect(v: Vec3, normal: Vec3) -> Vec3 {
    return v - (2.0 * v.dot(normal) * normal);
}

/// Schlick's approximation of Fresnel reflectance. `cos_theta` is clamped so
/// a slightly drifted dot product saturates instead of blowing up.
pub fn schlick(cos_theta: f32, index_of_refraction: f32) -> f32 {
    let r0 = ((1.0 - index_of_refraction) / (1.0 + index_of_refraction)).powi(2);
    return r0 + (1.0 - r0) * (1.0 - cos_theta.clamp(0.0, 1.0)).powi(5);
}
