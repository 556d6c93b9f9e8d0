//! Direction sampling about a surface normal.
//!
//! Both samplers draw `s` then `t` from the supplied generator, map them to
//! a local direction and rotate it into the frame built by
//! [`orthonormal_basis`].

use std::f32::consts::TAU;

use glam::*;
use rand::Rng;
use rand_distr::Distribution;

const SQRT_OF_ONE_THIRD: f32 = 0.577_350_26;

/// Two unit vectors completing `normal` to an orthonormal frame.
///
/// The seed axis is x or y if that component of `normal` is below 1/sqrt(3),
/// otherwise z. When both |x| and |y| reach the threshold, |z| is at most
/// 1/sqrt(3), so the seed is never parallel to a unit normal.
pub fn orthonormal_basis(normal: Vec3) -> (Vec3, Vec3) {
    let not_normal = if normal.x.abs() < SQRT_OF_ONE_THIRD {
        Vec3::X
    } else if normal.y.abs() < SQRT_OF_ONE_THIRD {
        Vec3::Y
    } else {
        Vec3::Z
    };

    let e1 = normal.cross(not_normal).normalize();
    let e2 = normal.cross(e1).normalize();

    (e1, e2)
}

fn to_world(normal: Vec3, cos_theta: f32, sin_theta: f32, phi: f32) -> Vec3 {
    let (e1, e2) = orthonormal_basis(normal);
    let (sin_phi, cos_phi) = phi.sin_cos();

    cos_theta * normal + cos_phi * sin_theta * e1 + sin_phi * sin_theta * e2
}

/// Cosine-weighted directions, pdf = cos(theta) / pi.
#[derive(Debug, Clone, Copy)]
pub struct CosineHemisphere {
    pub normal: Vec3,
}

impl Distribution<Vec3> for CosineHemisphere {
    fn sample<R>(&self, rng: &mut R) -> Vec3
    where
        R: Rng + ?Sized,
    {
        let s = rng.gen::<f32>();
        let t = rng.gen::<f32>();

        let cos_theta = s.sqrt();
        let sin_theta = (1.0 - s).sqrt();

        to_world(self.normal, cos_theta, sin_theta, TAU * t)
    }
}

/// Directions uniform over solid angle, pdf = 1 / (2 pi).
#[derive(Debug, Clone, Copy)]
pub struct UniformHemisphere {
    pub normal: Vec3,
}

impl Distribution<Vec3> for UniformHemisphere {
    fn sample<R>(&self, rng: &mut R) -> Vec3
    where
        R: Rng + ?Sized,
    {
        let s = rng.gen::<f32>();
        let t = rng.gen::<f32>();

        let cos_theta = s;
        let sin_theta = (1.0 - s * s).max(0.0).sqrt();

        to_world(self.normal, cos_theta, sin_theta, TAU * t)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HemisphereStrategy {
    #[default]
    CosineWeighted,
    Uniform,
}

impl HemisphereStrategy {
    pub fn sample<R: Rng + ?Sized>(self, normal: Vec3, rng: &mut R) -> Vec3 {
        match self {
            HemisphereStrategy::CosineWeighted => CosineHemisphere { normal }.sample(rng),
            HemisphereStrategy::Uniform => UniformHemisphere { normal }.sample(rng),
        }
    }
}

/// Cosine-weighted sample about `normal`, the diffuse lobe's sampler.
pub fn sample_hemisphere<R: Rng + ?Sized>(normal: Vec3, rng: &mut R) -> Vec3 {
    CosineHemisphere { normal }.sample(rng)
}
