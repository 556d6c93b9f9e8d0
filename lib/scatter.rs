use glam::*;
use log::{debug, trace};
use rand::Rng;

use crate::material::{BlendStrategy, Material, MaterialResponse};
use crate::path::PathSegment;
use crate::sampling::HemisphereStrategy;
use crate::util::reflect;

/// Distance the next ray origin is pushed off the surface along the normal.
pub const SURFACE_OFFSET: f32 = 1e-3;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScatterConfig {
    pub hemisphere: HemisphereStrategy,
    pub blend: BlendStrategy,
}

impl ScatterConfig {
    pub fn with_hemisphere(self, hemisphere: HemisphereStrategy) -> ScatterConfig {
        ScatterConfig { hemisphere, ..self }
    }

    pub fn with_blend(self, blend: BlendStrategy) -> ScatterConfig {
        ScatterConfig { blend, ..self }
    }
}

/// Per-bounce scattering. Holds no state besides its configuration, so one
/// engine can be shared by every path on every thread.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScatterEngine {
    config: ScatterConfig,
}

impl ScatterEngine {
    pub fn new(config: ScatterConfig) -> ScatterEngine {
        debug!("scatter engine: hemisphere {:?}, blend {:?}", config.hemisphere, config.blend);
        ScatterEngine { config }
    }

    pub fn config(&self) -> ScatterConfig {
        self.config
    }

    /// Attenuate `path` by `material` and send it off the hit at distance `t`.
    ///
    /// `normal` must be unit length and face the incoming ray. Nothing is
    /// checked; bad input gives a degraded direction, never a panic.
    pub fn scatter<R: Rng + ?Sized>(
        &self,
        path: &mut PathSegment,
        t: f32,
        normal: Vec3,
        material: &Material,
        rng: &mut R,
    ) {
        let incoming = path.ray.direction;
        let response = material.response(incoming, normal, self.config.blend);

        path.color *= material.color;
        path.ray.origin = path.ray.at(t) + SURFACE_OFFSET * normal;

        path.ray.direction = match response {
            MaterialResponse::Diffuse => self.config.hemisphere.sample(normal, rng),
            MaterialResponse::Mirror => reflect(incoming, normal),
            MaterialResponse::DielectricBlend { specular_weight } => {
                let specular = reflect(incoming, normal);
                let diffuse = self.config.hemisphere.sample(normal, rng);
                (specular_weight * specular + (1.0 - specular_weight) * diffuse).normalize()
            }
        };

        trace!("pixel {}: {:?} -> {}", path.pixel_index, response, path.ray.direction);
    }
}

/// [`ScatterEngine::scatter`] with the default cosine-weighted, Schlick-blended setup.
pub fn scatter<R: Rng + ?Sized>(path: &mut PathSegment, t: f32, normal: Vec3, material: &Material, rng: &mut R) {
    ScatterEngine::default().scatter(path, t, normal, material, rng)
}
