use crate::error::MaterialError;
use crate::material::Material;
use crate::ray::Ray;
use crate::surface::{Intersection, MaterialId, Surface};

/// Scene surfaces together with the material table their hits index into.
pub struct World {
    pub surfaces: Vec<Box<dyn Surface>>,
    materials: Vec<Material>,
}

impl World {
    pub fn new() -> World {
        World { surfaces: Vec::new(), materials: Vec::new() }
    }

    pub fn add_material(&mut self, material: Material) -> Result<MaterialId, MaterialError> {
        material.validate()?;
        self.materials.push(material);
        Ok(self.materials.len() - 1)
    }

    pub fn add_surface(&mut self, surface: impl Surface + 'static) {
        self.surfaces.push(Box::new(surface));
    }

    pub fn material(&self, id: MaterialId) -> Option<&Material> {
        self.materials.get(id)
    }

    pub fn material_count(&self) -> usize {
        self.materials.len()
    }
}

impl Default for World {
    fn default() -> Self {
        World::new()
    }
}

impl Surface for World {
    fn raycast(&self, r: &Ray, t_min: f32, t_max: f32) -> Option<Intersection> {
        let mut result = None;
        let mut t_nearest = t_max;

        for obj in &self.surfaces {
            if let Some(intersection) = obj.raycast(r, t_min, t_nearest) {
                t_nearest = intersection.t;
                result = Some(intersection);
            }
        }

        return result;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::Color;
    use glam::*;

    /// Infinite plane `z = height`, outward normal +z.
    struct Plane {
        height: f32,
        material: MaterialId,
    }

    impl Surface for Plane {
        fn raycast(&self, r: &Ray, t_min: f32, t_max: f32) -> Option<Intersection> {
            if r.direction.z == 0.0 {
                return None;
            }
            let t = (self.height - r.origin.z) / r.direction.z;
            if t < t_min || t > t_max {
                return None;
            }
            Some(Intersection::facing(r, t, Vec3::Z, self.material))
        }
    }

    #[test]
    fn raycast_returns_nearest_hit() {
        let mut world = World::new();
        let far = world.add_material(Material::diffuse(Color::ONE)).unwrap();
        let near = world.add_material(Material::mirror(Color::ONE)).unwrap();
        world.add_surface(Plane { height: 0.0, material: far });
        world.add_surface(Plane { height: 2.0, material: near });

        let hit = world.raycast(&Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::NEG_Z), 0.001, f32::MAX).unwrap();

        assert_eq!(hit.material, near);
        assert_eq!(hit.t, 3.0);
        assert_eq!(world.material(hit.material), Some(&Material::mirror(Color::ONE)));
    }

    #[test]
    fn raycast_misses_when_nothing_ahead() {
        let mut world = World::new();
        let id = world.add_material(Material::diffuse(Color::ONE)).unwrap();
        world.add_surface(Plane { height: 0.0, material: id });

        assert!(world.raycast(&Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::Z), 0.001, f32::MAX).is_none());
    }

    #[test]
    fn invalid_material_is_rejected() {
        let mut world = World::new();
        let bad = Material { has_refractive: 2.0, ..Material::diffuse(Color::ONE) };

        assert!(world.add_material(bad).is_err());
        assert_eq!(world.material_count(), 0);
        assert!(world.material(0).is_none());
    }
}
