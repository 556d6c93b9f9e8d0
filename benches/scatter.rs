use criterion::{black_box, criterion_group, criterion_main, Criterion};
use glam::Vec3;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;

use path_scatter::{sample_hemisphere, Color, Material, PathSegment, Ray, ScatterEngine};

pub fn hemisphere(c: &mut Criterion) {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(0);
    let normal = Vec3::new(0.3, 0.5, 0.81).normalize();

    c.bench_function("cosine hemisphere", |b| b.iter(|| sample_hemisphere(black_box(normal), &mut rng)));
}

pub fn scatter(c: &mut Criterion) {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(0);
    let engine = ScatterEngine::default();
    let normal = Vec3::Z;
    let incoming = Vec3::new(0.4, 0.0, -1.0).normalize();

    for (name, material) in [
        ("scatter diffuse", Material::diffuse(Color::splat(0.5))),
        ("scatter mirror", Material::mirror(Color::splat(0.5))),
        ("scatter dielectric", Material::dielectric(Color::splat(0.9), 1.5)),
    ] {
        c.bench_function(name, |b| {
            b.iter(|| {
                let mut path = PathSegment::new(Ray::new(Vec3::new(0.0, 0.0, 1.0), incoming), 0, 1);
                engine.scatter(&mut path, black_box(1.0), normal, &material, &mut rng);
                path
            })
        });
    }
}

criterion_group!(benches, hemisphere, scatter);
criterion_main!(benches);
