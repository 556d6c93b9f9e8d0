use glam::Vec3;
use log::{error, info, warn};
use rand::Rng;
use rayon::prelude::*;
use thiserror::Error;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use clap::Parser;

use path_scatter::camera::Camera;
use path_scatter::error::MaterialError;
use path_scatter::rng::path_rng;
use path_scatter::surface::Surface;
use path_scatter::world::World;
use path_scatter::{Color, Material, PathSegment, Ray, ScatterConfig, ScatterEngine};

mod args;
mod sphere;

use args::Args;
use sphere::Sphere;

#[derive(Debug, Error)]
enum RenderError {
    #[error("could not build scene: {0}")]
    Material(#[from] MaterialError),
    #[error("could not write image: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not set up thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
    #[error("hit references unknown material {0}")]
    UnknownMaterial(usize),
}

/// Sky seen by escaping paths; the only light in the scene.
fn background(ray: &Ray) -> Color {
    const COLOR_T: Color = Color::new(0.5, 0.7, 1.0);
    const COLOR_B: Color = Color::new(1.0, 1.0, 1.0);

    let t = 0.5 * (ray.direction.y + 1.0);

    return Color::lerp(COLOR_B, COLOR_T, t);
}

/// Follow one path until it escapes or runs out of bounces.
fn trace_path(
    world: &World,
    engine: &ScatterEngine,
    mut path: PathSegment,
    seed: u64,
    sample: u32,
) -> Result<Color, RenderError> {
    let mut bounce = 0;

    while path.is_alive() {
        let Some(hit) = world.raycast(&path.ray, 0.001, f32::MAX) else {
            return Ok(path.color * background(&path.ray));
        };

        let material = world.material(hit.material).ok_or(RenderError::UnknownMaterial(hit.material))?;
        let mut rng = path_rng(seed, sample, path.pixel_index, bounce);

        engine.scatter(&mut path, hit.t, hit.normal, material, &mut rng);

        path.remaining_bounces -= 1;
        bounce += 1;
    }

    Ok(Color::ZERO)
}

fn create_world() -> Result<World, RenderError> {
    let mut world = World::new();

    let ground = world.add_material(Material::diffuse(Color::new(0.5, 0.5, 0.5)))?;
    let glass = world.add_material(Material::dielectric(Color::new(0.95, 0.95, 0.95), 1.5))?;
    let matte = world.add_material(Material::diffuse(Color::new(0.4, 0.2, 0.1)))?;
    let metal = world.add_material(Material::mirror(Color::new(0.7, 0.6, 0.5)))?;
    let tinted = world.add_material(Material {
        has_reflective: 0.3,
        has_refractive: 0.7,
        ..Material::dielectric(Color::new(0.2, 0.5, 0.8), 1.33)
    })?;

    world.add_surface(Sphere::new(Vec3::new(0.0, -1000.0, 0.0), 1000.0, ground));
    world.add_surface(Sphere::new(Vec3::new(0.0, 1.0, 0.0), 1.0, glass));
    world.add_surface(Sphere::new(Vec3::new(-4.0, 1.0, 0.0), 1.0, matte));
    world.add_surface(Sphere::new(Vec3::new(4.0, 1.0, 0.0), 1.0, metal));
    world.add_surface(Sphere::new(Vec3::new(2.0, 0.4, 2.5), 0.4, tinted));

    info!("scene: {} surfaces, {} materials", world.surfaces.len(), world.material_count());

    return Ok(world);
}

fn render(args: &Args) -> Result<(), RenderError> {
    let world = create_world()?;

    let config = ScatterConfig::default().with_hemisphere(args.hemisphere.into()).with_blend(args.blend.into());
    let engine = ScatterEngine::new(config);

    let aspect_ratio = args.width as f32 / args.height as f32;
    let camera = Camera::new(Vec3::new(13.0, 2.0, 3.0), Vec3::ZERO, Vec3::Y, 20.0, aspect_ratio, 0.1, 10.0);

    let pool = rayon::ThreadPoolBuilder::new().num_threads(args.threads).build()?;

    let rows = pool.install(|| {
        (0..args.height)
            .rev()
            .map(|y| {
                info!("Scanline {}", y);
                (0..args.width)
                    .into_par_iter()
                    .map(|x| render_pixel(args, &world, &engine, &camera, x, y))
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()
    })?;

    write_ppm(&args.output, args.width, args.height, rows.iter().flatten())?;
    info!("wrote {}", args.output.display());

    Ok(())
}

fn render_pixel(
    args: &Args,
    world: &World,
    engine: &ScatterEngine,
    camera: &Camera,
    x: usize,
    y: usize,
) -> Result<Color, RenderError> {
    let pixel_index = y * args.width + x;
    let mut c = Color::ZERO;

    for sample in 0..args.samples {
        // bounce u32::MAX is reserved for the camera; scatter bounces count up from zero
        let mut rng = path_rng(args.seed, sample, pixel_index, u32::MAX);
        let u = (x as f32 + rng.gen::<f32>()) / (args.width - 1).max(1) as f32;
        let v = (y as f32 + rng.gen::<f32>()) / (args.height - 1).max(1) as f32;

        let path = PathSegment::new(camera.create_ray(u, v, &mut rng), pixel_index, args.depth);
        let radiance = trace_path(world, engine, path, args.seed, sample)?;

        if radiance.is_finite() {
            c += radiance;
        } else {
            warn!("dropping non-finite sample at pixel {}", pixel_index);
        }
    }

    Ok(c / args.samples.max(1) as f32)
}

fn write_ppm<'a>(
    path: &Path,
    width: usize,
    height: usize,
    pixels: impl Iterator<Item = &'a Color>,
) -> Result<(), RenderError> {
    let mut w = BufWriter::new(File::create(path)?);

    writeln!(&mut w, "P3")?;
    writeln!(&mut w, "{} {}", width, height)?;
    writeln!(&mut w, "255")?;

    for c in pixels {
        // gamma 2
        let gamma = Color::new(c.x.sqrt(), c.y.sqrt(), c.z.sqrt()).clamp(Color::ZERO, Color::splat(0.999));
        writeln!(&mut w, "{}", format_color(gamma))?;
    }

    w.flush()?;
    Ok(())
}

fn format_color(color: Color) -> String {
    let r = (color.x * 255.999) as i32;
    let g = (color.y * 255.999) as i32;
    let b = (color.z * 255.999) as i32;
    return format!("{} {} {}", r, g, b);
}

fn main() {
    let args = <Args as Parser>::parse();

    env_logger::Builder::new().filter_level(args.log_level.into()).parse_default_env().init();

    if let Err(e) = render(&args) {
        error!("{e}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_color_scales_to_bytes() {
        assert_eq!(format_color(Color::new(0.0, 0.5, 0.999)), "0 127 255");
    }

    #[test]
    fn escaping_path_takes_sky_color() {
        let world = World::new();
        let path = PathSegment::new(Ray::new(Vec3::ZERO, Vec3::Y), 0, 4);

        let c = trace_path(&world, &ScatterEngine::default(), path, 0, 0).unwrap();

        assert!(c.abs_diff_eq(Color::new(0.5, 0.7, 1.0), 1e-6));
    }

    #[test]
    fn exhausted_path_is_black() {
        let mut world = World::new();
        let id = world.add_material(Material::diffuse(Color::ONE)).unwrap();
        world.add_surface(Sphere::new(Vec3::ZERO, 100.0, id));
        // Inside a closed sphere nothing escapes.
        let path = PathSegment::new(Ray::new(Vec3::ZERO, Vec3::X), 0, 3);

        let c = trace_path(&world, &ScatterEngine::default(), path, 0, 0).unwrap();

        assert_eq!(c, Color::ZERO);
    }

    #[test]
    fn demo_scene_builds() {
        let world = create_world().unwrap();

        assert_eq!(world.material_count(), 5);
    }
}
