pub mod camera;
pub mod error;
pub mod material;
pub mod path;
pub mod ray;
pub mod rng;
pub mod sampling;
pub mod scatter;
pub mod surface;
pub mod util;
pub mod world;

pub use material::{BlendStrategy, Material, MaterialResponse};
pub use path::{Color, PathSegment};
pub use ray::Ray;
pub use sampling::{sample_hemisphere, HemisphereStrategy};
pub use scatter::{scatter, ScatterConfig, ScatterEngine};
