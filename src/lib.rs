//! Prismtrace ray tracer
//!
//! Renders spheres and bounded planes with Phong shading, optional hard
//! shadows and recursive mirror reflections into a flat RGB byte buffer.
//! Pixels are distributed over a fixed pool of worker threads.

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod vector;
pub mod color;
pub mod material;
pub mod ray;
pub mod interval;
pub mod hittable;
pub mod sphere;
pub mod plane;
pub mod scene;
pub mod tracer;
pub mod camera;
pub mod error;
pub mod presets;
pub mod random;

pub use camera::{partition, Camera, CameraConfig};
pub use color::Color;
pub use error::RenderError;
pub use hittable::{Hittable, Intersection, Primitive};
pub use material::Material;
pub use plane::Plane;
pub use ray::Ray;
pub use scene::{LightSource, Scene};
pub use sphere::Sphere;
pub use tracer::cast_ray;
pub use vector::Vector;
