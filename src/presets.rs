//! Named demo scenes.
//!
//! Every preset is framed for [`CameraConfig::looking_along_y`]: the viewport
//! sits at the origin, the eye far behind it on −Y, and geometry lies at
//! positive Y within roughly ±40 units of the view axis.
//!
//! [`CameraConfig::looking_along_y`]: crate::camera::CameraConfig::looking_along_y

use crate::color::Color;
use crate::error::{RenderError, Result};
use crate::material::Material;
use crate::plane::Plane;
use crate::random;
use crate::scene::{LightSource, Scene};
use crate::sphere::Sphere;
use crate::vector::Vector;

/// Names accepted by [`build_scene`].
pub const PRESET_NAMES: &[&str] = &["spheres", "mirror-box", "random"];

const SKY: Color = Color::new(0, 255, 255);

/// Build the preset called `name` (case-insensitive). `seed` only affects
/// the `random` preset.
pub fn build_scene(name: &str, seed: u64) -> Result<Scene> {
    match name.to_ascii_lowercase().as_str() {
        "spheres" => spheres(),
        "mirror-box" => mirror_box(),
        "random" => random_field(seed),
        _ => Err(RenderError::UnknownScene(name.to_string())),
    }
}

/// Three spheres under one white light in front of a cyan sky.
///
/// Same geometry and materials as the classic single-pass render: nothing is
/// reflective and the depth limit is 0. Use `--max-depth` with one of the
/// other presets for mirrors.
pub fn spheres() -> Result<Scene> {
    let mut scene = Scene::new(SKY);

    scene.add(Sphere::new(
        Vector::new(0.0, 20.0, 0.0),
        15.0,
        Material::new(Color::new(150, 150, 0), 0.3, 0.5, 1.0, 0.0, 50.0),
    )?);
    scene.add(Sphere::new(
        Vector::new(-5.0, 50.0, 10.0),
        10.0,
        Material::new(Color::new(60, 25, 25), 1.0, 1.0, 0.0, 0.0, 1.0),
    )?);
    scene.add(Sphere::new(
        Vector::new(-5.0, 20.0, 20.0),
        4.0,
        Material::new(Color::new(30, 30, 30), 2.0, 0.0, 1.0, 0.0, 10.0),
    )?);

    scene.add_light(LightSource::new(
        Vector::new(-20.0, 15.0, 30.0),
        Color::WHITE,
        1.0,
    ));
    Ok(scene)
}

/// Open-fronted box with mirrored side walls and a mirror sphere.
///
/// Rays can bounce between the side walls until the depth limit, which makes
/// this the most expensive preset per pixel.
pub fn mirror_box() -> Result<Scene> {
    let mut scene = Scene::new(Color::new(10, 10, 20)).with_max_depth(8);

    let wall = Material::new(Color::new(180, 180, 170), 0.2, 0.7, 0.1, 0.0, 8.0);
    let floor = Material::new(Color::new(90, 120, 90), 0.2, 0.7, 0.2, 0.1, 16.0);
    let glass = Material::new(Color::new(10, 10, 10), 0.05, 0.1, 0.3, 0.9, 64.0);

    // floor and ceiling
    scene.add(Plane::new(Vector::new(0.0, 50.0, -25.0), Vector::Z, Vector::X, 40.0, 50.0, floor)?);
    scene.add(Plane::new(Vector::new(0.0, 50.0, 25.0), -Vector::Z, Vector::X, 40.0, 50.0, wall)?);
    // back wall
    scene.add(Plane::new(Vector::new(0.0, 100.0, 0.0), -Vector::Y, Vector::X, 40.0, 25.0, wall)?);
    // mirrored side walls
    scene.add(Plane::new(Vector::new(-40.0, 50.0, 0.0), Vector::X, Vector::Y, 50.0, 25.0, glass)?);
    scene.add(Plane::new(Vector::new(40.0, 50.0, 0.0), -Vector::X, Vector::Y, 50.0, 25.0, glass)?);

    scene.add(Sphere::new(
        Vector::new(0.0, 60.0, -10.0),
        12.0,
        Material::new(Color::new(20, 20, 30), 0.1, 0.2, 1.0, 0.95, 120.0),
    )?);
    scene.add(Sphere::new(
        Vector::new(18.0, 40.0, -17.0),
        8.0,
        Material::new(Color::new(200, 40, 40), 0.2, 0.8, 0.6, 0.0, 32.0),
    )?);

    scene.add_light(LightSource::new(Vector::new(0.0, 30.0, 20.0), Color::WHITE, 0.8));
    scene.add_light(LightSource::new(Vector::new(-25.0, 80.0, 15.0), Color::new(255, 220, 180), 0.4));
    Ok(scene)
}

/// Seeded field of small random spheres on a floor, lit from two sides.
pub fn random_field(seed: u64) -> Result<Scene> {
    let mut rng = random::seeded(seed);
    let mut scene = Scene::new(SKY).with_max_depth(4);

    let floor_z = -20.0;
    let floor = Material::new(Color::new(128, 128, 128), 0.2, 0.6, 0.0, 0.25, 1.0);
    scene.add(Plane::new(
        Vector::new(0.0, 60.0, floor_z),
        Vector::Z,
        Vector::X,
        60.0,
        60.0,
        floor,
    )?);

    // Grid of cells on the floor, one jittered sphere per cell.
    for a in -5..5 {
        for b in 0..6 {
            let radius = random::random_f64_range(&mut rng, 1.5, 3.5);
            let center = Vector::new(
                a as f64 * 7.0 + random::random_f64_range(&mut rng, 0.0, 4.0),
                25.0 + b as f64 * 10.0 + random::random_f64_range(&mut rng, 0.0, 5.0),
                floor_z + radius,
            );
            scene.add(Sphere::new(center, radius, random::random_material(&mut rng))?);
        }
    }

    // Three large feature spheres
    scene.add(Sphere::new(
        Vector::new(-18.0, 70.0, -8.0),
        12.0,
        Material::new(Color::new(100, 50, 25), 0.2, 0.8, 0.3, 0.0, 16.0),
    )?);
    scene.add(Sphere::new(
        Vector::new(0.0, 75.0, -8.0),
        12.0,
        Material::new(Color::new(20, 20, 20), 0.05, 0.1, 1.0, 0.9, 200.0),
    )?);
    scene.add(Sphere::new(
        Vector::new(18.0, 70.0, -8.0),
        12.0,
        Material::new(Color::new(180, 150, 130), 0.2, 0.6, 0.9, 0.4, 64.0),
    )?);

    scene.add_light(LightSource::new(Vector::new(-40.0, 10.0, 40.0), Color::WHITE, 0.7));
    scene.add_light(LightSource::new(Vector::new(40.0, 10.0, 40.0), Color::WHITE, 0.5));
    Ok(scene)
}
