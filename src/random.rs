//! Seeded random sampling for procedural scenes.
//!
//! All helpers draw from a caller-owned ChaCha20 generator so that a seed
//! always reproduces the same scene, independent of platform or thread.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::color::Color;
use crate::material::Material;

/// Generator for a given seed.
pub fn seeded(seed: u64) -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(seed)
}

/// Random f64 in [min, max)
pub fn random_f64_range(rng: &mut impl Rng, min: f64, max: f64) -> f64 {
    min + (max - min) * rng.random::<f64>()
}

/// Random color with every channel in `[min, max]`.
pub fn random_color_range(rng: &mut impl Rng, min: u8, max: u8) -> Color {
    Color::new(
        rng.random_range(min..=max),
        rng.random_range(min..=max),
        rng.random_range(min..=max),
    )
}

/// Random material: mostly matte, some glossy, a few mirrors.
pub fn random_material(rng: &mut impl Rng) -> Material {
    let choose_mat = rng.random::<f64>();
    if choose_mat < 0.7 {
        let color = random_color_range(rng, 20, 230);
        Material::new(color, 0.15, random_f64_range(rng, 0.5, 0.9), 0.1, 0.0, 4.0)
    } else if choose_mat < 0.92 {
        let color = random_color_range(rng, 120, 255);
        let shininess = random_f64_range(rng, 20.0, 120.0);
        Material::new(color, 0.1, 0.6, 0.8, 0.15, shininess)
    } else {
        let tint = random_color_range(rng, 0, 40);
        Material::new(tint, 0.05, 0.1, 1.0, 0.85, 200.0)
    }
}
