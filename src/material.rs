//! Phong surface materials.
//!
//! A material is attached to a primitive at construction and never changes
//! afterwards, so it is a plain `Copy` value carried inside every hit record.

use crate::color::Color;

/// Phong reflection coefficients for a surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    /// Base surface color used by the ambient and diffuse terms.
    pub color: Color,
    /// Ambient reflection constant.
    pub ka: f64,
    /// Diffuse reflection constant.
    pub kd: f64,
    /// Specular reflection constant.
    pub ks: f64,
    /// Mirror reflectivity; scales the color of the recursively traced reflection.
    pub kr: f64,
    /// Shininess exponent of the specular highlight.
    pub alpha: f64,
}

impl Material {
    /// Create a material from its color and coefficients.
    pub const fn new(color: Color, ka: f64, kd: f64, ks: f64, kr: f64, alpha: f64) -> Self {
        Self {
            color,
            ka,
            kd,
            ks,
            kr,
            alpha,
        }
    }

    /// Material lit only by its ambient term.
    pub const fn flat(color: Color) -> Self {
        Self::new(color, 1.0, 0.0, 0.0, 0.0, 1.0)
    }

    /// Perfect mirror with no local shading of its own.
    pub const fn mirror() -> Self {
        Self::new(Color::BLACK, 0.0, 0.0, 0.0, 1.0, 1.0)
    }
}
