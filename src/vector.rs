//! 3D vector algebra.
//!
//! Vectors are `glam::DVec3` values; addition, subtraction, scaling, dot and
//! cross products, length and normalization all come from glam. This module
//! only adds the mirror convention used throughout the tracer.

use glam::DVec3;

/// World-space point or direction in double precision.
pub type Vector = DVec3;

/// Mirror `incident` about `normal`: `2 (N·I) N − I`.
///
/// Both vectors point away from the surface. Applying it twice with the same
/// unit normal returns the original vector. Note that this is the negation of
/// `glam`'s `reflect`, which mirrors an incoming direction instead.
#[inline]
pub fn reflect(normal: Vector, incident: Vector) -> Vector {
    2.0 * normal.dot(incident) * normal - incident
}
