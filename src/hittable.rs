//! Ray-object intersection system.
//!
//! Defines the [`Hittable`] capability, the [`Intersection`] record it returns
//! and the closed [`Primitive`] set the scene stores. Dispatch over the set
//! is a `match`, which keeps the per-pixel scan free of virtual calls.

use crate::material::Material;
use crate::plane::Plane;
use crate::ray::Ray;
use crate::sphere::Sphere;
use crate::vector::Vector;

/// Ray-object intersection information.
///
/// Contains everything shading and reflection need, so the tracer never has to
/// look back at the primitive that produced it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intersection {
    /// Point where the ray meets the surface.
    pub point: Vector,
    /// Ray parameter of the hit; always strictly positive.
    pub distance: f64,
    /// Material of the surface at the hit point.
    pub material: Material,
    /// Unit surface normal at the hit point.
    pub normal: Vector,
    /// Mirror direction of the incoming ray about `normal`.
    pub reflection: Vector,
}

/// Objects that can be intersected by rays.
///
/// Implementors must be `Sync + Send`: the scene is shared read-only between
/// render workers.
pub trait Hittable: Sync + Send {
    /// Nearest forward intersection of `ray` with the object, if any.
    fn intersect(&self, ray: &Ray) -> Option<Intersection>;
}

/// Geometric primitive with its material.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    /// Sphere
    Sphere(Sphere),
    /// Bounded rectangular plane
    Plane(Plane),
}

impl Hittable for Primitive {
    #[inline]
    fn intersect(&self, ray: &Ray) -> Option<Intersection> {
        match self {
            Primitive::Sphere(sphere) => sphere.intersect(ray),
            Primitive::Plane(plane) => plane.intersect(ray),
        }
    }
}

impl From<Sphere> for Primitive {
    fn from(sphere: Sphere) -> Self {
        Primitive::Sphere(sphere)
    }
}

impl From<Plane> for Primitive {
    fn from(plane: Plane) -> Self {
        Primitive::Plane(plane)
    }
}
