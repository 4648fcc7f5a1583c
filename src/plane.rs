//! Bounded rectangular plane primitive.
//!
//! The rectangle is centered on `center`, spans `[-len_x, len_x]` along
//! `dir_x` and `[-len_y, len_y]` along `dir_y = normal × dir_x`, and lies in
//! the plane `X · normal = d`.

use crate::error::{RenderError, Result};
use crate::hittable::{Hittable, Intersection};
use crate::interval::Interval;
use crate::material::Material;
use crate::ray::Ray;
use crate::vector::{reflect, Vector};

/// Distance from the plane below which a ray origin counts as lying on it.
pub const PLANE_THICKNESS: f64 = 1e-6;

/// Rectangle in 3D space with a two-sided surface.
#[derive(Debug, Clone, PartialEq)]
pub struct Plane {
    center: Vector,
    normal: Vector,
    dir_x: Vector,
    dir_y: Vector,
    extent_x: Interval,
    extent_y: Interval,
    offset: f64,
    material: Material,
}

impl Plane {
    /// Create a rectangle.
    ///
    /// `normal` is normalized and `dir_x` is made orthogonal to it, so callers
    /// only need to pass directions that are not parallel. Negative half
    /// extents are clamped to zero.
    pub fn new(
        center: Vector,
        normal: Vector,
        dir_x: Vector,
        len_x: f64,
        len_y: f64,
        material: Material,
    ) -> Result<Self> {
        let normal = normal.normalize();
        if !normal.is_finite() {
            return Err(RenderError::DegenerateGeometry(
                "plane normal must be non-zero".into(),
            ));
        }

        let dir_x = (dir_x - normal * dir_x.dot(normal)).normalize();
        if !dir_x.is_finite() {
            return Err(RenderError::DegenerateGeometry(
                "plane axis must not be parallel to its normal".into(),
            ));
        }

        Ok(Self {
            center,
            normal,
            dir_x,
            dir_y: normal.cross(dir_x),
            extent_x: Interval::symmetric(len_x.max(0.0)),
            extent_y: Interval::symmetric(len_y.max(0.0)),
            offset: center.dot(normal),
            material,
        })
    }

    /// Unit normal as constructed, before orientation toward a ray.
    pub fn normal(&self) -> Vector {
        self.normal
    }

    /// Second in-plane axis, `normal × dir_x`.
    pub fn dir_y(&self) -> Vector {
        self.dir_y
    }

    /// True if the projection of `point` onto the plane falls inside the rectangle.
    pub fn within_bounds(&self, point: Vector) -> bool {
        let local = point - self.center;
        self.extent_x.contains(local.dot(self.dir_x)) && self.extent_y.contains(local.dot(self.dir_y))
    }
}

impl Hittable for Plane {
    fn intersect(&self, ray: &Ray) -> Option<Intersection> {
        let facing = ray.direction.dot(self.normal);
        let height = ray.origin.dot(self.normal) - self.offset;

        // Parallel rays divide by zero.
        let t = -height / facing;
        if !t.is_finite() {
            return None;
        }

        if height.abs() <= PLANE_THICKNESS && self.within_bounds(ray.origin) {
            return None;
        }
        if t <= 0.0 {
            return None;
        }

        let point = ray.at(t);
        if !self.within_bounds(point) {
            return None;
        }

        let normal = if facing > 0.0 { -self.normal } else { self.normal };
        Some(Intersection {
            point,
            distance: t,
            material: self.material,
            normal,
            reflection: reflect(normal, -ray.direction),
        })
    }
}
