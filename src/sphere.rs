//! Sphere primitive for ray tracing.
//!
//! Intersection solves the normalized quadratic `t² + p·t + q = 0` obtained by
//! substituting the ray into `|X − C|² = r²`.

use crate::error::{RenderError, Result};
use crate::hittable::{Hittable, Intersection};
use crate::material::Material;
use crate::ray::Ray;
use crate::vector::{reflect, Vector};

/// Sphere primitive defined by center, radius, and material.
#[derive(Debug, Clone, PartialEq)]
pub struct Sphere {
    /// Center point of the sphere in world coordinates.
    pub center: Vector,

    /// Radius of the sphere; strictly positive when built with [`Sphere::new`].
    pub radius: f64,

    /// Material properties used for shading.
    pub material: Material,
}

impl Sphere {
    /// Create a new sphere.
    ///
    /// Fails unless `radius` is finite and positive: the hit normal divides by
    /// the radius.
    pub fn new(center: Vector, radius: f64, material: Material) -> Result<Self> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(RenderError::DegenerateGeometry(format!(
                "sphere radius must be positive, got {radius}"
            )));
        }
        Ok(Self {
            center,
            radius,
            material,
        })
    }

    /// True if `point` lies inside or on the sphere.
    pub fn contains(&self, point: Vector) -> bool {
        (point - self.center).length_squared() <= self.radius * self.radius
    }

    /// Pick the ray parameter of the visible hit from the two roots.
    fn nearest_root(t1: f64, t2: f64) -> Option<f64> {
        if !t1.is_finite() || !t2.is_finite() {
            return None;
        }
        if t1 < 0.0 && t2 < 0.0 {
            return None;
        }
        if t1 == t2 {
            return (t1 > 0.0).then_some(t1);
        }

        let (near, far) = if t1 < t2 { (t1, t2) } else { (t2, t1) };
        if near > 0.0 {
            Some(near)
        } else if far > 0.0 {
            Some(far)
        } else {
            None
        }
    }
}

impl Hittable for Sphere {
    fn intersect(&self, ray: &Ray) -> Option<Intersection> {
        // Shading from inside a primitive is not supported.
        if self.contains(ray.origin) {
            return None;
        }

        let oc = ray.origin - self.center;
        let a = ray.direction.length_squared();
        let p = 2.0 * ray.direction.dot(oc) / a;
        let q = (oc.length_squared() - self.radius * self.radius) / a;

        let half_p = p / 2.0;
        let discriminant = half_p * half_p - q;
        // Also rejects NaN from a zero-length direction.
        if discriminant.is_nan() || discriminant < 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();
        let t = Self::nearest_root(-half_p + sqrtd, -half_p - sqrtd)?;

        let point = ray.at(t);
        let normal = (point - self.center) / self.radius;
        Some(Intersection {
            point,
            distance: t,
            material: self.material,
            normal,
            reflection: reflect(normal, -ray.direction),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use approx::assert_abs_diff_eq;

    fn sphere() -> Sphere {
        Sphere::new(
            Vector::new(0.0, 20.0, 0.0),
            15.0,
            Material::flat(Color::new(150, 150, 0)),
        )
        .unwrap()
    }

    #[test]
    fn hit_toward_center_is_distance_minus_radius() {
        let ray = Ray::new(Vector::ZERO, Vector::Y);
        let hit = sphere().intersect(&ray).expect("ray aimed at the center must hit");

        assert_abs_diff_eq!(hit.distance, 5.0, epsilon = 1e-9);
        assert_abs_diff_eq!(hit.point.y, 5.0, epsilon = 1e-9);
        assert_abs_diff_eq!(hit.normal.y, -1.0, epsilon = 1e-9);
        // Head-on hits bounce straight back.
        assert_abs_diff_eq!(hit.reflection.y, -1.0, epsilon = 1e-9);
    }

    #[test]
    fn unnormalized_direction_scales_distance() {
        let ray = Ray::new(Vector::ZERO, Vector::new(0.0, 2.0, 0.0));
        let hit = sphere().intersect(&ray).unwrap();
        assert_abs_diff_eq!(hit.distance, 2.5, epsilon = 1e-9);
        assert_abs_diff_eq!(hit.point.y, 5.0, epsilon = 1e-9);
    }

    #[test]
    fn origin_inside_misses() {
        let ray = Ray::new(Vector::new(0.0, 20.0, 0.0), Vector::Y);
        assert!(sphere().intersect(&ray).is_none());
    }

    #[test]
    fn passing_ray_misses() {
        let ray = Ray::new(Vector::new(16.0, 0.0, 0.0), Vector::Y);
        assert!(sphere().intersect(&ray).is_none());
    }

    #[test]
    fn sphere_behind_origin_misses() {
        let ray = Ray::new(Vector::ZERO, -Vector::Y);
        assert!(sphere().intersect(&ray).is_none());
    }

    #[test]
    fn zero_direction_misses() {
        let ray = Ray::new(Vector::ZERO, Vector::ZERO);
        assert!(sphere().intersect(&ray).is_none());
    }

    #[test]
    fn tangent_ray_touches_once() {
        let ray = Ray::new(Vector::new(15.0, 0.0, 0.0), Vector::Y);
        let hit = sphere().intersect(&ray).expect("tangent ray touches the sphere");
        assert_abs_diff_eq!(hit.distance, 20.0, epsilon = 1e-9);
        assert_abs_diff_eq!(hit.normal.x, 1.0, epsilon = 1e-9);
    }

    #[test]
    fn non_positive_radius_is_rejected() {
        let material = Material::flat(Color::WHITE);
        for radius in [0.0, -2.0, f64::NAN, f64::INFINITY] {
            assert!(
                matches!(
                    Sphere::new(Vector::ZERO, radius, material),
                    Err(RenderError::DegenerateGeometry(_))
                ),
                "radius {radius}"
            );
        }
        assert!(Sphere::new(Vector::ZERO, 1e-3, material).is_ok());
    }

    #[test]
    fn oblique_reflection_keeps_angle() {
        let sphere = Sphere::new(Vector::ZERO, 1.0, Material::mirror()).unwrap();
        let ray = Ray::new(Vector::new(-5.0, 0.5, 0.0), Vector::X);

        let hit = sphere.intersect(&ray).unwrap();

        assert_abs_diff_eq!(hit.point.x, -(0.75f64.sqrt()), epsilon = 1e-9);
        assert_abs_diff_eq!(ray.direction.dot(hit.normal), -hit.reflection.dot(hit.normal), epsilon = 1e-9);
        assert_abs_diff_eq!(hit.reflection.length(), 1.0, epsilon = 1e-9);
        assert!(hit.reflection.x < 0.0 && hit.reflection.y > 0.0);
    }
}
