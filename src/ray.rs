//! Ray representation.
//!
//! A ray is `r(t) = origin + t * direction`. Primary rays start on the
//! viewport, secondary rays (reflections, shadow probes) on a surface.

use crate::vector::Vector;

/// Ray in 3D space defined by origin and direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Starting point of the ray in world coordinates.
    pub origin: Vector,

    /// Direction of the ray.
    ///
    /// Not required to be unit length: intersection formulas divide by
    /// `|direction|²` and shadow probes rely on `t = 1` landing on the light.
    pub direction: Vector,
}

impl Ray {
    /// Create a new ray with origin and direction.
    pub fn new(origin: Vector, direction: Vector) -> Self {
        Self { origin, direction }
    }

    /// Point at parameter `t` along the ray.
    pub fn at(&self, t: f64) -> Vector {
        self.origin + t * self.direction
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn at_scales_unnormalized_direction() {
        let ray = Ray::new(Vector::new(1.0, 0.0, 0.0), Vector::new(0.0, 2.0, 0.0));
        assert_eq!(ray.at(1.5), Vector::new(1.0, 3.0, 0.0));
    }
}
