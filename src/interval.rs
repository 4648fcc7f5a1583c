//! Real intervals for ray parameters and bounds checks.

/// Interval `[min, max]` with inclusive and exclusive membership tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    /// Lower bound
    pub min: f64,
    /// Upper bound
    pub max: f64,
}

impl Interval {
    /// Parameters strictly between a ray origin (`t = 0`) and its target
    /// (`t = 1`), used by shadow probes.
    pub const SEGMENT: Interval = Interval { min: 0.0, max: 1.0 };

    /// Create a new interval with given min and max values
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Interval `[-half_extent, half_extent]`.
    pub const fn symmetric(half_extent: f64) -> Self {
        Self::new(-half_extent, half_extent)
    }

    /// Inclusive membership.
    pub fn contains(&self, x: f64) -> bool {
        self.min <= x && x <= self.max
    }

    /// Exclusive membership. NaN is never surrounded.
    pub fn surrounds(&self, x: f64) -> bool {
        self.min < x && x < self.max
    }
}
