//! Closed real intervals.
//!
//! Used for the valid `t` range of a ray query and for clamping color
//! channels.

/// Closed interval `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    /// Lower bound.
    pub min: f32,
    /// Upper bound.
    pub max: f32,
}

impl Interval {
    /// Contains nothing (`min > max`).
    pub const EMPTY: Interval = Interval {
        min: f32::INFINITY,
        max: f32::NEG_INFINITY,
    };

    /// Contains every real number.
    pub const UNIVERSE: Interval = Interval {
        min: f32::NEG_INFINITY,
        max: f32::INFINITY,
    };

    /// Create an interval from its bounds.
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Width of the interval.
    pub fn size(&self) -> f32 {
        self.max - self.min
    }

    /// True if `min <= x <= max`.
    pub fn contains(&self, x: f32) -> bool {
        self.min <= x && x <= self.max
    }

    /// True if `min < x < max`.
    pub fn surrounds(&self, x: f32) -> bool {
        self.min < x && x < self.max
    }

    /// `x` limited to the interval bounds.
    ///
    /// NaN maps to `min`, so a clamped value is always a valid number for a
    /// non-empty interval.
    pub fn clamp(&self, x: f32) -> f32 {
        if x.is_nan() || x < self.min {
            self.min
        } else if x > self.max {
            self.max
        } else {
            x
        }
    }

    /// Same interval with `max` replaced, used to narrow a search to the
    /// closest hit so far.
    pub fn with_max(self, max: f32) -> Self {
        Self { max, ..self }
    }
}
