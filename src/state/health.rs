//! Bounded health value.
//!
//! [`Health`] is the only place health is mutated. Every write goes through
//! [`Health::adjust`] or [`Health::set`], both of which clamp to `[0, max]`,
//! so an out-of-range value is never observable.

/// Health clamped to `[0, max]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Health {
    current: f64,
    max: f64,
}

impl Health {
    /// Create a health value. `current` is clamped into range.
    ///
    /// # Panics
    ///
    /// Panics if `max` is not a positive finite number.
    pub fn new(current: f64, max: f64) -> Self {
        assert!(max.is_finite() && max > 0.0, "max health must be positive");
        let mut health = Self { current: 0.0, max };
        health.set(current);
        health
    }

    pub fn current(&self) -> f64 {
        self.current
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    /// Fraction of max health in `[0.0, 1.0]`.
    pub fn ratio(&self) -> f64 {
        self.current / self.max
    }

    pub fn is_depleted(&self) -> bool {
        self.current <= 0.0
    }

    /// Add `delta` (negative for damage) and clamp.
    pub fn adjust(&mut self, delta: f64) {
        self.set(self.current + delta);
    }

    /// Overwrite the value, clamping into range. NaN becomes 0.
    pub fn set(&mut self, value: f64) {
        self.current = if value.is_nan() {
            0.0
        } else {
            value.clamp(0.0, self.max)
        };
    }
}
