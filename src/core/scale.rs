use serde::{Deserialize, Serialize};

/// Linear mapping from a value domain onto a pixel range.
///
/// Values outside the domain extrapolate instead of clamping, so overshoot
/// animations can run past the axis ends. A degenerate domain
/// (`domain_min == domain_max`) maps every value to `range_min`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain_min: f64,
    domain_max: f64,
    range_min: f64,
    range_max: f64,
}

impl LinearScale {
    #[must_use]
    pub const fn new(domain_min: f64, domain_max: f64, range_min: f64, range_max: f64) -> Self {
        Self {
            domain_min,
            domain_max,
            range_min,
            range_max,
        }
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_min, self.domain_max)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_min, self.range_max)
    }

    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.domain_max == self.domain_min
    }

    #[must_use]
    pub fn map(self, value: f64) -> f64 {
        if self.is_degenerate() {
            return self.range_min;
        }
        let normalized = (value - self.domain_min) / (self.domain_max - self.domain_min);
        self.range_min + normalized * (self.range_max - self.range_min)
    }

    /// Maps a pixel back into the domain.
    ///
    /// Degenerate domains and zero-width ranges invert to `domain_min`.
    #[must_use]
    pub fn invert(self, pixel: f64) -> f64 {
        let range_span = self.range_max - self.range_min;
        if self.is_degenerate() || range_span == 0.0 {
            return self.domain_min;
        }
        let normalized = (pixel - self.range_min) / range_span;
        self.domain_min + normalized * (self.domain_max - self.domain_min)
    }
}

/// Closure form of [`LinearScale::map`].
pub fn create_linear_scale(
    domain_min: f64,
    domain_max: f64,
    range_min: f64,
    range_max: f64,
) -> impl Fn(f64) -> f64 + Copy {
    let scale = LinearScale::new(domain_min, domain_max, range_min, range_max);
    move |value| scale.map(value)
}
