use crate::error::{PipelineError, PipelineResult};
use serde::{Deserialize, Serialize};

/// Fixed value range a widget normalizes against. Not derived from the data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Domain {
    pub min: f64,
    pub max: f64,
}

impl Domain {
    pub fn new(min: f64, max: f64) -> PipelineResult<Self> {
        let domain = Self { min, max };
        domain.validate()?;
        Ok(domain)
    }

    pub fn validate(&self) -> PipelineResult<()> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(PipelineError::invalid(format!(
                "domain bounds must be finite, got {}..{}",
                self.min, self.max
            )));
        }
        if self.min > self.max {
            return Err(PipelineError::invalid(format!(
                "domain min ({}) must not exceed max ({})",
                self.min, self.max
            )));
        }
        Ok(())
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }
}

/// Maps `value` into `[0, 1]` relative to `domain`, clamping outliers.
///
/// A zero-width or inverted domain and a NaN value all normalize to 0.
pub fn normalize(value: f64, domain: &Domain) -> f64 {
    let span = domain.span();
    if span <= 0.0 || !span.is_finite() {
        return 0.0;
    }
    let t = (value - domain.min) / span;
    if t.is_nan() {
        0.0
    } else {
        t.clamp(0.0, 1.0)
    }
}

/// Picks one of `palette_size` equal-width buckets for `value`.
///
/// Never fails: any input lands in `0..palette_size`, and a palette size of
/// zero behaves like a single bucket.
pub fn quantize(value: f64, domain: &Domain, palette_size: usize) -> usize {
    let buckets = palette_size.max(1);
    let t = normalize(value, domain);
    ((t * buckets as f64).floor() as usize).min(buckets - 1)
}
