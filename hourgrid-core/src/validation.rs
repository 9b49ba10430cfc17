use crate::error::{PipelineError, PipelineResult};

pub struct Validator;

impl Validator {
    pub fn positive(name: &str, value: f64) -> PipelineResult<f64> {
        if value.is_finite() && value > 0.0 {
            Ok(value)
        } else {
            Err(PipelineError::invalid(format!(
                "{name} must be a positive number, got {value}"
            )))
        }
    }

    pub fn non_negative(name: &str, value: f64) -> PipelineResult<f64> {
        if value.is_finite() && value >= 0.0 {
            Ok(value)
        } else {
            Err(PipelineError::invalid(format!(
                "{name} must be zero or greater, got {value}"
            )))
        }
    }

    pub fn at_least_one(name: &str, value: usize) -> PipelineResult<usize> {
        if value >= 1 {
            Ok(value)
        } else {
            Err(PipelineError::invalid(format!("{name} must be at least 1")))
        }
    }

    pub fn ordered_bounds(
        low_name: &str,
        low: f64,
        high_name: &str,
        high: f64,
    ) -> PipelineResult<()> {
        if low <= high {
            Ok(())
        } else {
            Err(PipelineError::invalid(format!(
                "{low_name} ({low}) must not exceed {high_name} ({high})"
            )))
        }
    }
}
