use thiserror::Error;

use crate::domain::estimate::JobEstimate;

/// Dollars per mile driven to the job site.
pub const TRAVEL_RATE_PER_MILE: f64 = 0.75;

pub const RESET_PROMPT: &str = "Enter values and click Calculate.";

/// Rejected input. The message is what the user sees in place of a result.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EstimateError {
    #[error("Please enter a valid tree height.")]
    InvalidHeight,
    #[error("Please enter a valid diameter.")]
    InvalidDiameter,
    #[error("Please enter a valid travel distance.")]
    InvalidTravelDistance,
    #[error("The values entered are too large to price.")]
    OutOfRange,
}

/// Default input state handed back by [`Calculator::reset`].
#[derive(Debug, Clone, PartialEq)]
pub struct Reset<I> {
    pub input: I,
    pub message: &'static str,
}

pub trait Calculator {
    type Input: Default;

    fn estimate(&self, input: &Self::Input) -> Result<JobEstimate, EstimateError>;

    fn reset(&self) -> Reset<Self::Input> {
        Reset {
            input: Self::Input::default(),
            message: RESET_PROMPT,
        }
    }
}

pub(crate) fn require_positive(value: f64, error: EstimateError) -> Result<f64, EstimateError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(error)
    }
}

pub(crate) fn travel_cost(travel_distance: f64) -> Result<f64, EstimateError> {
    if !travel_distance.is_finite() || travel_distance < 0.0 {
        return Err(EstimateError::InvalidTravelDistance);
    }
    Ok(travel_distance * TRAVEL_RATE_PER_MILE)
}

/// Measurements that pass validation can still overflow once multiplied out.
pub(crate) fn require_finite(estimate: JobEstimate) -> Result<JobEstimate, EstimateError> {
    if estimate.total_cost.is_finite() && estimate.cost_sum().is_finite() {
        Ok(estimate)
    } else {
        Err(EstimateError::OutOfRange)
    }
}

pub(crate) fn included_label(included: bool) -> &'static str {
    if included { "Included" } else { "None" }
}
