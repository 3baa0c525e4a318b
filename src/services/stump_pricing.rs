use crate::domain::estimate::JobEstimate;
use crate::domain::job::StumpJobInput;
use crate::services::pricing::{
    Calculator, EstimateError, included_label, require_finite, require_positive, travel_cost,
};

const GRINDING_RATE_PER_INCH: f64 = 5.0;
const DEBRIS_RATE_PER_INCH: f64 = 4.0;

pub struct StumpCalculator;

impl Calculator for StumpCalculator {
    type Input = StumpJobInput;

    fn estimate(&self, input: &StumpJobInput) -> Result<JobEstimate, EstimateError> {
        estimate_stump_job(input)
    }
}

/// Prices a stump grinding job. Root depth scales everything except travel.
pub fn estimate_stump_job(input: &StumpJobInput) -> Result<JobEstimate, EstimateError> {
    let diameter = require_positive(input.diameter, EstimateError::InvalidDiameter)?;
    let travel_cost = travel_cost(input.travel_distance)?;

    let base_cost = diameter * GRINDING_RATE_PER_INCH;
    let access_multiplier = input.accessibility.multiplier();
    let root_multiplier = input.root_depth.multiplier();
    let debris_cost = if input.debris_removal {
        diameter * DEBRIS_RATE_PER_INCH * access_multiplier
    } else {
        0.0
    };
    let backfill_cost = input.backfill_volume.base_cost() * access_multiplier;

    let job_cost = (base_cost * access_multiplier + debris_cost + backfill_cost) * root_multiplier;
    let total_cost = job_cost + travel_cost;

    let mut estimate = JobEstimate::new(total_cost);
    estimate.push_cost("Base", base_cost * access_multiplier * root_multiplier);
    estimate.push_cost(
        format!("Debris ({})", included_label(input.debris_removal)),
        debris_cost * root_multiplier,
    );
    estimate.push_cost(
        format!("Backfill ({})", input.backfill_volume),
        backfill_cost * root_multiplier,
    );
    estimate.push_cost("Travel", travel_cost);
    require_finite(estimate)
}
