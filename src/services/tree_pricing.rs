use crate::domain::estimate::JobEstimate;
use crate::domain::job::TreeJobInput;
use crate::services::pricing::{
    Calculator, EstimateError, included_label, require_finite, require_positive, travel_cost,
};

const HEIGHT_RATE_PER_FOOT: f64 = 4.0;
const DIAMETER_RATE_PER_INCH: f64 = 15.0;
const DEBRIS_RATE_PER_FOOT: f64 = 2.0;
const CLIMBED_MULTIPLIER: f64 = 1.2;

pub struct TreeCalculator;

impl Calculator for TreeCalculator {
    type Input = TreeJobInput;

    fn estimate(&self, input: &TreeJobInput) -> Result<JobEstimate, EstimateError> {
        estimate_tree_job(input)
    }
}

/// Prices a tree removal.
///
/// Debris haul-off is scaled by the access multiplier twice: once for the
/// haul itself and once more when it is added to the job cost.
pub fn estimate_tree_job(input: &TreeJobInput) -> Result<JobEstimate, EstimateError> {
    let height = require_positive(input.height, EstimateError::InvalidHeight)?;
    let diameter = require_positive(input.diameter, EstimateError::InvalidDiameter)?;
    let travel_cost = travel_cost(input.travel_distance)?;

    let base_cost = height * HEIGHT_RATE_PER_FOOT + diameter * DIAMETER_RATE_PER_INCH;
    let access_multiplier = input.accessibility.multiplier();
    let climbed_multiplier = if input.climbed { CLIMBED_MULTIPLIER } else { 1.0 };
    let condition_multiplier = input.condition.multiplier();
    let debris_cost = if input.debris_removal {
        height * DEBRIS_RATE_PER_FOOT * access_multiplier
    } else {
        0.0
    };

    let base_line = base_cost * climbed_multiplier * condition_multiplier;
    let debris_line = debris_cost * access_multiplier;
    let job_cost = base_line + debris_line;
    let total_cost = job_cost + travel_cost;

    let mut estimate = JobEstimate::new(total_cost);
    estimate.push_cost("Base (Height + Diameter)", base_line);
    estimate.push_cost(
        format!("Debris ({})", included_label(input.debris_removal)),
        debris_line,
    );
    estimate.push_note(
        format!("Climbed ({})", included_label(input.climbed)),
        if input.climbed { "20% Increase" } else { "None" },
    );
    estimate.push_cost("Travel", travel_cost);
    require_finite(estimate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::estimate::LineAmount;
    use crate::domain::job::{Accessibility, TreeCondition};
    use crate::services::pricing::RESET_PROMPT;
    use crate::test_support::tree_input;
    use proptest::prelude::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-6,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn plain_healthy_tree_costs_base_rate() {
        let estimate = estimate_tree_job(&tree_input(30.0, 12.0)).unwrap();

        assert_close(estimate.total_cost, 300.0);
        assert_eq!(format!("{:.2}", estimate.total_cost), "300.00");
        assert_eq!(estimate.cost_of("Base (Height + Diameter)"), Some(300.0));
        assert_eq!(estimate.cost_of("Debris (None)"), Some(0.0));
        assert_eq!(estimate.cost_of("Travel"), Some(0.0));
    }

    #[test]
    fn climbed_dead_tree_with_debris_and_travel() {
        let input = TreeJobInput {
            accessibility: Accessibility::Medium,
            climbed: true,
            condition: TreeCondition::Dead,
            debris_removal: true,
            travel_distance: 10.0,
            ..tree_input(30.0, 12.0)
        };

        let estimate = estimate_tree_job(&input).unwrap();

        assert_close(estimate.total_cost, 561.9);
        assert_eq!(format!("{:.2}", estimate.total_cost), "561.90");
        assert_close(estimate.cost_of("Base (Height + Diameter)").unwrap(), 468.0);
        assert_close(estimate.cost_of("Debris (Included)").unwrap(), 86.4);
        assert_close(estimate.cost_of("Travel").unwrap(), 7.5);
    }

    #[test]
    fn line_items_are_in_display_order() {
        let input = TreeJobInput {
            climbed: true,
            ..tree_input(10.0, 10.0)
        };
        let estimate = estimate_tree_job(&input).unwrap();
        let labels: Vec<&str> = estimate
            .line_items
            .iter()
            .map(|item| item.label.as_str())
            .collect();

        assert_eq!(
            labels,
            [
                "Base (Height + Diameter)",
                "Debris (None)",
                "Climbed (Included)",
                "Travel"
            ]
        );
        assert_eq!(
            estimate.line_items[2].amount,
            LineAmount::Note("20% Increase".to_string())
        );
    }

    #[test]
    fn climbed_line_is_not_counted_twice() {
        let plain = estimate_tree_job(&tree_input(20.0, 10.0)).unwrap();
        let climbed = estimate_tree_job(&TreeJobInput {
            climbed: true,
            ..tree_input(20.0, 10.0)
        })
        .unwrap();

        assert_close(climbed.total_cost, plain.total_cost * 1.2);
    }

    #[test]
    fn invalid_height_is_reported_before_diameter() {
        assert_eq!(
            estimate_tree_job(&tree_input(0.0, 0.0)),
            Err(EstimateError::InvalidHeight)
        );
        assert_eq!(
            estimate_tree_job(&tree_input(-4.0, 12.0)),
            Err(EstimateError::InvalidHeight)
        );
        assert_eq!(
            estimate_tree_job(&tree_input(f64::NAN, 12.0)),
            Err(EstimateError::InvalidHeight)
        );
    }

    #[test]
    fn invalid_diameter_is_rejected() {
        assert_eq!(
            estimate_tree_job(&tree_input(30.0, 0.0)),
            Err(EstimateError::InvalidDiameter)
        );
        assert_eq!(
            estimate_tree_job(&tree_input(30.0, -1.0)),
            Err(EstimateError::InvalidDiameter)
        );
    }

    #[test]
    fn overflowing_height_is_rejected() {
        assert_eq!(
            estimate_tree_job(&tree_input(1e308, 12.0)),
            Err(EstimateError::OutOfRange)
        );
    }

    #[test]
    fn negative_travel_is_rejected() {
        let input = TreeJobInput {
            travel_distance: -2.0,
            ..tree_input(30.0, 12.0)
        };
        assert_eq!(
            estimate_tree_job(&input),
            Err(EstimateError::InvalidTravelDistance)
        );
    }

    #[test]
    fn reset_input_does_not_compute() {
        let calculator = TreeCalculator;
        let reset = calculator.reset();

        assert_eq!(reset.message, RESET_PROMPT);
        assert_eq!(reset.input, TreeJobInput::default());
        assert_eq!(
            calculator.estimate(&reset.input),
            Err(EstimateError::InvalidHeight)
        );
    }

    fn accessibility() -> impl Strategy<Value = Accessibility> {
        (0usize..3).prop_map(Accessibility::from_index)
    }

    fn condition() -> impl Strategy<Value = TreeCondition> {
        (0usize..3).prop_map(TreeCondition::from_index)
    }

    prop_compose! {
        fn valid_tree_input()(
            height in 0.1f64..500.0,
            diameter in 0.1f64..200.0,
            accessibility in accessibility(),
            climbed in any::<bool>(),
            condition in condition(),
            debris_removal in any::<bool>(),
            travel_distance in 0.0f64..500.0,
        ) -> TreeJobInput {
            TreeJobInput {
                height,
                diameter,
                accessibility,
                climbed,
                condition,
                debris_removal,
                travel_distance,
            }
        }
    }

    proptest! {
        #[test]
        fn total_equals_sum_of_cost_lines(input in valid_tree_input()) {
            let estimate = estimate_tree_job(&input).unwrap();
            prop_assert!((estimate.total_cost - estimate.cost_sum()).abs() < 1e-6);
        }

        #[test]
        fn estimate_is_idempotent(input in valid_tree_input()) {
            prop_assert_eq!(estimate_tree_job(&input), estimate_tree_job(&input));
        }

        #[test]
        fn non_positive_height_never_estimates(height in -500.0f64..=0.0, diameter in 0.1f64..200.0) {
            prop_assert_eq!(
                estimate_tree_job(&tree_input(height, diameter)),
                Err(EstimateError::InvalidHeight)
            );
        }
    }
}
