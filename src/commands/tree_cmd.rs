use crate::commands::base_commands::Commands;
use crate::commands::report_format::emit_estimate;
use crate::services::job_form::TreeForm;
use crate::services::pricing::Calculator;
use crate::services::tree_pricing::TreeCalculator;

pub fn tree_command(cmd: Commands) {
    if let Commands::Tree {
        height,
        diameter,
        access,
        climbed,
        condition,
        debris,
        travel,
        format,
        output,
    } = cmd
    {
        let form = TreeForm {
            height,
            diameter,
            accessibility: access.as_index(),
            climbed,
            condition: condition.as_index(),
            debris_removal: debris,
            travel_distance: travel.unwrap_or_default(),
        };

        let estimate = match form
            .collect()
            .and_then(|input| TreeCalculator.estimate(&input))
        {
            Ok(estimate) => estimate,
            Err(e) => {
                log::debug!("Rejected tree input: {e:?}");
                println!("{e}");
                return;
            }
        };

        emit_estimate(&estimate, format, output.as_deref());
    }
}
