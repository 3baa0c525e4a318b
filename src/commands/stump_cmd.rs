use crate::commands::base_commands::Commands;
use crate::commands::report_format::emit_estimate;
use crate::services::job_form::StumpForm;
use crate::services::pricing::Calculator;
use crate::services::stump_pricing::StumpCalculator;

pub fn stump_command(cmd: Commands) {
    if let Commands::Stump {
        diameter,
        access,
        root_depth,
        debris,
        backfill,
        travel,
        format,
        output,
    } = cmd
    {
        let form = StumpForm {
            diameter,
            accessibility: access.as_index(),
            root_depth: root_depth.as_index(),
            debris_removal: debris,
            backfill_volume: backfill.as_index(),
            travel_distance: travel.unwrap_or_default(),
        };

        let estimate = match form
            .collect()
            .and_then(|input| StumpCalculator.estimate(&input))
        {
            Ok(estimate) => estimate,
            Err(e) => {
                log::debug!("Rejected stump input: {e:?}");
                println!("{e}");
                return;
            }
        };

        emit_estimate(&estimate, format, output.as_deref());
    }
}
