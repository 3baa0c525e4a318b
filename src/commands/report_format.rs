use std::io;

use crate::commands::base_commands::OutputFormat;
use crate::domain::estimate::{JobEstimate, LineAmount, round_to_cents};
use crate::services::estimate_yaml::{serialize_estimate_to_json, serialize_estimate_to_yaml};

pub fn format_estimate(estimate: &JobEstimate) -> String {
    let mut lines = Vec::with_capacity(estimate.line_items.len() + 1);
    lines.push(format!(
        "Estimated Cost: ${:.2}",
        round_to_cents(estimate.total_cost)
    ));
    for item in &estimate.line_items {
        lines.push(match &item.amount {
            LineAmount::Cost(amount) => {
                format!("{}: ${:.2}", item.label, round_to_cents(*amount))
            }
            LineAmount::Note(note) => format!("{}: {note}", item.label),
        });
    }
    lines.join("\n")
}

pub fn render_estimate(estimate: &JobEstimate, format: OutputFormat) -> io::Result<Vec<u8>> {
    let mut buffer = Vec::new();
    match format {
        OutputFormat::Text => {
            buffer.extend_from_slice(format_estimate(estimate).as_bytes());
            buffer.push(b'\n');
        }
        OutputFormat::Yaml => serialize_estimate_to_yaml(&mut buffer, estimate)?,
        OutputFormat::Json => serialize_estimate_to_json(&mut buffer, estimate)?,
    }
    Ok(buffer)
}

/// Prints the estimate, or writes it to `output` when a path is given.
pub fn emit_estimate(estimate: &JobEstimate, format: OutputFormat, output: Option<&str>) {
    let buffer = match render_estimate(estimate, format) {
        Ok(buffer) => buffer,
        Err(e) => {
            eprintln!("Failed to render estimate: {e:?}");
            return;
        }
    };

    match output {
        Some(path) => {
            if let Err(e) = std::fs::write(path, buffer) {
                eprintln!("Failed to write estimate: {e:?}");
            } else {
                println!("{}", format_estimate(estimate));
                println!("Estimate written to {path}");
            }
        }
        None => print!("{}", String::from_utf8_lossy(&buffer)),
    }
}
