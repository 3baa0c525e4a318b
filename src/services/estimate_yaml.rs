use std::io::{self, Write};

use serde::Serialize;

use crate::domain::estimate::{JobEstimate, LineAmount, round_to_cents};

#[derive(Serialize)]
struct EstimateRecord {
    total_cost: f64,
    line_items: Vec<LineItemRecord>,
}

#[derive(Serialize)]
struct LineItemRecord {
    label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    cost: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    note: Option<String>,
}

/// Amounts are written in cents precision, the same as on screen.
fn to_record(estimate: &JobEstimate) -> EstimateRecord {
    EstimateRecord {
        total_cost: round_to_cents(estimate.total_cost),
        line_items: estimate
            .line_items
            .iter()
            .map(|item| match &item.amount {
                LineAmount::Cost(amount) => LineItemRecord {
                    label: item.label.clone(),
                    cost: Some(round_to_cents(*amount)),
                    note: None,
                },
                LineAmount::Note(note) => LineItemRecord {
                    label: item.label.clone(),
                    cost: None,
                    note: Some(note.clone()),
                },
            })
            .collect(),
    }
}

pub fn serialize_estimate_to_yaml<W: Write>(writer: &mut W, estimate: &JobEstimate) -> io::Result<()> {
    let yaml = serde_yaml::to_string(&to_record(estimate))
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    writer.write_all(yaml.as_bytes())
}

pub fn serialize_estimate_to_json<W: Write>(writer: &mut W, estimate: &JobEstimate) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *writer, &to_record(estimate))
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    writer.write_all(b"\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build_estimate() -> JobEstimate {
        let mut estimate = JobEstimate::new(561.9000000000001);
        estimate.push_cost("Base (Height + Diameter)", 468.00000000000006);
        estimate.push_cost("Debris (Included)", 86.4);
        estimate.push_note("Climbed (Included)", "20% Increase");
        estimate.push_cost("Travel", 7.5);
        estimate
    }

    #[test]
    fn test_serialize_estimate_to_yaml() {
        let mut buf = Vec::new();
        serialize_estimate_to_yaml(&mut buf, &build_estimate()).unwrap();
        let output = String::from_utf8(buf).unwrap();

        assert!(output.contains("total_cost: 561.9"));
        assert!(output.contains("label: Base (Height + Diameter)"));
        assert!(output.contains("cost: 468.0"));
        assert!(output.contains("note: 20% Increase"));
        assert!(output.contains("cost: 7.5"));
    }

    #[test]
    fn test_serialize_estimate_to_json() {
        let mut buf = Vec::new();
        serialize_estimate_to_json(&mut buf, &build_estimate()).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();

        assert_eq!(value["total_cost"], 561.9);
        assert_eq!(value["line_items"][1]["label"], "Debris (Included)");
        assert_eq!(value["line_items"][2]["note"], "20% Increase");
        assert!(value["line_items"][2].get("cost").is_none());
    }
}
