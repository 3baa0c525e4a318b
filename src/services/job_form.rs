use clap::ValueEnum;
use thiserror::Error;

use crate::domain::job::{
    Accessibility, BackfillVolume, RootDepth, StumpJobInput, TreeCondition, TreeJobInput,
};
use crate::services::pricing::{EstimateError, RESET_PROMPT, require_positive};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("unknown field: {0}")]
    UnknownField(String),
    #[error("invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },
}

/// Raw field state of the tree removal screen.
///
/// Text fields are kept exactly as typed; dropdowns are option positions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeForm {
    pub height: String,
    pub diameter: String,
    pub accessibility: usize,
    pub climbed: bool,
    pub condition: usize,
    pub debris_removal: bool,
    pub travel_distance: String,
}

impl TreeForm {
    pub const FIELDS: [&'static str; 7] = [
        "height",
        "diameter",
        "access",
        "climbed",
        "condition",
        "debris",
        "travel",
    ];

    pub fn collect(&self) -> Result<TreeJobInput, EstimateError> {
        let height = parse_measurement(&self.height, EstimateError::InvalidHeight)?;
        let diameter = parse_measurement(&self.diameter, EstimateError::InvalidDiameter)?;
        let travel_distance = parse_travel_distance(&self.travel_distance)?;
        Ok(TreeJobInput {
            height,
            diameter,
            accessibility: Accessibility::from_index(self.accessibility),
            climbed: self.climbed,
            condition: TreeCondition::from_index(self.condition),
            debris_removal: self.debris_removal,
            travel_distance,
        })
    }

    pub fn reset(&mut self) -> &'static str {
        *self = Self::default();
        RESET_PROMPT
    }

    pub fn set_field(&mut self, field: &str, value: &str) -> Result<(), FormError> {
        match field {
            "height" => self.height = value.to_string(),
            "diameter" => self.diameter = value.to_string(),
            "access" => self.accessibility = parse_option::<Accessibility>(field, value)?,
            "climbed" => self.climbed = parse_toggle(field, value)?,
            "condition" => self.condition = parse_option::<TreeCondition>(field, value)?,
            "debris" => self.debris_removal = parse_toggle(field, value)?,
            "travel" => self.travel_distance = value.to_string(),
            _ => return Err(FormError::UnknownField(field.to_string())),
        }
        Ok(())
    }

    pub fn describe(&self) -> Vec<String> {
        vec![
            format!("height: {}", self.height),
            format!("diameter: {}", self.diameter),
            format!("access: {}", Accessibility::from_index(self.accessibility)),
            format!("climbed: {}", toggle_text(self.climbed)),
            format!("condition: {}", TreeCondition::from_index(self.condition)),
            format!("debris: {}", toggle_text(self.debris_removal)),
            format!("travel: {}", self.travel_distance),
        ]
    }
}

/// Raw field state of the stump removal screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StumpForm {
    pub diameter: String,
    pub accessibility: usize,
    pub root_depth: usize,
    pub debris_removal: bool,
    pub backfill_volume: usize,
    pub travel_distance: String,
}

impl StumpForm {
    pub const FIELDS: [&'static str; 6] = ["diameter", "access", "root", "debris", "backfill", "travel"];

    pub fn collect(&self) -> Result<StumpJobInput, EstimateError> {
        let diameter = parse_measurement(&self.diameter, EstimateError::InvalidDiameter)?;
        let travel_distance = parse_travel_distance(&self.travel_distance)?;
        Ok(StumpJobInput {
            diameter,
            accessibility: Accessibility::from_index(self.accessibility),
            root_depth: RootDepth::from_index(self.root_depth),
            debris_removal: self.debris_removal,
            backfill_volume: BackfillVolume::from_index(self.backfill_volume),
            travel_distance,
        })
    }

    pub fn reset(&mut self) -> &'static str {
        *self = Self::default();
        RESET_PROMPT
    }

    pub fn set_field(&mut self, field: &str, value: &str) -> Result<(), FormError> {
        match field {
            "diameter" => self.diameter = value.to_string(),
            "access" => self.accessibility = parse_option::<Accessibility>(field, value)?,
            "root" => self.root_depth = parse_option::<RootDepth>(field, value)?,
            "debris" => self.debris_removal = parse_toggle(field, value)?,
            "backfill" => self.backfill_volume = parse_option::<BackfillVolume>(field, value)?,
            "travel" => self.travel_distance = value.to_string(),
            _ => return Err(FormError::UnknownField(field.to_string())),
        }
        Ok(())
    }

    pub fn describe(&self) -> Vec<String> {
        vec![
            format!("diameter: {}", self.diameter),
            format!("access: {}", Accessibility::from_index(self.accessibility)),
            format!("root: {}", RootDepth::from_index(self.root_depth)),
            format!("debris: {}", toggle_text(self.debris_removal)),
            format!("backfill: {}", BackfillVolume::from_index(self.backfill_volume)),
            format!("travel: {}", self.travel_distance),
        ]
    }
}

fn parse_measurement(raw: &str, error: EstimateError) -> Result<f64, EstimateError> {
    let value = raw.trim().parse::<f64>().map_err(|_| error)?;
    require_positive(value, error)
}

/// Blank travel distance means the job is local.
fn parse_travel_distance(raw: &str) -> Result<f64, EstimateError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(0.0);
    }
    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => Ok(value),
        _ => Err(EstimateError::InvalidTravelDistance),
    }
}

fn parse_toggle(field: &str, value: &str) -> Result<bool, FormError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "on" | "yes" | "true" | "1" => Ok(true),
        "off" | "no" | "false" | "0" => Ok(false),
        _ => Err(FormError::InvalidValue {
            field: field.to_string(),
            value: value.to_string(),
        }),
    }
}

/// Accepts either an option position or the option's command-line name.
fn parse_option<E: ValueEnum + PartialEq>(field: &str, value: &str) -> Result<usize, FormError> {
    let value = value.trim();
    let variants = E::value_variants();
    let position = match value.parse::<usize>() {
        Ok(index) => (index < variants.len()).then_some(index),
        Err(_) => <E as ValueEnum>::from_str(value, true)
            .ok()
            .and_then(|choice| variants.iter().position(|variant| *variant == choice)),
    };
    position.ok_or_else(|| FormError::InvalidValue {
        field: field.to_string(),
        value: value.to_string(),
    })
}

fn toggle_text(on: bool) -> &'static str {
    if on { "on" } else { "off" }
}
