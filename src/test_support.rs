use crate::domain::job::{StumpJobInput, TreeJobInput};
use crate::services::job_form::{StumpForm, TreeForm};

/// A healthy, easy-access tree with no extras.
pub fn tree_input(height: f64, diameter: f64) -> TreeJobInput {
    TreeJobInput {
        height,
        diameter,
        ..TreeJobInput::default()
    }
}

/// A shallow, easy-access stump with no extras.
pub fn stump_input(diameter: f64) -> StumpJobInput {
    StumpJobInput {
        diameter,
        ..StumpJobInput::default()
    }
}

pub fn tree_form(height: &str, diameter: &str) -> TreeForm {
    TreeForm {
        height: height.to_string(),
        diameter: diameter.to_string(),
        ..TreeForm::default()
    }
}

pub fn stump_form(diameter: &str) -> StumpForm {
    StumpForm {
        diameter: diameter.to_string(),
        ..StumpForm::default()
    }
}
