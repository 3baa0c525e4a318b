/// Rounds to whole cents with half-cent ties going away from zero.
pub fn round_to_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

#[derive(Debug, Clone, PartialEq)]
pub enum LineAmount {
    Cost(f64),
    /// Informational only, never part of the total.
    Note(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct LineItem {
    pub label: String,
    pub amount: LineAmount,
}

/// Itemized price quote. Line items are kept in display order.
#[derive(Debug, Clone, PartialEq)]
pub struct JobEstimate {
    pub total_cost: f64,
    pub line_items: Vec<LineItem>,
}

impl JobEstimate {
    pub fn new(total_cost: f64) -> Self {
        Self {
            total_cost,
            line_items: Vec::new(),
        }
    }

    pub fn push_cost(&mut self, label: impl Into<String>, amount: f64) {
        self.line_items.push(LineItem {
            label: label.into(),
            amount: LineAmount::Cost(amount),
        });
    }

    pub fn push_note(&mut self, label: impl Into<String>, note: impl Into<String>) {
        self.line_items.push(LineItem {
            label: label.into(),
            amount: LineAmount::Note(note.into()),
        });
    }

    pub fn cost_sum(&self) -> f64 {
        self.line_items
            .iter()
            .filter_map(|item| match item.amount {
                LineAmount::Cost(amount) => Some(amount),
                LineAmount::Note(_) => None,
            })
            .sum()
    }

    pub fn cost_of(&self, label: &str) -> Option<f64> {
        self.line_items.iter().find_map(|item| match item.amount {
            LineAmount::Cost(amount) if item.label == label => Some(amount),
            _ => None,
        })
    }
}
