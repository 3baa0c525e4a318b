use clap::ValueEnum;
use strum::{Display, EnumIter, IntoEnumIterator};

/// Site access difficulty, measured as the carry distance from the truck.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, EnumIter, Display, ValueEnum)]
pub enum Accessibility {
    #[default]
    #[strum(to_string = "Under 50 Yards")]
    Near,
    #[strum(to_string = "50 - 100 Yards")]
    Medium,
    #[strum(to_string = "100 Yards or More")]
    Far,
}

impl Accessibility {
    /// Maps a dropdown position to a tier. Unknown positions fall back to `Near`.
    pub fn from_index(index: usize) -> Self {
        Self::iter().nth(index).unwrap_or_default()
    }

    pub fn as_index(&self) -> usize {
        *self as usize
    }

    pub fn multiplier(&self) -> f64 {
        match self {
            Accessibility::Near => 1.0,
            Accessibility::Medium => 1.2,
            Accessibility::Far => 1.5,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, EnumIter, Display, ValueEnum)]
pub enum TreeCondition {
    #[default]
    Healthy,
    Diseased,
    Dead,
}

impl TreeCondition {
    pub fn from_index(index: usize) -> Self {
        Self::iter().nth(index).unwrap_or_default()
    }

    pub fn as_index(&self) -> usize {
        *self as usize
    }

    pub fn multiplier(&self) -> f64 {
        match self {
            TreeCondition::Healthy => 1.0,
            TreeCondition::Diseased => 1.1,
            TreeCondition::Dead => 1.3,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, EnumIter, Display, ValueEnum)]
pub enum RootDepth {
    #[default]
    #[strum(to_string = "2 - 4\"")]
    Shallow,
    #[strum(to_string = "5 - 8\"")]
    Medium,
    #[strum(to_string = "9\"+")]
    Deep,
}

impl RootDepth {
    pub fn from_index(index: usize) -> Self {
        Self::iter().nth(index).unwrap_or_default()
    }

    pub fn as_index(&self) -> usize {
        *self as usize
    }

    pub fn multiplier(&self) -> f64 {
        match self {
            RootDepth::Shallow => 1.0,
            RootDepth::Medium => 1.3,
            RootDepth::Deep => 1.6,
        }
    }
}

/// Cubic yards of fill dirt brought in after grinding a stump.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, EnumIter, Display, ValueEnum)]
pub enum BackfillVolume {
    #[default]
    None,
    #[strum(to_string = "1 Yard")]
    One,
    #[strum(to_string = "2 Yards")]
    Two,
    #[strum(to_string = "3 Yards")]
    Three,
}

impl BackfillVolume {
    pub fn from_index(index: usize) -> Self {
        Self::iter().nth(index).unwrap_or_default()
    }

    pub fn as_index(&self) -> usize {
        *self as usize
    }

    /// Flat cost before the access multiplier is applied.
    pub fn base_cost(&self) -> f64 {
        match self {
            BackfillVolume::None => 0.0,
            BackfillVolume::One => 100.0,
            BackfillVolume::Two => 200.0,
            BackfillVolume::Three => 300.0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TreeJobInput {
    /// Feet.
    pub height: f64,
    /// Inches at chest height.
    pub diameter: f64,
    pub accessibility: Accessibility,
    pub climbed: bool,
    pub condition: TreeCondition,
    pub debris_removal: bool,
    /// Miles, zero when not supplied.
    pub travel_distance: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StumpJobInput {
    /// Inches.
    pub diameter: f64,
    pub accessibility: Accessibility,
    pub root_depth: RootDepth,
    pub debris_removal: bool,
    pub backfill_volume: BackfillVolume,
    /// Miles, zero when not supplied.
    pub travel_distance: f64,
}
