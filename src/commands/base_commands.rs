use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use crate::domain::job::{Accessibility, BackfillVolume, RootDepth, TreeCondition};

#[derive(Parser)]
#[command(author, version, about)]
pub struct CliArgs {
    /// Optional application config YAML
    #[arg(long, global = true)]
    pub config: Option<String>,
    /// Settings file holding the sound preference
    #[arg(long, global = true)]
    pub settings: Option<String>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Yaml,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum SoundAction {
    /// Turn background music off
    Mute,
    /// Turn background music on
    Unmute,
    /// Show the saved sound preference
    Status,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Quote a tree removal
    Tree {
        /// Tree height in feet
        #[arg(long)]
        height: String,
        /// Trunk diameter in inches
        #[arg(short, long)]
        diameter: String,
        /// Distance from the truck to the tree
        #[arg(short, long, value_enum, default_value_t = Accessibility::Near)]
        access: Accessibility,
        /// The tree has to be climbed
        #[arg(long)]
        climbed: bool,
        /// Tree condition
        #[arg(short, long, value_enum, default_value_t = TreeCondition::Healthy)]
        condition: TreeCondition,
        /// Haul away the debris
        #[arg(long)]
        debris: bool,
        /// Travel distance in miles
        #[arg(short, long)]
        travel: Option<String>,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
        /// Write the estimate to a file instead of stdout
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Quote a stump removal
    Stump {
        /// Stump diameter in inches
        #[arg(short, long)]
        diameter: String,
        /// Distance from the truck to the stump
        #[arg(short, long, value_enum, default_value_t = Accessibility::Near)]
        access: Accessibility,
        /// Root depth
        #[arg(short, long, value_enum, default_value_t = RootDepth::Shallow)]
        root_depth: RootDepth,
        /// Haul away the grindings
        #[arg(long)]
        debris: bool,
        /// Cubic yards of backfill
        #[arg(short, long, value_enum, default_value_t = BackfillVolume::None)]
        backfill: BackfillVolume,
        /// Travel distance in miles
        #[arg(short, long)]
        travel: Option<String>,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
        /// Write the estimate to a file instead of stdout
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Change or show the background music preference
    Sound {
        #[command(subcommand)]
        action: SoundAction,
    },
    /// Interactive menu session driven from stdin
    Menu,
    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
