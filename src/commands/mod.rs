pub mod base_commands;
pub mod completions_cmd;
pub mod menu_cmd;
pub mod report_format;
pub mod sound_cmd;
pub mod stump_cmd;
pub mod tree_cmd;
