pub mod app_config;
pub mod audio;
pub mod estimate_yaml;
pub mod job_form;
pub mod navigation;
pub mod pricing;
pub mod settings_store;
pub mod stump_pricing;
pub mod tree_pricing;
