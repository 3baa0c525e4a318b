use arborquote::commands::base_commands::{CliArgs, Commands};
use arborquote::commands::completions_cmd::completions_command;
use arborquote::commands::menu_cmd::menu_command;
use arborquote::commands::sound_cmd::sound_command;
use arborquote::commands::stump_cmd::stump_command;
use arborquote::commands::tree_cmd::tree_command;
use arborquote::services::app_config::AppConfig;
use clap::Parser;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = CliArgs::parse();
    match args.command {
        cmd @ Commands::Tree { .. } => tree_command(cmd),
        cmd @ Commands::Stump { .. } => stump_command(cmd),
        cmd @ Commands::Completions { .. } => completions_command(cmd),
        cmd @ (Commands::Sound { .. } | Commands::Menu) => {
            let config = match AppConfig::load(args.config.as_deref()) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("Failed to load config: {e:?}");
                    return;
                }
            };
            let settings_path = match config.resolve_settings_path(args.settings.as_deref()) {
                Ok(path) => path,
                Err(e) => {
                    eprintln!("Failed to locate settings file: {e:?}");
                    return;
                }
            };
            log::debug!("Using settings file {}", settings_path.display());

            if let Commands::Menu = cmd {
                menu_command(cmd, &config, &settings_path);
            } else {
                sound_command(cmd, &config, &settings_path);
            }
        }
    }
}
