use std::path::Path;

use crate::commands::base_commands::{Commands, SoundAction};
use crate::services::app_config::AppConfig;
use crate::services::audio::{AudioSlot, SilentOutput, apply_sound_toggle};
use crate::services::settings_store::{SOUND_MUTED_KEY, SettingsStore, YamlSettingsStore};

pub fn sound_command(cmd: Commands, config: &AppConfig, settings_path: &Path) {
    if let Commands::Sound { action } = cmd {
        let mut settings = match YamlSettingsStore::open(settings_path) {
            Ok(store) => store,
            Err(e) => {
                eprintln!("Failed to open settings: {e:?}");
                return;
            }
        };

        let sound_on = match action {
            SoundAction::Status => {
                println!("{}", sound_status_line(settings.get_bool(SOUND_MUTED_KEY)));
                return;
            }
            SoundAction::Mute => false,
            SoundAction::Unmute => true,
        };

        let mut audio = AudioSlot::new();
        if let Err(e) = audio.initialize(Box::new(SilentOutput::new()), &settings, config) {
            eprintln!("Failed to start audio: {e:?}");
            return;
        }

        if let Err(e) = apply_sound_toggle(&mut audio, &mut settings, sound_on) {
            eprintln!("Failed to save sound preference: {e:?}");
        } else {
            println!("{}", sound_status_line(!sound_on));
            println!("Sound preference written to {}", settings.path().display());
        }
    }
}

pub fn sound_status_line(muted: bool) -> String {
    format!("Sound: {}", if muted { "off" } else { "on" })
}
