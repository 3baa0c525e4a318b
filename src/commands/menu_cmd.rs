use std::io::{self, BufRead, Write};
use std::path::Path;

use crate::commands::base_commands::Commands;
use crate::commands::report_format::format_estimate;
use crate::commands::sound_cmd::sound_status_line;
use crate::services::app_config::AppConfig;
use crate::services::audio::{AudioSlot, SilentOutput, apply_sound_toggle};
use crate::services::job_form::{StumpForm, TreeForm};
use crate::services::navigation::{Navigator, Scene};
use crate::services::pricing::{Calculator, RESET_PROMPT};
use crate::services::settings_store::{SOUND_MUTED_KEY, SettingsStore, YamlSettingsStore};
use crate::services::stump_pricing::StumpCalculator;
use crate::services::tree_pricing::TreeCalculator;

const MAIN_MENU_HELP: &str = "Commands: tree, stump, options, close, sound on|off, exit";

/// Line-driven stand-in for the app screens: one command per input line.
pub struct MenuSession<S: SettingsStore, W: Write> {
    navigator: Navigator,
    tree_form: TreeForm,
    stump_form: StumpForm,
    audio: AudioSlot,
    settings: S,
    out: W,
}

impl<S: SettingsStore, W: Write> MenuSession<S, W> {
    pub fn new(settings: S, config: &AppConfig, out: W) -> Self {
        let mut audio = AudioSlot::new();
        if let Err(e) = audio.initialize(Box::new(SilentOutput::new()), &settings, config) {
            log::error!("Failed to start audio: {e}");
        }
        Self {
            navigator: Navigator::new(),
            tree_form: TreeForm::default(),
            stump_form: StumpForm::default(),
            audio,
            settings,
            out,
        }
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn audio(&self) -> &AudioSlot {
        &self.audio
    }

    pub fn settings(&self) -> &S {
        &self.settings
    }

    pub fn run<R: BufRead>(&mut self, input: R) -> io::Result<()> {
        self.show_scene()?;
        for line in input.lines() {
            self.handle_line(&line?)?;
            if self.navigator.has_exited() {
                break;
            }
        }
        self.out.flush()
    }

    pub fn handle_line(&mut self, line: &str) -> io::Result<()> {
        let mut words = line.split_whitespace();
        let Some(command) = words.next() else {
            return Ok(());
        };
        let args: Vec<&str> = words.collect();

        if command == "exit" {
            self.navigator.exit();
            return self.say("Goodbye.");
        }
        if command == "help" {
            return self.show_help();
        }

        match self.navigator.scene() {
            Scene::MainMenu => self.handle_main_menu(command, &args),
            Scene::TreeScreen | Scene::StumpScreen => self.handle_calculator(command, &args),
        }
    }

    fn handle_main_menu(&mut self, command: &str, args: &[&str]) -> io::Result<()> {
        let result = match command {
            "tree" => self.navigator.open_tree_calculator().map(|_| ()),
            "stump" => self.navigator.open_stump_calculator().map(|_| ()),
            "options" => self.navigator.open_options(),
            "close" => self.navigator.close_options(),
            "sound" => return self.toggle_sound(args),
            "back" => return self.go_back(),
            _ => return self.unknown(command),
        };

        match result {
            Ok(()) => match command {
                "tree" => {
                    self.tree_form.reset();
                    self.show_scene()
                }
                "stump" => {
                    self.stump_form.reset();
                    self.show_scene()
                }
                "options" => {
                    let muted = self.settings.get_bool(SOUND_MUTED_KEY);
                    self.say(format!("Options ({})", sound_status_line(muted)))
                }
                _ => self.say("Options closed."),
            },
            Err(e) => self.say(e.to_string()),
        }
    }

    fn toggle_sound(&mut self, args: &[&str]) -> io::Result<()> {
        if !self.navigator.options_open() {
            return self.say("Open options first.");
        }
        let sound_on = match args.first().copied() {
            Some("on") => true,
            Some("off") => false,
            _ => return self.say("Usage: sound on|off"),
        };
        match apply_sound_toggle(&mut self.audio, &mut self.settings, sound_on) {
            Ok(()) => self.say(sound_status_line(!sound_on)),
            Err(e) => {
                log::error!("Failed to save sound preference: {e}");
                self.say(format!("Failed to save sound preference: {e}"))
            }
        }
    }

    fn handle_calculator(&mut self, command: &str, args: &[&str]) -> io::Result<()> {
        match command {
            "set" => {
                let (Some(field), Some(_)) = (args.first(), args.get(1)) else {
                    return self.say("Usage: set <field> <value>");
                };
                let value = args[1..].join(" ");
                let result = if self.navigator.scene() == Scene::TreeScreen {
                    self.tree_form.set_field(field, &value)
                } else {
                    self.stump_form.set_field(field, &value)
                };
                match result {
                    Ok(()) => Ok(()),
                    Err(e) => self.say(e.to_string()),
                }
            }
            "calculate" => {
                let outcome = if self.navigator.scene() == Scene::TreeScreen {
                    self.tree_form
                        .collect()
                        .and_then(|input| TreeCalculator.estimate(&input))
                } else {
                    self.stump_form
                        .collect()
                        .and_then(|input| StumpCalculator.estimate(&input))
                };
                match outcome {
                    Ok(estimate) => self.say(format_estimate(&estimate)),
                    Err(e) => self.say(e.to_string()),
                }
            }
            "reset" => {
                let message = if self.navigator.scene() == Scene::TreeScreen {
                    self.tree_form.reset()
                } else {
                    self.stump_form.reset()
                };
                self.say(message)
            }
            "show" => {
                let lines = if self.navigator.scene() == Scene::TreeScreen {
                    self.tree_form.describe()
                } else {
                    self.stump_form.describe()
                };
                self.say(lines.join("\n"))
            }
            "back" => self.go_back(),
            _ => self.unknown(command),
        }
    }

    fn go_back(&mut self) -> io::Result<()> {
        match self.navigator.back_to_main_menu() {
            Ok(_) => self.show_scene(),
            Err(e) => self.say(e.to_string()),
        }
    }

    fn show_scene(&mut self) -> io::Result<()> {
        let scene = self.navigator.scene();
        self.say(format!("== {scene} =="))?;
        match scene {
            Scene::MainMenu => self.say(MAIN_MENU_HELP),
            Scene::TreeScreen | Scene::StumpScreen => self.say(RESET_PROMPT),
        }
    }

    fn show_help(&mut self) -> io::Result<()> {
        match self.navigator.scene() {
            Scene::MainMenu => self.say(MAIN_MENU_HELP),
            Scene::TreeScreen => self.say(format!(
                "Commands: set <field> <value>, calculate, reset, show, back, exit\nFields: {}",
                TreeForm::FIELDS.join(", ")
            )),
            Scene::StumpScreen => self.say(format!(
                "Commands: set <field> <value>, calculate, reset, show, back, exit\nFields: {}",
                StumpForm::FIELDS.join(", ")
            )),
        }
    }

    fn unknown(&mut self, command: &str) -> io::Result<()> {
        self.say(format!("Unknown command: {command}. Type help for commands."))
    }

    fn say(&mut self, text: impl AsRef<str>) -> io::Result<()> {
        writeln!(self.out, "{}", text.as_ref())
    }
}

pub fn menu_command(cmd: Commands, config: &AppConfig, settings_path: &Path) {
    if let Commands::Menu = cmd {
        let settings = match YamlSettingsStore::open(settings_path) {
            Ok(store) => store,
            Err(e) => {
                eprintln!("Failed to open settings: {e:?}");
                return;
            }
        };

        let stdin = io::stdin();
        let stdout = io::stdout();
        let mut session = MenuSession::new(settings, config, stdout.lock());
        if let Err(e) = session.run(stdin.lock()) {
            eprintln!("Menu session failed: {e:?}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::settings_store::MemorySettingsStore;
    use std::io::Cursor;

    fn run_script(script: &str) -> (String, MenuSession<MemorySettingsStore, Vec<u8>>) {
        let mut session = MenuSession::new(
            MemorySettingsStore::new(),
            &AppConfig::default(),
            Vec::new(),
        );
        session.run(Cursor::new(script.to_string())).unwrap();
        let output = String::from_utf8(session.out.clone()).unwrap();
        (output, session)
    }

    #[test]
    fn starts_on_main_menu() {
        let (output, session) = run_script("");
        assert!(output.starts_with("== Main Menu =="));
        assert_eq!(session.navigator().scene(), Scene::MainMenu);
        assert!(session.audio().get().unwrap().is_playing());
    }

    #[test]
    fn tree_screen_calculates_estimate() {
        let script = "tree\n\
                      set height 30\n\
                      set diameter 12\n\
                      set access medium\n\
                      set climbed on\n\
                      set condition dead\n\
                      set debris on\n\
                      set travel 10\n\
                      calculate\n";
        let (output, session) = run_script(script);

        assert!(output.contains("== Tree Screen =="));
        assert!(output.contains("Estimated Cost: $561.90"));
        assert!(output.contains("Climbed (Included): 20% Increase"));
        assert_eq!(session.navigator().scene(), Scene::TreeScreen);
    }

    #[test]
    fn stump_screen_reports_validation_error() {
        let (output, _) = run_script("stump\nset diameter 0\ncalculate\n");
        assert!(output.contains("Please enter a valid diameter."));
        assert!(!output.contains("Estimated Cost"));
    }

    #[test]
    fn reset_then_calculate_is_rejected() {
        let (output, _) = run_script("tree\nset height 30\nset diameter 12\nreset\ncalculate\n");
        assert!(output.contains("Enter values and click Calculate."));
        assert!(output.contains("Please enter a valid tree height."));
    }

    #[test]
    fn forms_start_fresh_when_screen_is_reopened() {
        let (output, _) = run_script("stump\nset diameter 20\nback\nstump\ncalculate\n");
        assert!(output.contains("Please enter a valid diameter."));
    }

    #[test]
    fn sound_toggle_requires_options_panel() {
        let (output, session) = run_script("sound off\noptions\nsound off\nclose\n");

        assert!(output.contains("Open options first."));
        assert!(output.contains("Options (Sound: on)"));
        assert!(output.contains("Sound: off"));
        assert!(output.contains("Options closed."));
        assert!(session.settings().get_bool(SOUND_MUTED_KEY));
        assert_eq!(session.audio().get().unwrap().volume(), 0.0);
    }

    #[test]
    fn exit_stops_reading_input() {
        let (output, session) = run_script("exit\ntree\n");
        assert!(output.contains("Goodbye."));
        assert!(!output.contains("== Tree Screen =="));
        assert!(session.navigator().has_exited());
    }

    #[test]
    fn back_on_main_menu_reports_navigation_error() {
        let (output, session) = run_script("back\n");

        assert!(output.contains("going back is not available on the Main Menu"));
        assert!(!output.contains("Unknown command: back"));
        assert_eq!(session.navigator().scene(), Scene::MainMenu);
    }

    #[test]
    fn invalid_commands_are_reported() {
        let (output, _) = run_script("back\nfly\ntree\nset color red\nset height\n");
        assert!(output.contains("going back is not available on the Main Menu"));
        assert!(output.contains("Unknown command: fly. Type help for commands."));
        assert!(output.contains("unknown field: color"));
        assert!(output.contains("Usage: set <field> <value>"));
    }
}
