use thiserror::Error;

use crate::services::app_config::AppConfig;
use crate::services::settings_store::{SOUND_MUTED_KEY, SettingsError, SettingsStore};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AudioError {
    #[error("audio service is already initialized")]
    AlreadyInitialized,
}

/// A single music channel on whatever device the host provides.
pub trait AudioOutput {
    /// Returns `false` when the track cannot be found.
    fn load_track(&mut self, track: &str) -> bool;
    fn current_track(&self) -> Option<&str>;
    fn set_looping(&mut self, looping: bool);
    fn is_looping(&self) -> bool;
    fn play(&mut self);
    fn is_playing(&self) -> bool;
    fn set_volume(&mut self, volume: f32);
    fn volume(&self) -> f32;
}

/// Keeps channel state without a device behind it.
#[derive(Debug, Default)]
pub struct SilentOutput {
    track: Option<String>,
    looping: bool,
    playing: bool,
    volume: f32,
}

impl SilentOutput {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AudioOutput for SilentOutput {
    fn load_track(&mut self, track: &str) -> bool {
        self.track = Some(track.to_string());
        true
    }

    fn current_track(&self) -> Option<&str> {
        self.track.as_deref()
    }

    fn set_looping(&mut self, looping: bool) {
        self.looping = looping;
    }

    fn is_looping(&self) -> bool {
        self.looping
    }

    fn play(&mut self) {
        self.playing = true;
    }

    fn is_playing(&self) -> bool {
        self.playing
    }

    fn set_volume(&mut self, volume: f32) {
        self.volume = volume;
    }

    fn volume(&self) -> f32 {
        self.volume
    }
}

/// Background music for the whole application run.
///
/// Muting drops the volume to zero instead of stopping playback, so the
/// track keeps its position.
pub struct AudioService {
    output: Box<dyn AudioOutput>,
    default_volume: f32,
    muted: bool,
}

impl AudioService {
    pub fn start(
        mut output: Box<dyn AudioOutput>,
        settings: &dyn SettingsStore,
        config: &AppConfig,
    ) -> Self {
        output.set_looping(true);
        output.set_volume(config.default_volume);

        if output.current_track() != Some(config.background_track.as_str()) {
            if output.load_track(&config.background_track) {
                log::debug!("Loaded background track {}", config.background_track);
            } else {
                log::warn!("Background track not found: {}", config.background_track);
            }
        }
        if !output.is_playing() {
            output.play();
        }

        let muted = settings.get_bool(SOUND_MUTED_KEY);
        output.set_volume(if muted { 0.0 } else { config.default_volume });
        log::info!(
            "Audio started: track = {:?}, playing = {}, volume = {}, muted = {}",
            output.current_track(),
            output.is_playing(),
            output.volume(),
            muted
        );

        Self {
            output,
            default_volume: config.default_volume,
            muted,
        }
    }

    /// Applies the mute state and persists it for the next run.
    pub fn set_muted(
        &mut self,
        muted: bool,
        settings: &mut dyn SettingsStore,
    ) -> Result<(), SettingsError> {
        self.output
            .set_volume(if muted { 0.0 } else { self.default_volume });
        self.muted = muted;
        settings.set_bool(SOUND_MUTED_KEY, muted)?;
        log::info!(
            "Sound muted = {}, volume = {}, playing = {}",
            muted,
            self.output.volume(),
            self.output.is_playing()
        );
        Ok(())
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    pub fn volume(&self) -> f32 {
        self.output.volume()
    }

    pub fn is_playing(&self) -> bool {
        self.output.is_playing()
    }

    pub fn is_looping(&self) -> bool {
        self.output.is_looping()
    }

    pub fn current_track(&self) -> Option<&str> {
        self.output.current_track()
    }
}

/// Holds at most one [`AudioService`]; a second initialization is refused.
#[derive(Default)]
pub struct AudioSlot {
    service: Option<AudioService>,
}

impl AudioSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn initialize(
        &mut self,
        output: Box<dyn AudioOutput>,
        settings: &dyn SettingsStore,
        config: &AppConfig,
    ) -> Result<&mut AudioService, AudioError> {
        if self.service.is_some() {
            log::warn!("Ignoring duplicate audio service initialization");
            return Err(AudioError::AlreadyInitialized);
        }
        Ok(self
            .service
            .insert(AudioService::start(output, settings, config)))
    }

    pub fn get(&self) -> Option<&AudioService> {
        self.service.as_ref()
    }

    pub fn get_mut(&mut self) -> Option<&mut AudioService> {
        self.service.as_mut()
    }
}

/// Handles the sound on/off switch. Without a running audio service the
/// preference is still saved so the next start picks it up.
pub fn apply_sound_toggle(
    slot: &mut AudioSlot,
    settings: &mut dyn SettingsStore,
    sound_on: bool,
) -> Result<(), SettingsError> {
    match slot.get_mut() {
        Some(service) => service.set_muted(!sound_on, settings),
        None => {
            settings.set_bool(SOUND_MUTED_KEY, !sound_on)?;
            log::warn!("Audio service not running, saved {SOUND_MUTED_KEY} = {}", !sound_on);
            Ok(())
        }
    }
}
