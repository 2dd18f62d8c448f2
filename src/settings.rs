// SPDX-License-Identifier: MPL-2.0

//! Settings store used by the resolution dialog
//!
//! The dialog never reaches for a global configuration; it is handed a
//! [`SettingsStore`] at construction. [`ConfigStore`] is the production
//! implementation, persisting every change through cosmic-config.

use crate::config::{AudioSource, CameraFacing, Config};
use cosmic::cosmic_config::{self, CosmicConfigEntry};
use tracing::{debug, error, warn};

/// Get/set access to the persisted capture settings
pub trait SettingsStore {
    /// Stored photo resolution index for the given camera
    fn photo_res_index(&self, facing: CameraFacing) -> i32;
    fn set_photo_res_index(&mut self, facing: CameraFacing, index: i32);

    /// Stored video resolution index for the given camera
    fn video_res_index(&self, facing: CameraFacing) -> i32;
    fn set_video_res_index(&mut self, facing: CameraFacing, index: i32);

    /// Raw stored audio source, possibly a value no [`AudioSource`] maps to
    fn audio_source_raw(&self) -> i32;
    fn set_audio_source(&mut self, source: AudioSource);

    fn save_photos_folder(&self) -> String;
    fn set_save_photos_folder(&mut self, folder: String);
}

/// Lets a caller lend its store to a dialog and keep ownership
impl<S: SettingsStore + ?Sized> SettingsStore for &mut S {
    fn photo_res_index(&self, facing: CameraFacing) -> i32 {
        (**self).photo_res_index(facing)
    }

    fn set_photo_res_index(&mut self, facing: CameraFacing, index: i32) {
        (**self).set_photo_res_index(facing, index)
    }

    fn video_res_index(&self, facing: CameraFacing) -> i32 {
        (**self).video_res_index(facing)
    }

    fn set_video_res_index(&mut self, facing: CameraFacing, index: i32) {
        (**self).set_video_res_index(facing, index)
    }

    fn audio_source_raw(&self) -> i32 {
        (**self).audio_source_raw()
    }

    fn set_audio_source(&mut self, source: AudioSource) {
        (**self).set_audio_source(source)
    }

    fn save_photos_folder(&self) -> String {
        (**self).save_photos_folder()
    }

    fn set_save_photos_folder(&mut self, folder: String) {
        (**self).set_save_photos_folder(folder)
    }
}

/// Configuration persisted through cosmic-config
///
/// Reads come from the in-memory [`Config`]; every write updates it and then
/// writes the entry back. Write failures are logged and otherwise ignored so
/// the dialog never observes them.
pub struct ConfigStore {
    config: Config,
    handler: Option<cosmic_config::Config>,
}

impl ConfigStore {
    /// Load the configuration for `app_id`, falling back to defaults
    pub fn load(app_id: &str) -> Self {
        match cosmic_config::Config::new(app_id, Config::VERSION) {
            Ok(handler) => {
                let config = match Config::get_entry(&handler) {
                    Ok(config) => config,
                    Err((errors, config)) => {
                        error!(?errors, "Errors loading config");
                        config
                    }
                };
                Self {
                    config,
                    handler: Some(handler),
                }
            }
            Err(err) => {
                error!(%err, "Failed to create config handler");
                Self::in_memory(Config::default())
            }
        }
    }

    /// Store without a backing handler; changes live only in memory
    pub fn in_memory(config: Config) -> Self {
        Self {
            config,
            handler: None,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn update(&mut self, apply: impl FnOnce(&mut Config)) {
        apply(&mut self.config);

        let Some(handler) = self.handler.as_ref() else {
            debug!("No config handler, keeping settings in memory");
            return;
        };

        if let Err(err) = self.config.write_entry(handler) {
            error!(?err, "Failed to save settings");
        }
    }
}

impl SettingsStore for ConfigStore {
    fn photo_res_index(&self, facing: CameraFacing) -> i32 {
        match facing {
            CameraFacing::Front => self.config.front_photo_res_index,
            CameraFacing::Back => self.config.back_photo_res_index,
        }
    }

    fn set_photo_res_index(&mut self, facing: CameraFacing, index: i32) {
        self.update(|config| match facing {
            CameraFacing::Front => config.front_photo_res_index = index,
            CameraFacing::Back => config.back_photo_res_index = index,
        });
    }

    fn video_res_index(&self, facing: CameraFacing) -> i32 {
        match facing {
            CameraFacing::Front => self.config.front_video_res_index,
            CameraFacing::Back => self.config.back_video_res_index,
        }
    }

    fn set_video_res_index(&mut self, facing: CameraFacing, index: i32) {
        self.update(|config| match facing {
            CameraFacing::Front => config.front_video_res_index = index,
            CameraFacing::Back => config.back_video_res_index = index,
        });
    }

    fn audio_source_raw(&self) -> i32 {
        self.config.audio_source
    }

    fn set_audio_source(&mut self, source: AudioSource) {
        self.update(|config| config.audio_source = source.raw());
    }

    fn save_photos_folder(&self) -> String {
        self.config.save_photos_folder.clone()
    }

    fn set_save_photos_folder(&mut self, folder: String) {
        if folder.trim().is_empty() {
            warn!("Ignoring empty save folder");
            return;
        }
        self.update(|config| config.save_photos_folder = folder);
    }
}
