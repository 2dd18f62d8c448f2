// SPDX-License-Identifier: GPL-3.0-only

use cosmic::cosmic_config::{self, CosmicConfigEntry, cosmic_config_derive::CosmicConfigEntry};
use serde::{Deserialize, Serialize};

/// Audio source used while recording video
///
/// Persisted as the raw recorder constant so values written by other
/// versions of the app survive a round trip even when unrecognized.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub enum AudioSource {
    /// Platform default source (usually the processed microphone)
    #[default]
    Default,
    /// Microphone with the platform's voice processing
    Mic,
    /// Raw microphone capture without noise suppression or gain control
    Unprocessed,
}

impl AudioSource {
    /// Get all sources in picker order
    pub const ALL: [AudioSource; 3] = [
        AudioSource::Default,
        AudioSource::Mic,
        AudioSource::Unprocessed,
    ];

    /// Raw value stored in the configuration
    pub fn raw(&self) -> i32 {
        match self {
            Self::Default => 0,
            Self::Mic => 1,
            Self::Unprocessed => 9,
        }
    }

    /// Decode a stored value, `None` when it matches no known source
    pub fn from_raw(raw: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|source| source.raw() == raw)
    }

    /// Position in the audio source picker
    pub fn picker_index(&self) -> usize {
        match self {
            Self::Default => 0,
            Self::Mic => 1,
            Self::Unprocessed => 2,
        }
    }

    pub fn from_picker_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Get display name for the source
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Default => "Default",
            Self::Mic => "Microphone",
            Self::Unprocessed => "Unprocessed",
        }
    }
}

/// Which camera the dialog edits settings for
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub enum CameraFacing {
    Front,
    #[default]
    Back,
}

impl CameraFacing {
    pub fn is_front(&self) -> bool {
        matches!(self, Self::Front)
    }

    /// Dialog title for this camera
    pub fn title(&self) -> &'static str {
        match self {
            Self::Front => "Front camera",
            Self::Back => "Back camera",
        }
    }
}

#[derive(Debug, Clone, CosmicConfigEntry, Eq, PartialEq, Serialize, Deserialize)]
#[version = 1]
pub struct Config {
    /// Selected photo resolution for the front camera (index into the sorted list)
    pub front_photo_res_index: i32,
    /// Selected photo resolution for the back camera
    pub back_photo_res_index: i32,
    /// Selected video resolution for the front camera
    pub front_video_res_index: i32,
    /// Selected video resolution for the back camera
    pub back_video_res_index: i32,
    /// Raw audio source value (see [`AudioSource::raw`])
    pub audio_source: i32,
    /// Folder new photos and videos are written to
    pub save_photos_folder: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            front_photo_res_index: 0,
            back_photo_res_index: 0,
            front_video_res_index: 0,
            back_video_res_index: 0,
            audio_source: AudioSource::Default.raw(),
            save_photos_folder: crate::storage::default_save_folder()
                .to_string_lossy()
                .into_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_audio_source_raw_round_trip() {
        for source in AudioSource::ALL {
            assert_eq!(AudioSource::from_raw(source.raw()), Some(source));
        }
        assert_eq!(AudioSource::from_raw(5), None);
        assert_eq!(AudioSource::from_raw(-1), None);
    }

    #[test]
    fn test_audio_source_picker_index() {
        for source in AudioSource::ALL {
            assert_eq!(
                AudioSource::from_picker_index(source.picker_index()),
                Some(source)
            );
        }
        assert_eq!(AudioSource::from_picker_index(3), None);
    }
}
