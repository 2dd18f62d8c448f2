// SPDX-License-Identifier: GPL-3.0-only

//! Application-wide constants

/// Output file naming
pub mod file_names {
    /// Folder created under the user's pictures directory
    pub const DEFAULT_SAVE_FOLDER: &str = "Camera";

    /// chrono format for the timestamp part of file names (yyyyMMdd_HHmmss)
    pub const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

    pub const PHOTO_PREFIX: &str = "IMG";
    pub const PHOTO_EXTENSION: &str = "jpg";

    pub const VIDEO_PREFIX: &str = "VID";
    pub const VIDEO_EXTENSION: &str = "mp4";
}

/// UI Constants
pub mod ui {
    /// Width of the settings dialog card
    pub const DIALOG_WIDTH: f32 = 420.0;

    /// Height cap for the inner picker list before it scrolls
    pub const PICKER_MAX_HEIGHT: f32 = 320.0;

    /// Section title text size
    pub const SECTION_TITLE_TEXT_SIZE: u16 = 16;

    /// Selected value text size under each section title
    pub const VALUE_TEXT_SIZE: u16 = 13;

    /// Window size of the display measurement app before it is maximized
    pub const MEASURE_WINDOW_WIDTH: f32 = 320.0;
    pub const MEASURE_WINDOW_HEIGHT: f32 = 160.0;

    /// Backdrop transparency behind the dialog (0.0 = transparent, 1.0 = opaque)
    pub const BACKDROP_ALPHA: f32 = 0.4;
}

/// PipeWire properties consulted by the audio capability probe
pub mod pipewire {
    /// Media class of capture nodes
    pub const AUDIO_SOURCE_CLASS: &str = "Audio/Source";

    /// API name of hardware capture devices
    pub const RAW_DEVICE_API: &str = "alsa";

    /// Node name prefix of hardware capture nodes (no filter chain in between)
    pub const RAW_NODE_PREFIX: &str = "alsa_input.";
}

/// Application information utilities
pub mod app_info {
    use std::path::Path;

    /// Get the application version from build-time environment
    pub fn version() -> &'static str {
        env!("GIT_VERSION")
    }

    /// Check if the application is running inside a Flatpak sandbox
    pub fn is_flatpak() -> bool {
        Path::new("/.flatpak-info").exists()
    }
}
