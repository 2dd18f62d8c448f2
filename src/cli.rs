// SPDX-License-Identifier: GPL-3.0-only

//! Command-line helpers that run without the GUI

use camera_settings::app::screen::{ScreenApp, ScreenFlags};
use camera_settings::backends::audio::{AudioCapabilities, PipeWireAudioProbe};
use camera_settings::display::{DisplayGeometry, DisplayMetrics, ScreenSize};
use camera_settings::errors::{AppError, AppResult};
use camera_settings::resolution::{Resolution, SimplifiedRatio, format_resolutions};
use camera_settings::settings::{ConfigStore, SettingsStore};
use camera_settings::storage::{self, MediaKind};
use std::path::PathBuf;
use std::sync::Arc;

/// Print picker labels for the given resolutions, largest first
pub fn list_resolutions(resolutions: &[Resolution]) -> AppResult<()> {
    if resolutions.is_empty() {
        return Err("No resolutions given".into());
    }

    for item in format_resolutions(resolutions, &SimplifiedRatio) {
        println!("[{}] {}", item.index, item.label);
    }
    Ok(())
}

/// Print the path the next photo or video would be written to
///
/// Uses `dir` when given, otherwise the configured save folder.
pub fn print_output_path(app_id: &str, video: bool, dir: Option<PathBuf>) -> AppResult<()> {
    let base_dir = match dir {
        Some(dir) => dir,
        None => {
            let folder = ConfigStore::load(app_id).save_photos_folder();
            if folder.is_empty() {
                return Err(AppError::Config("save folder is not set".to_string()));
            }
            PathBuf::from(folder)
        }
    };

    let kind = if video {
        MediaKind::Video
    } else {
        MediaKind::Photo
    };

    let path = storage::output_media_path(kind, &base_dir).ok_or_else(|| {
        AppError::Storage(format!("cannot create {}", base_dir.display()))
    })?;

    println!("{}", path.display());
    Ok(())
}

/// Report whether unprocessed audio capture is available
pub fn probe_audio() -> AppResult<()> {
    let supported = PipeWireAudioProbe.supports_unprocessed_audio();
    println!(
        "Unprocessed audio: {}",
        if supported { "supported" } else { "not supported" }
    );
    Ok(())
}

/// Print usable/real display size and the derived navigation bar height
///
/// Sizes given on the command line are used as is. When either is missing
/// the display is measured through the compositor first.
pub fn print_screen(usable: Option<Resolution>, real: Option<Resolution>) -> AppResult<()> {
    let flags = ScreenFlags {
        usable: usable.map(ScreenSize::from),
        real: real.map(ScreenSize::from),
        ..Default::default()
    };

    let geometry = match (flags.usable, flags.real) {
        (Some(usable), Some(real)) => DisplayGeometry::new(usable, real),
        _ => measure_screen(flags)?,
    };

    let usable = geometry.usable_size();
    let real = geometry.real_size();
    println!("Usable size:       {}x{}", usable.width, usable.height);
    println!("Real size:         {}x{}", real.width, real.height);
    println!("Navigation bar:    {}px", geometry.nav_bar_height());
    Ok(())
}

fn measure_screen(flags: ScreenFlags) -> AppResult<DisplayGeometry> {
    let result = Arc::clone(&flags.result);
    let settings = cosmic::app::Settings::default().size(ScreenApp::initial_size());

    cosmic::app::run::<ScreenApp>(settings, flags)?;

    result
        .get()
        .copied()
        .ok_or_else(|| AppError::Other("display size could not be measured".to_string()))
}
