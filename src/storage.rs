// SPDX-License-Identifier: MPL-2.0

//! Output paths for new photos and videos

use crate::constants::file_names;
use chrono::NaiveDateTime;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Kind of media a new file will hold
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Photo,
    Video,
}

impl MediaKind {
    fn prefix(&self) -> &'static str {
        match self {
            Self::Photo => file_names::PHOTO_PREFIX,
            Self::Video => file_names::VIDEO_PREFIX,
        }
    }

    fn extension(&self) -> &'static str {
        match self {
            Self::Photo => file_names::PHOTO_EXTENSION,
            Self::Video => file_names::VIDEO_EXTENSION,
        }
    }
}

/// Default folder for photos and videos (~/Pictures/Camera)
pub fn default_save_folder() -> PathBuf {
    dirs::picture_dir()
        .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
        .join(file_names::DEFAULT_SAVE_FOLDER)
}

/// File name for media captured at `timestamp`, e.g. `IMG_20240102_030405.jpg`
pub fn media_file_name(kind: MediaKind, timestamp: NaiveDateTime) -> String {
    format!(
        "{}_{}.{}",
        kind.prefix(),
        timestamp.format(file_names::TIMESTAMP_FORMAT),
        kind.extension()
    )
}

/// Path for a new photo or video in `base_dir`, stamped with the local time
///
/// Creates `base_dir` (recursively) when missing. Returns `None` if the
/// directory cannot be created; callers must not write anywhere in that case.
pub fn output_media_path(kind: MediaKind, base_dir: &Path) -> Option<PathBuf> {
    output_media_path_at(kind, base_dir, chrono::Local::now().naive_local())
}

/// Same as [`output_media_path`] with an explicit capture time
pub fn output_media_path_at(
    kind: MediaKind,
    base_dir: &Path,
    timestamp: NaiveDateTime,
) -> Option<PathBuf> {
    if !base_dir.is_dir() {
        if let Err(e) = std::fs::create_dir_all(base_dir) {
            warn!(path = %base_dir.display(), error = %e, "Failed to create media directory");
            return None;
        }
        debug!(path = %base_dir.display(), "Created media directory");
    }

    Some(base_dir.join(media_file_name(kind, timestamp)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn timestamp() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 2)
            .unwrap()
            .and_hms_opt(3, 4, 5)
            .unwrap()
    }

    #[test]
    fn test_media_file_names() {
        assert_eq!(
            media_file_name(MediaKind::Photo, timestamp()),
            "IMG_20240102_030405.jpg"
        );
        assert_eq!(
            media_file_name(MediaKind::Video, timestamp()),
            "VID_20240102_030405.mp4"
        );
    }

    #[test]
    fn test_default_save_folder_name() {
        assert!(default_save_folder().ends_with(file_names::DEFAULT_SAVE_FOLDER));
    }
}
