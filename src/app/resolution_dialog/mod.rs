// SPDX-License-Identifier: MPL-2.0

//! Resolution and audio source dialog
//!
//! Three independent single-choice pickers (photo resolution, video
//! resolution, audio source) inside one modal dialog. Each selection is
//! written to the [`SettingsStore`] immediately; the dialog itself only
//! closes through [`ResolutionDialog::confirm`] or [`ResolutionDialog::dismiss`].

mod view;

use crate::backends::audio::AudioCapabilities;
use crate::config::{AudioSource, CameraFacing};
use crate::resolution::{
    AspectRatioLabel, Resolution, SelectableItem, SimplifiedRatio, format_resolutions,
    sorted_by_pixels_desc,
};
use crate::settings::SettingsStore;
use tracing::{debug, info, warn};

/// The three pickers hosted by the dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PickerKind {
    Photo,
    Video,
    Audio,
}

impl PickerKind {
    pub const ALL: [PickerKind; 3] = [PickerKind::Photo, PickerKind::Video, PickerKind::Audio];

    /// Section title shown above the current value
    pub fn title(&self) -> &'static str {
        match self {
            Self::Photo => "Photo resolution",
            Self::Video => "Video resolution",
            Self::Audio => "Audio source",
        }
    }
}

/// User interactions with the dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogMessage {
    /// Open the inner picker for a section
    OpenPicker(PickerKind),
    /// Close the inner picker without choosing
    ClosePicker,
    /// Choose an item in a picker
    Select(PickerKind, usize),
    /// OK button
    Confirm,
    /// Tap outside, escape or window close
    Dismiss,
    /// Click on the dialog card itself
    Noop,
}

/// Items and current selection of one picker
#[derive(Debug, Clone, Default)]
struct Picker {
    items: Vec<SelectableItem>,
    selected: usize,
}

impl Picker {
    fn label(&self) -> Option<&str> {
        self.items.get(self.selected).map(|item| item.label.as_str())
    }
}

type DismissCallback = Box<dyn FnOnce()>;

/// State holder for one resolution dialog lifecycle
///
/// Built when the dialog opens and dropped when it closes. The completion
/// callback runs exactly once: on confirm, on dismiss, or on drop if neither
/// happened.
pub struct ResolutionDialog<S: SettingsStore> {
    settings: S,
    facing: CameraFacing,
    photo_resolutions: Vec<Resolution>,
    video_resolutions: Vec<Resolution>,
    audio_sources: Vec<AudioSource>,
    photo: Picker,
    video: Picker,
    audio: Picker,
    active_picker: Option<PickerKind>,
    on_dismiss: Option<DismissCallback>,
}

impl<S: SettingsStore> ResolutionDialog<S> {
    /// Open the dialog with the default aspect ratio labels
    pub fn new(
        settings: S,
        facing: CameraFacing,
        photo_resolutions: &[Resolution],
        video_resolutions: &[Resolution],
        open_video_picker: bool,
        audio: &dyn AudioCapabilities,
        on_dismiss: impl FnOnce() + 'static,
    ) -> Self {
        Self::with_aspect_ratio(
            settings,
            facing,
            photo_resolutions,
            video_resolutions,
            open_video_picker,
            audio,
            &SimplifiedRatio,
            on_dismiss,
        )
    }

    /// Open the dialog using a custom aspect ratio helper for the labels
    #[allow(clippy::too_many_arguments)]
    pub fn with_aspect_ratio(
        settings: S,
        facing: CameraFacing,
        photo_resolutions: &[Resolution],
        video_resolutions: &[Resolution],
        open_video_picker: bool,
        audio: &dyn AudioCapabilities,
        ratio: &dyn AspectRatioLabel,
        on_dismiss: impl FnOnce() + 'static,
    ) -> Self {
        let photo_items = format_resolutions(photo_resolutions, ratio);
        let photo = Picker {
            selected: stored_index(settings.photo_res_index(facing), photo_items.len()),
            items: photo_items,
        };

        let video_items = format_resolutions(video_resolutions, ratio);
        let video = Picker {
            selected: stored_index(settings.video_res_index(facing), video_items.len()),
            items: video_items,
        };

        let unprocessed_supported = audio.supports_unprocessed_audio();
        let audio_sources: Vec<AudioSource> = AudioSource::ALL
            .into_iter()
            .filter(|source| *source != AudioSource::Unprocessed || unprocessed_supported)
            .collect();
        let stored_source =
            effective_audio_source(settings.audio_source_raw(), unprocessed_supported);
        let audio = Picker {
            items: audio_sources
                .iter()
                .enumerate()
                .map(|(index, source)| SelectableItem::new(index, source.display_name()))
                .collect(),
            selected: audio_sources
                .iter()
                .position(|source| *source == stored_source)
                .unwrap_or(0),
        };

        info!(
            facing = ?facing,
            photo_options = photo.items.len(),
            video_options = video.items.len(),
            unprocessed_supported,
            "Opening resolution dialog"
        );

        Self {
            settings,
            facing,
            photo_resolutions: sorted_by_pixels_desc(photo_resolutions),
            video_resolutions: sorted_by_pixels_desc(video_resolutions),
            audio_sources,
            photo,
            video,
            audio,
            active_picker: open_video_picker.then_some(PickerKind::Video),
            on_dismiss: Some(Box::new(on_dismiss)),
        }
    }

    /// Route a UI message to the matching operation
    pub fn update(&mut self, message: DialogMessage) {
        match message {
            DialogMessage::OpenPicker(kind) => self.open_picker(kind),
            DialogMessage::ClosePicker => self.close_picker(),
            DialogMessage::Select(kind, index) => {
                self.select(kind, index);
            }
            DialogMessage::Confirm => self.confirm(),
            DialogMessage::Dismiss => self.dismiss(),
            DialogMessage::Noop => {}
        }
    }

    pub fn facing(&self) -> CameraFacing {
        self.facing
    }

    pub fn settings(&self) -> &S {
        &self.settings
    }

    /// Picker currently shown on top of the dialog, if any
    pub fn active_picker(&self) -> Option<PickerKind> {
        self.active_picker
    }

    pub fn open_picker(&mut self, kind: PickerKind) {
        if self.is_dismissed() {
            return;
        }
        debug!(picker = ?kind, "Opening picker");
        self.active_picker = Some(kind);
    }

    pub fn close_picker(&mut self) {
        self.active_picker = None;
    }

    /// Items offered by a picker
    pub fn items(&self, kind: PickerKind) -> &[SelectableItem] {
        &self.picker(kind).items
    }

    /// Index of the selected item in a picker
    pub fn selected_index(&self, kind: PickerKind) -> usize {
        self.picker(kind).selected
    }

    /// Visible text for a picker's current value, `None` when it has no items
    pub fn label(&self, kind: PickerKind) -> Option<&str> {
        self.picker(kind).label()
    }

    pub fn selected_photo_resolution(&self) -> Option<Resolution> {
        self.photo_resolutions.get(self.photo.selected).copied()
    }

    pub fn selected_video_resolution(&self) -> Option<Resolution> {
        self.video_resolutions.get(self.video.selected).copied()
    }

    pub fn selected_audio_source(&self) -> AudioSource {
        self.audio_sources
            .get(self.audio.selected)
            .copied()
            .unwrap_or_default()
    }

    /// Apply a choice from the inner picker
    ///
    /// Stores the value, refreshes the label and closes the inner picker.
    /// Returns false (and changes nothing) when `index` is not an offered item
    /// or the dialog is already dismissed.
    pub fn select(&mut self, kind: PickerKind, index: usize) -> bool {
        if self.is_dismissed() {
            debug!(picker = ?kind, index, "Ignoring selection on a dismissed dialog");
            return false;
        }
        if index >= self.picker(kind).items.len() {
            warn!(picker = ?kind, index, "Ignoring selection outside the offered items");
            return false;
        }

        match kind {
            PickerKind::Photo | PickerKind::Video => {
                let Ok(stored) = i32::try_from(index) else {
                    warn!(picker = ?kind, index, "Selection index does not fit the settings store");
                    return false;
                };
                if kind == PickerKind::Photo {
                    self.settings.set_photo_res_index(self.facing, stored);
                } else {
                    self.settings.set_video_res_index(self.facing, stored);
                }
            }
            PickerKind::Audio => {
                let source = self.audio_sources[index];
                self.settings.set_audio_source(source);
            }
        }

        self.picker_mut(kind).selected = index;
        info!(
            picker = ?kind,
            index,
            label = self.label(kind).unwrap_or_default(),
            "Selection saved"
        );

        self.close_picker();
        true
    }

    /// OK button; closes the dialog without further validation
    pub fn confirm(&mut self) {
        self.dismiss();
    }

    /// Close the dialog through any path, running the callback once
    pub fn dismiss(&mut self) {
        self.active_picker = None;
        if let Some(on_dismiss) = self.on_dismiss.take() {
            debug!("Resolution dialog dismissed");
            on_dismiss();
        }
    }

    pub fn is_dismissed(&self) -> bool {
        self.on_dismiss.is_none()
    }

    fn picker(&self, kind: PickerKind) -> &Picker {
        match kind {
            PickerKind::Photo => &self.photo,
            PickerKind::Video => &self.video,
            PickerKind::Audio => &self.audio,
        }
    }

    fn picker_mut(&mut self, kind: PickerKind) -> &mut Picker {
        match kind {
            PickerKind::Photo => &mut self.photo,
            PickerKind::Video => &mut self.video,
            PickerKind::Audio => &mut self.audio,
        }
    }
}

impl<S: SettingsStore> Drop for ResolutionDialog<S> {
    fn drop(&mut self) {
        self.dismiss();
    }
}

/// Picker index for a stored resolution index
///
/// Unset, negative and out-of-range values all fall back to the first
/// (largest) resolution. The stored value is left as is.
fn stored_index(stored: i32, item_count: usize) -> usize {
    match usize::try_from(stored) {
        Ok(index) if index < item_count => index,
        _ => {
            if item_count > 0 && stored != 0 {
                debug!(
                    stored,
                    item_count, "Stored resolution index out of range, showing first"
                );
            }
            0
        }
    }
}

/// Audio source to display for a stored raw value
///
/// Unknown values show as Default, and so does Unprocessed when the platform
/// no longer offers it.
fn effective_audio_source(raw: i32, unprocessed_supported: bool) -> AudioSource {
    match AudioSource::from_raw(raw) {
        Some(AudioSource::Unprocessed) if !unprocessed_supported => {
            debug!("Unprocessed audio no longer supported, showing default");
            AudioSource::Default
        }
        Some(source) => source,
        None => {
            debug!(raw, "Unknown stored audio source, showing default");
            AudioSource::Default
        }
    }
}
