// SPDX-License-Identifier: MPL-2.0

//! COSMIC application hosting the resolution dialog
//!
//! - `resolution_dialog`: dialog state, message handling and view
//! - `screen`: window that measures the display through the compositor
//! - `utils`: parsing of resolution strings from the command line

pub mod resolution_dialog;
pub mod screen;
pub mod utils;

use crate::backends::audio::PipeWireAudioProbe;
use crate::config::CameraFacing;
use crate::resolution::Resolution;
use crate::settings::ConfigStore;
use cosmic::{Element, Task};
pub use resolution_dialog::{DialogMessage, PickerKind, ResolutionDialog};
use tracing::info;

/// Data handed to the application at startup
#[derive(Debug, Clone, Default)]
pub struct DialogFlags {
    pub facing: CameraFacing,
    pub photo_resolutions: Vec<Resolution>,
    pub video_resolutions: Vec<Resolution>,
    /// Show the video resolution picker right away
    pub open_video_picker: bool,
}

/// Application model: one dialog backed by the persisted configuration
pub struct DialogApp {
    core: cosmic::Core,
    dialog: ResolutionDialog<ConfigStore>,
}

impl DialogApp {
    fn handle(&mut self, message: DialogMessage) -> Task<cosmic::Action<DialogMessage>> {
        self.dialog.update(message);

        if self.dialog.is_dismissed() {
            return cosmic::iced::exit();
        }
        Task::none()
    }
}

impl cosmic::Application for DialogApp {
    /// The async executor that will be used to run your application's commands.
    type Executor = cosmic::executor::Default;

    type Flags = DialogFlags;

    type Message = DialogMessage;

    /// Unique identifier in RDNN (reverse domain name notation) format.
    const APP_ID: &'static str = "io.github.freddyfunk.cosmic-camera.Settings";

    fn core(&self) -> &cosmic::Core {
        &self.core
    }

    fn core_mut(&mut self) -> &mut cosmic::Core {
        &mut self.core
    }

    fn init(core: cosmic::Core, flags: Self::Flags) -> (Self, Task<cosmic::Action<Self::Message>>) {
        let settings = ConfigStore::load(Self::APP_ID);

        let dialog = ResolutionDialog::new(
            settings,
            flags.facing,
            &flags.photo_resolutions,
            &flags.video_resolutions,
            flags.open_video_picker,
            &PipeWireAudioProbe,
            || info!("Resolution dialog closed"),
        );

        (Self { core, dialog }, Task::none())
    }

    /// Escape closes the inner picker first, then the dialog
    fn on_escape(&mut self) -> Task<cosmic::Action<Self::Message>> {
        let message = if self.dialog.active_picker().is_some() {
            DialogMessage::ClosePicker
        } else {
            DialogMessage::Dismiss
        };
        self.handle(message)
    }

    fn view(&self) -> Element<'_, Self::Message> {
        self.dialog.view()
    }

    fn update(&mut self, message: Self::Message) -> Task<cosmic::Action<Self::Message>> {
        self.handle(message)
    }
}
