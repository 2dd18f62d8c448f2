// SPDX-License-Identifier: MPL-2.0

//! Display measurement window
//!
//! Opens a small window, asks the compositor to maximize it and reads the
//! monitor size. The maximized window size is the usable area.

use crate::constants::ui;
use crate::display::{DisplayGeometry, DisplayMetrics, PlatformGeometry, ScreenSize};
use cosmic::iced::{Event, Length, Size, Subscription, event, window};
use cosmic::{Element, Task, widget};
use std::sync::{Arc, OnceLock};
use tracing::{debug, info, warn};

/// Messages of the measurement window
#[derive(Debug, Clone)]
pub enum ScreenMessage {
    WindowFound(Option<window::Id>),
    MonitorSize(Option<Size>),
    Resized(Size),
}

/// Startup data for [`ScreenApp`]
#[derive(Debug, Clone, Default)]
pub struct ScreenFlags {
    /// Replaces the measured usable size
    pub usable: Option<ScreenSize>,
    /// Replaces the measured real size
    pub real: Option<ScreenSize>,
    /// Filled once the geometry is known; read after the app exits
    pub result: Arc<OnceLock<DisplayGeometry>>,
}

impl ScreenFlags {
    /// Measured metrics with the overrides applied
    pub fn resolve(&self, metrics: &dyn DisplayMetrics) -> DisplayGeometry {
        let mut geometry = DisplayGeometry::snapshot(metrics);
        if let Some(usable) = self.usable {
            geometry.usable = usable;
        }
        if let Some(real) = self.real {
            geometry.real = real;
        }
        geometry
    }
}

/// Collects compositor reports until both sizes are known
#[derive(Debug, Clone)]
pub struct ScreenMeasurement {
    initial: ScreenSize,
    monitor: Option<Option<Size>>,
    work_area: Option<Size>,
}

impl ScreenMeasurement {
    /// `initial` is the size the window opens with, before maximizing
    pub fn new(initial: Size) -> Self {
        Self {
            initial: ScreenSize::from_logical(initial),
            monitor: None,
            work_area: None,
        }
    }

    pub fn monitor_reported(&mut self, size: Option<Size>) {
        if size.is_none() {
            warn!("Compositor did not report a monitor size, using the usable area");
        }
        self.monitor = Some(size);
    }

    /// Record a resize; returns false for the initial (not yet maximized) size
    pub fn window_resized(&mut self, size: Size) -> bool {
        if ScreenSize::from_logical(size) == self.initial {
            debug!(?size, "Ignoring resize to the initial window size");
            return false;
        }
        self.work_area = Some(size);
        true
    }

    /// Geometry once the monitor and the maximized window have both reported
    pub fn result(&self) -> Option<PlatformGeometry> {
        let work_area = self.work_area?;
        let monitor = self.monitor?.unwrap_or(work_area);
        Some(PlatformGeometry::new(monitor, work_area))
    }
}

/// Application that measures the display and exits
pub struct ScreenApp {
    core: cosmic::Core,
    measurement: ScreenMeasurement,
    flags: ScreenFlags,
}

impl ScreenApp {
    /// Window size passed to the run settings
    pub fn initial_size() -> Size {
        Size::new(ui::MEASURE_WINDOW_WIDTH, ui::MEASURE_WINDOW_HEIGHT)
    }

    fn finish(&mut self) -> Task<cosmic::Action<ScreenMessage>> {
        let Some(platform) = self.measurement.result() else {
            return Task::none();
        };

        let geometry = self.flags.resolve(&platform);
        info!(
            usable = ?geometry.usable,
            real = ?geometry.real,
            nav_bar_height = geometry.nav_bar_height(),
            "Display measured"
        );
        if self.flags.result.set(geometry).is_err() {
            debug!("Display geometry already recorded");
        }
        cosmic::iced::exit()
    }
}

impl cosmic::Application for ScreenApp {
    type Executor = cosmic::executor::Default;

    type Flags = ScreenFlags;

    type Message = ScreenMessage;

    const APP_ID: &'static str = "io.github.freddyfunk.cosmic-camera.Screen";

    fn core(&self) -> &cosmic::Core {
        &self.core
    }

    fn core_mut(&mut self) -> &mut cosmic::Core {
        &mut self.core
    }

    fn init(core: cosmic::Core, flags: Self::Flags) -> (Self, Task<cosmic::Action<Self::Message>>) {
        let app = Self {
            core,
            measurement: ScreenMeasurement::new(Self::initial_size()),
            flags,
        };

        let task = window::get_oldest()
            .map(|id| cosmic::Action::App(ScreenMessage::WindowFound(id)));

        (app, task)
    }

    fn view(&self) -> Element<'_, Self::Message> {
        widget::container(widget::text("Measuring display…"))
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into()
    }

    fn update(&mut self, message: Self::Message) -> Task<cosmic::Action<Self::Message>> {
        match message {
            ScreenMessage::WindowFound(Some(id)) => Task::batch([
                window::maximize(id, true),
                window::monitor_size(id)
                    .map(|size| cosmic::Action::App(ScreenMessage::MonitorSize(size))),
            ]),
            ScreenMessage::WindowFound(None) => {
                warn!("No window to measure the display with");
                cosmic::iced::exit()
            }
            ScreenMessage::MonitorSize(size) => {
                self.measurement.monitor_reported(size);
                self.finish()
            }
            ScreenMessage::Resized(size) => {
                if self.measurement.window_resized(size) {
                    self.finish()
                } else {
                    Task::none()
                }
            }
        }
    }

    fn subscription(&self) -> Subscription<Self::Message> {
        event::listen_with(|event, _status, _id| match event {
            Event::Window(window::Event::Resized(size)) => Some(ScreenMessage::Resized(size)),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn initial() -> Size {
        Size::new(ui::MEASURE_WINDOW_WIDTH, ui::MEASURE_WINDOW_HEIGHT)
    }

    #[test]
    fn test_waits_for_both_reports() {
        let mut measurement = ScreenMeasurement::new(initial());
        assert!(measurement.result().is_none());

        measurement.monitor_reported(Some(Size::new(1920.0, 1080.0)));
        assert!(measurement.result().is_none());

        assert!(measurement.window_resized(Size::new(1920.0, 1032.0)));
        let geometry = measurement.result().unwrap();
        assert_eq!(geometry.nav_bar_height(), 48);
    }

    #[test]
    fn test_initial_size_is_not_the_work_area() {
        let mut measurement = ScreenMeasurement::new(initial());
        measurement.monitor_reported(Some(Size::new(1920.0, 1080.0)));

        assert!(!measurement.window_resized(initial()));
        assert!(measurement.result().is_none());
    }

    #[test]
    fn test_missing_monitor_uses_work_area() {
        let mut measurement = ScreenMeasurement::new(initial());
        measurement.window_resized(Size::new(1280.0, 760.0));
        measurement.monitor_reported(None);

        let geometry = measurement.result().unwrap();
        assert_eq!(geometry.real_size(), ScreenSize::new(1280, 760));
        assert_eq!(geometry.nav_bar_height(), 0);
    }

    #[test]
    fn test_overrides_replace_measured_sides() {
        let measured = PlatformGeometry::new(Size::new(1920.0, 1080.0), Size::new(1920.0, 1032.0));
        let flags = ScreenFlags {
            real: Some(ScreenSize::new(1920, 1200)),
            ..Default::default()
        };

        let geometry = flags.resolve(&measured);
        assert_eq!(geometry.usable, ScreenSize::new(1920, 1032));
        assert_eq!(geometry.real, ScreenSize::new(1920, 1200));
        assert_eq!(geometry.nav_bar_height(), 168);
    }
}
