// SPDX-License-Identifier: MPL-2.0

//! Screen geometry accessors

use crate::resolution::Resolution;
use cosmic::iced::Size;
use serde::{Deserialize, Serialize};

/// Width/height of a display area in pixels
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenSize {
    pub width: u32,
    pub height: u32,
}

impl ScreenSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl ScreenSize {
    /// Convert a logical size reported by the windowing system
    ///
    /// Fractional sizes are rounded; negative or NaN sides become 0.
    pub fn from_logical(size: Size) -> Self {
        Self::new(size.width.round() as u32, size.height.round() as u32)
    }
}

impl From<Resolution> for ScreenSize {
    fn from(resolution: Resolution) -> Self {
        Self::new(resolution.width(), resolution.height())
    }
}

/// Display metrics as reported by the windowing system
pub trait DisplayMetrics {
    /// Area available to the application, excluding system decoration
    fn usable_size(&self) -> ScreenSize;

    /// Full physical display area
    fn real_size(&self) -> ScreenSize;

    /// Height taken by the navigation bar (or panel) at the bottom
    ///
    /// Zero when the usable area is the full height.
    fn nav_bar_height(&self) -> u32 {
        self.real_size()
            .height
            .saturating_sub(self.usable_size().height)
    }
}

/// Snapshot of a display's usable and real size
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayGeometry {
    pub usable: ScreenSize,
    pub real: ScreenSize,
}

impl DisplayGeometry {
    pub fn new(usable: ScreenSize, real: ScreenSize) -> Self {
        Self { usable, real }
    }
}

impl DisplayMetrics for DisplayGeometry {
    fn usable_size(&self) -> ScreenSize {
        self.usable
    }

    fn real_size(&self) -> ScreenSize {
        self.real
    }
}

impl DisplayGeometry {
    /// Capture the current values of any metrics source
    pub fn snapshot(metrics: &dyn DisplayMetrics) -> Self {
        Self::new(metrics.usable_size(), metrics.real_size())
    }
}

/// Geometry measured through the compositor
///
/// `monitor` is the size of the monitor the window sits on, `work_area` the
/// size of a maximized window on it. Both are logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlatformGeometry {
    monitor: Size,
    work_area: Size,
}

impl PlatformGeometry {
    pub fn new(monitor: Size, work_area: Size) -> Self {
        Self { monitor, work_area }
    }
}

impl DisplayMetrics for PlatformGeometry {
    fn usable_size(&self) -> ScreenSize {
        ScreenSize::from_logical(self.work_area)
    }

    fn real_size(&self) -> ScreenSize {
        ScreenSize::from_logical(self.monitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_bar_height() {
        let geometry =
            DisplayGeometry::new(ScreenSize::new(1080, 2214), ScreenSize::new(1080, 2340));
        assert_eq!(geometry.nav_bar_height(), 126);
    }

    #[test]
    fn test_nav_bar_height_without_bar() {
        let size = ScreenSize::new(1920, 1080);
        assert_eq!(DisplayGeometry::new(size, size).nav_bar_height(), 0);
    }

    #[test]
    fn test_nav_bar_height_never_negative() {
        let geometry =
            DisplayGeometry::new(ScreenSize::new(1080, 2400), ScreenSize::new(1080, 2340));
        assert_eq!(geometry.nav_bar_height(), 0);
    }

    #[test]
    fn test_platform_geometry_feeds_nav_bar_height() {
        let geometry =
            PlatformGeometry::new(Size::new(1920.0, 1080.0), Size::new(1920.0, 1032.0));
        assert_eq!(geometry.real_size(), ScreenSize::new(1920, 1080));
        assert_eq!(geometry.usable_size(), ScreenSize::new(1920, 1032));
        assert_eq!(geometry.nav_bar_height(), 48);
    }

    #[test]
    fn test_logical_sizes_are_rounded() {
        assert_eq!(
            ScreenSize::from_logical(Size::new(1365.6, 767.4)),
            ScreenSize::new(1366, 767)
        );
        assert_eq!(
            ScreenSize::from_logical(Size::new(-4.0, f32::NAN)),
            ScreenSize::new(0, 0)
        );
    }

    #[test]
    fn test_snapshot_copies_metrics() {
        let platform =
            PlatformGeometry::new(Size::new(2560.0, 1440.0), Size::new(2560.0, 1400.0));
        let snapshot = DisplayGeometry::snapshot(&platform);
        assert_eq!(snapshot.real, ScreenSize::new(2560, 1440));
        assert_eq!(snapshot.nav_bar_height(), 40);
    }
}
