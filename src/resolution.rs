// SPDX-License-Identifier: MPL-2.0

//! Capture resolutions and their picker labels

use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;

/// A capture frame size. Both sides are always non-zero.
///
/// Only serializable: values are built through [`Resolution::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Resolution {
    width: u32,
    height: u32,
}

impl Resolution {
    /// Create a resolution, rejecting zero-sized frames
    pub fn new(width: u32, height: u32) -> Option<Self> {
        if width == 0 || height == 0 {
            return None;
        }
        Some(Self { width, height })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total pixel count
    pub fn pixels(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    /// Pixel count in megapixels
    pub fn megapixels(&self) -> f64 {
        self.pixels() as f64 / 1_000_000.0
    }

    /// Megapixels with one decimal, halves rounded up (e.g. "1.3")
    pub fn megapixels_label(&self) -> String {
        let tenths = (self.pixels() + 50_000) / 100_000;
        format!("{}.{}", tenths / 10, tenths % 10)
    }

    /// Simplified aspect ratio label (e.g. "16:9")
    pub fn aspect_ratio(&self) -> String {
        SimplifiedRatio.label(*self)
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Produces the aspect ratio part of a resolution label
pub trait AspectRatioLabel {
    fn label(&self, resolution: Resolution) -> String;
}

/// Ratios sensors commonly report: (long side, short side, landscape label, portrait label)
const COMMON_RATIOS: &[(f64, f64, &str, &str)] = &[
    (1.0, 1.0, "1:1", "1:1"),
    (5.0, 4.0, "5:4", "4:5"),
    (4.0, 3.0, "4:3", "3:4"),
    (3.0, 2.0, "3:2", "2:3"),
    (16.0, 10.0, "16:10", "10:16"),
    (16.0, 9.0, "16:9", "9:16"),
    (18.0, 9.0, "18:9", "9:18"),
    (19.5, 9.0, "19.5:9", "9:19.5"),
    (21.0, 9.0, "21:9", "9:21"),
];

/// Relative deviation tolerated when snapping to a common ratio
const RATIO_TOLERANCE: f64 = 0.015;

/// Default aspect ratio helper
///
/// Snaps to a well-known ratio when the frame is within 1.5% of it, since
/// sensor modes such as 1920x1088 or 2592x1458 are padded for alignment.
/// Anything else is reduced by the greatest common divisor.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimplifiedRatio;

impl AspectRatioLabel for SimplifiedRatio {
    fn label(&self, resolution: Resolution) -> String {
        let (w, h) = (resolution.width, resolution.height);
        let landscape = w >= h;
        let (long, short) = if landscape { (w, h) } else { (h, w) };
        let actual = f64::from(long) / f64::from(short);

        for &(long_part, short_part, landscape_label, portrait_label) in COMMON_RATIOS {
            let expected = long_part / short_part;
            if ((actual - expected) / expected).abs() <= RATIO_TOLERANCE {
                let label = if landscape { landscape_label } else { portrait_label };
                return label.to_string();
            }
        }

        let divisor = gcd(w, h).max(1);
        format!("{}:{}", w / divisor, h / divisor)
    }
}

fn gcd(mut a: u32, mut b: u32) -> u32 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// One row of a single-choice picker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectableItem {
    pub index: usize,
    pub label: String,
}

impl SelectableItem {
    pub fn new(index: usize, label: impl Into<String>) -> Self {
        Self {
            index,
            label: label.into(),
        }
    }
}

/// Helper to sort resolutions by total pixel count (highest to lowest)
fn sort_by_pixels_desc(a: &Resolution, b: &Resolution) -> Ordering {
    b.pixels().cmp(&a.pixels())
}

/// Resolutions ordered by descending pixel count
///
/// The sort is stable: equal-area resolutions keep their input order.
pub fn sorted_by_pixels_desc(resolutions: &[Resolution]) -> Vec<Resolution> {
    let mut sorted = resolutions.to_vec();
    sorted.sort_by(sort_by_pixels_desc);
    sorted
}

/// Picker label, e.g. `4032 x 3024  (12.2 MP,  4:3)`
pub fn resolution_label(resolution: Resolution, ratio: &dyn AspectRatioLabel) -> String {
    format!(
        "{} x {}  ({} MP,  {})",
        resolution.width,
        resolution.height,
        resolution.megapixels_label(),
        ratio.label(resolution)
    )
}

/// Build picker items for a set of resolutions, largest first
pub fn format_resolutions(
    resolutions: &[Resolution],
    ratio: &dyn AspectRatioLabel,
) -> Vec<SelectableItem> {
    sorted_by_pixels_desc(resolutions)
        .into_iter()
        .enumerate()
        .map(|(index, resolution)| {
            SelectableItem::new(index, resolution_label(resolution, ratio))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn res(w: u32, h: u32) -> Resolution {
        Resolution::new(w, h).unwrap()
    }

    #[test]
    fn test_rejects_zero_sides() {
        assert!(Resolution::new(0, 1080).is_none());
        assert!(Resolution::new(1920, 0).is_none());
        assert!(Resolution::new(1, 1).is_some());
    }

    #[test]
    fn test_format_sorts_largest_first() {
        let items = format_resolutions(
            &[res(1920, 1080), res(4032, 3024), res(1280, 720)],
            &SimplifiedRatio,
        );

        let labels: Vec<&str> = items.iter().map(|i| i.label.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "4032 x 3024  (12.2 MP,  4:3)",
                "1920 x 1080  (2.1 MP,  16:9)",
                "1280 x 720  (0.9 MP,  16:9)",
            ]
        );
        assert_eq!(
            items.iter().map(|i| i.index).collect::<Vec<_>>(),
            vec![0, 1, 2]
        );
    }

    #[test]
    fn test_equal_area_keeps_input_order() {
        struct Dimensions;
        impl AspectRatioLabel for Dimensions {
            fn label(&self, resolution: Resolution) -> String {
                resolution.to_string()
            }
        }

        let items = format_resolutions(
            &[res(800, 600), res(1200, 400), res(600, 800)],
            &Dimensions,
        );

        assert!(items[0].label.ends_with("800x600)"));
        assert!(items[1].label.ends_with("1200x400)"));
        assert!(items[2].label.ends_with("600x800)"));
    }

    #[test]
    fn test_megapixels_single_decimal() {
        for r in [res(1, 1), res(640, 480), res(8000, 6000), res(3840, 2160)] {
            let label = resolution_label(r, &SimplifiedRatio);
            let mp = label
                .split('(')
                .nth(1)
                .and_then(|s| s.split(' ').next())
                .unwrap();
            let (_, fraction) = mp.split_once('.').unwrap();
            assert_eq!(fraction.len(), 1, "label {label}");
        }
        assert!(resolution_label(res(1, 1), &SimplifiedRatio).contains("(0.0 MP"));
        assert!(resolution_label(res(8000, 6000), &SimplifiedRatio).contains("(48.0 MP"));
    }

    #[test]
    fn test_megapixels_round_half_up() {
        assert!(resolution_label(res(1250, 1000), &SimplifiedRatio).contains("(1.3 MP"));
        assert!(resolution_label(res(1500, 1500), &SimplifiedRatio).contains("(2.3 MP"));
        assert_eq!(res(500, 500).megapixels_label(), "0.3");
        assert_eq!(res(1000, 1049).megapixels_label(), "1.0");
    }

    #[test]
    fn test_ratio_label_with_zero_side() {
        let degenerate = Resolution {
            width: 0,
            height: 0,
        };
        assert_eq!(SimplifiedRatio.label(degenerate), "0:0");

        let flat = Resolution {
            width: 640,
            height: 0,
        };
        assert_eq!(SimplifiedRatio.label(flat), "1:0");
    }

    #[test]
    fn test_empty_input() {
        assert!(format_resolutions(&[], &SimplifiedRatio).is_empty());
    }

    #[test]
    fn test_aspect_ratios() {
        assert_eq!(res(1920, 1080).aspect_ratio(), "16:9");
        assert_eq!(res(1920, 1088).aspect_ratio(), "16:9");
        assert_eq!(res(1080, 1920).aspect_ratio(), "9:16");
        assert_eq!(res(4032, 3024).aspect_ratio(), "4:3");
        assert_eq!(res(1280, 1024).aspect_ratio(), "5:4");
        assert_eq!(res(1000, 700).aspect_ratio(), "10:7");
    }

    #[test]
    fn test_pixels_do_not_overflow() {
        assert_eq!(res(u32::MAX, 2).pixels(), u64::from(u32::MAX) * 2);
    }
}
