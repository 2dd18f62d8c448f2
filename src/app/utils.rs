// SPDX-License-Identifier: MPL-2.0

//! Utility functions for parsing command line values

use crate::errors::AppError;
use crate::resolution::Resolution;

/// Parse resolution string in format "WIDTHxHEIGHT"
pub fn parse_resolution(resolution_str: &str) -> Option<Resolution> {
    let (width, height) = resolution_str.trim().split_once(['x', 'X'])?;
    let width = width.trim().parse::<u32>().ok()?;
    let height = height.trim().parse::<u32>().ok()?;
    Resolution::new(width, height)
}

/// clap value parser wrapping [`parse_resolution`]
pub fn resolution_arg(value: &str) -> Result<Resolution, AppError> {
    parse_resolution(value).ok_or_else(|| AppError::InvalidResolution(value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_resolution() {
        assert_eq!(parse_resolution("1920x1080"), Resolution::new(1920, 1080));
        assert_eq!(parse_resolution("3840X2160"), Resolution::new(3840, 2160));
        assert_eq!(parse_resolution(" 640 x 480 "), Resolution::new(640, 480));
        assert_eq!(parse_resolution("invalid"), None);
        assert_eq!(parse_resolution("1920"), None);
        assert_eq!(parse_resolution("0x1080"), None);
        assert_eq!(parse_resolution("1920x1080x3"), None);
    }

    #[test]
    fn test_resolution_arg_error() {
        let err = resolution_arg("wide").unwrap_err();
        assert_eq!(err.to_string(), "Invalid resolution: wide (expected WIDTHxHEIGHT)");
    }
}
