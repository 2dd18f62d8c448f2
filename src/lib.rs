// SPDX-License-Identifier: MPL-2.0

//! COSMIC Camera settings - capture resolution and audio source selection
//!
//! This library provides the settings dialog used by the COSMIC Camera to
//! choose photo and video resolutions and the recording audio source, plus
//! helpers for naming output files and probing display and audio capabilities.
//!
//! # Architecture
//!
//! - [`app`]: COSMIC application and the resolution dialog
//! - [`resolution`]: Resolution type and picker label formatting
//! - [`settings`]: Settings store injected into the dialog
//! - [`config`]: Persisted configuration entry
//! - [`storage`]: Output file paths for photos and videos
//! - [`display`]: Screen geometry accessors
//! - [`backends`]: Audio capability probing

pub mod app;
pub mod backends;
pub mod config;
pub mod constants;
pub mod display;
pub mod errors;
pub mod resolution;
pub mod settings;
pub mod storage;

// Re-export commonly used types
pub use app::{DialogMessage, PickerKind, ResolutionDialog};
pub use config::{AudioSource, CameraFacing, Config};
pub use resolution::{Resolution, SelectableItem};
pub use settings::{ConfigStore, SettingsStore};
