// SPDX-License-Identifier: MPL-2.0

//! Platform backends
//!
//! - `audio`: audio capture capability probing via PipeWire

pub mod audio;
