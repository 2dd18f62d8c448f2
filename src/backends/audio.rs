// SPDX-License-Identifier: MPL-2.0

//! Audio capture capability probing for PipeWire

use crate::constants::pipewire;
use std::process::Command;
use tracing::{debug, warn};

/// Reports which audio capture modes the platform offers
pub trait AudioCapabilities {
    /// True only when the platform explicitly offers raw, unprocessed capture
    fn supports_unprocessed_audio(&self) -> bool;
}

/// Fixed answer, for tests and command line overrides
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticAudioCapabilities(pub bool);

impl AudioCapabilities for StaticAudioCapabilities {
    fn supports_unprocessed_audio(&self) -> bool {
        self.0
    }
}

/// Probe the PipeWire graph through `pw-dump`
///
/// Unprocessed capture is reported when a hardware capture node is exposed
/// directly, i.e. an ALSA `Audio/Source` with no filter chain in front of it.
#[derive(Debug, Clone, Copy, Default)]
pub struct PipeWireAudioProbe;

impl AudioCapabilities for PipeWireAudioProbe {
    fn supports_unprocessed_audio(&self) -> bool {
        let output = match Command::new("pw-dump").output() {
            Ok(output) => output,
            Err(e) => {
                warn!("Failed to run pw-dump: {}", e);
                return false;
            }
        };

        if !output.status.success() {
            warn!("pw-dump command failed");
            return false;
        }

        match std::str::from_utf8(&output.stdout) {
            Ok(stdout) => parse_unprocessed_support(stdout),
            Err(e) => {
                warn!("Failed to parse pw-dump output: {}", e);
                false
            }
        }
    }
}

/// Check a `pw-dump` JSON document for a raw hardware capture node
pub fn parse_unprocessed_support(pw_dump_json: &str) -> bool {
    let nodes: Vec<serde_json::Value> = match serde_json::from_str(pw_dump_json) {
        Ok(nodes) => nodes,
        Err(e) => {
            warn!("Failed to parse JSON from pw-dump: {}", e);
            return false;
        }
    };

    let raw_source = nodes.iter().find_map(|node| {
        let props = node.get("info")?.get("props")?;
        let prop = |key: &str| props.get(key).and_then(|v| v.as_str());

        let is_raw = prop("media.class") == Some(pipewire::AUDIO_SOURCE_CLASS)
            && prop("device.api") == Some(pipewire::RAW_DEVICE_API)
            && prop("node.name").is_some_and(|name| name.starts_with(pipewire::RAW_NODE_PREFIX));

        is_raw.then(|| prop("node.name").unwrap_or_default().to_string())
    });

    match raw_source {
        Some(node_name) => {
            debug!(node = %node_name, "Found unprocessed audio source");
            true
        }
        None => {
            debug!("No unprocessed audio source available");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALSA_SOURCE: &str = r#"[
        {"id": 30, "type": "PipeWire:Interface:Metadata", "props": {"metadata.name": "default"}},
        {"id": 52, "type": "PipeWire:Interface:Node", "info": {"props": {
            "media.class": "Audio/Source",
            "device.api": "alsa",
            "node.name": "alsa_input.pci-0000_00_1f.3.analog-stereo"
        }}}
    ]"#;

    const FILTERED_SOURCE: &str = r#"[
        {"id": 61, "type": "PipeWire:Interface:Node", "info": {"props": {
            "media.class": "Audio/Source",
            "node.name": "echo-cancel-source"
        }}},
        {"id": 62, "type": "PipeWire:Interface:Node", "info": {"props": {
            "media.class": "Audio/Sink",
            "device.api": "alsa",
            "node.name": "alsa_output.pci-0000_00_1f.3.analog-stereo"
        }}}
    ]"#;

    #[test]
    fn test_alsa_source_is_unprocessed() {
        assert!(parse_unprocessed_support(ALSA_SOURCE));
    }

    #[test]
    fn test_filtered_sources_are_not_unprocessed() {
        assert!(!parse_unprocessed_support(FILTERED_SOURCE));
    }

    #[test]
    fn test_invalid_json_reports_unsupported() {
        assert!(!parse_unprocessed_support("not json"));
        assert!(!parse_unprocessed_support("{}"));
        assert!(!parse_unprocessed_support("[]"));
    }

    #[test]
    fn test_static_capabilities() {
        assert!(StaticAudioCapabilities(true).supports_unprocessed_audio());
        assert!(!StaticAudioCapabilities::default().supports_unprocessed_audio());
    }
}
