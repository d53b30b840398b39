//! Configuration type definitions.

use super::enums::{ColorSpec, SceneCompression};
use crate::scene::{DEFAULT_AUTO_COMPRESS_THRESHOLD_BYTES, DEFAULT_MAX_FILE_SIZE_BYTES};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Scene file settings.
///
/// Controls how `collage demo` writes scene files and how large a file
/// `collage inspect` is willing to read.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct SceneConfig {
    /// Compression mode: "off", "on" or "auto"
    #[serde(default = "default_compression")]
    pub compression: SceneCompression,

    /// Payload size in bytes above which "auto" compression kicks in
    #[serde(default = "default_auto_compress_threshold")]
    pub auto_compress_threshold_bytes: u64,

    /// Largest scene file that will be written or read (valid range: 1 KiB - 512 MiB)
    #[serde(default = "default_max_file_size")]
    pub max_file_size_bytes: u64,

    /// Indent JSON output for readability
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            compression: default_compression(),
            auto_compress_threshold_bytes: default_auto_compress_threshold(),
            max_file_size_bytes: default_max_file_size(),
            pretty: default_pretty(),
        }
    }
}

/// Settings for `collage inspect`.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct InspectConfig {
    /// Deepest tree level printed in outlines (valid range: 1 - 64)
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,

    /// Append each form's world-space origin to its outline line
    #[serde(default = "default_show_transforms")]
    pub show_transforms: bool,
}

impl Default for InspectConfig {
    fn default() -> Self {
        Self {
            max_depth: default_max_depth(),
            show_transforms: default_show_transforms(),
        }
    }
}

/// Settings for the generated demo scene.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct DemoConfig {
    /// Canvas width in pixels (valid range: 64 - 8192)
    #[serde(default = "default_width")]
    pub width: i32,

    /// Canvas height in pixels (valid range: 64 - 8192)
    #[serde(default = "default_height")]
    pub height: i32,

    /// Highlight color used for the demo's foreground shapes
    #[serde(default = "default_accent_color")]
    pub accent_color: ColorSpec,

    /// Image referenced by the demo's sprite, texture and image elements
    #[serde(default = "default_image_path")]
    pub image_path: String,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            accent_color: default_accent_color(),
            image_path: default_image_path(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_compression() -> SceneCompression {
    SceneCompression::Auto
}

fn default_auto_compress_threshold() -> u64 {
    DEFAULT_AUTO_COMPRESS_THRESHOLD_BYTES
}

fn default_max_file_size() -> u64 {
    DEFAULT_MAX_FILE_SIZE_BYTES
}

fn default_pretty() -> bool {
    true
}

fn default_max_depth() -> usize {
    16
}

fn default_show_transforms() -> bool {
    false
}

fn default_width() -> i32 {
    800
}

fn default_height() -> i32 {
    600
}

fn default_accent_color() -> ColorSpec {
    ColorSpec::Name("orange".to_string())
}

fn default_image_path() -> String {
    "assets/sprites.png".to_string()
}
