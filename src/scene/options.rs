use crate::config::{SceneCompression, SceneConfig};

pub const DEFAULT_AUTO_COMPRESS_THRESHOLD_BYTES: u64 = 100 * 1024; // 100 KiB
pub const DEFAULT_MAX_FILE_SIZE_BYTES: u64 = 16 * 1024 * 1024; // 16 MiB

/// Compression preference for scene files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressionMode {
    /// Always write plain JSON.
    Off,
    /// Always write gzip-compressed JSON.
    On,
    /// Write gzip when payload exceeds the configured threshold.
    Auto,
}

impl From<SceneCompression> for CompressionMode {
    fn from(value: SceneCompression) -> Self {
        match value {
            SceneCompression::Off => CompressionMode::Off,
            SceneCompression::On => CompressionMode::On,
            SceneCompression::Auto => CompressionMode::Auto,
        }
    }
}

/// Runtime options for reading and writing scene files.
#[derive(Debug, Clone)]
pub struct SceneOptions {
    pub compression: CompressionMode,
    pub auto_compress_threshold_bytes: u64,
    pub max_file_size_bytes: u64,
    pub pretty: bool,
}

impl Default for SceneOptions {
    fn default() -> Self {
        Self {
            compression: CompressionMode::Auto,
            auto_compress_threshold_bytes: DEFAULT_AUTO_COMPRESS_THRESHOLD_BYTES,
            max_file_size_bytes: DEFAULT_MAX_FILE_SIZE_BYTES,
            pretty: true,
        }
    }
}

impl SceneOptions {
    pub fn from_config(config: &SceneConfig) -> Self {
        Self {
            compression: config.compression.into(),
            auto_compress_threshold_bytes: config.auto_compress_threshold_bytes,
            max_file_size_bytes: config.max_file_size_bytes,
            pretty: config.pretty,
        }
    }

    pub(crate) fn should_compress(&self, payload_len: u64) -> bool {
        match self.compression {
            CompressionMode::Off => false,
            CompressionMode::On => true,
            CompressionMode::Auto => payload_len >= self.auto_compress_threshold_bytes,
        }
    }
}
