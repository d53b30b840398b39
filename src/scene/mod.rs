//! Scene files: elements persisted as (optionally gzip-compressed) JSON.
//!
//! The model itself never touches the filesystem. This module is the one place where
//! finished [`Element`] trees are written out or read back, e.g. to hand a frame to an
//! out-of-process renderer or to inspect it with `collage inspect`.

mod file;
mod options;

pub use file::{LoadedScene, SaveOutcome, SceneFile, load_scene, save_scene, scene_schema};
pub use options::{
    CompressionMode, DEFAULT_AUTO_COMPRESS_THRESHOLD_BYTES, DEFAULT_MAX_FILE_SIZE_BYTES,
    SceneOptions,
};

use std::path::PathBuf;
use thiserror::Error;

/// Current on-disk format version.
pub const CURRENT_VERSION: u32 = 1;

/// Errors that can occur while reading or writing scene files.
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid scene JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to decompress {}: {source}", .path.display())]
    Decompress {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Scene data is {size} bytes, exceeding the {limit} byte limit")]
    TooLarge { size: u64, limit: u64 },

    #[error("Scene holds a NaN or infinite number at {location}, which JSON cannot store")]
    NonFinite { location: String },

    #[error("Unsupported scene file version {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },
}

impl SceneError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SceneError::Io {
            path: path.into(),
            source,
        }
    }
}
