use super::options::SceneOptions;
use super::{CURRENT_VERSION, SceneError};
use crate::draw::Element;
use chrono::Utc;
use flate2::{Compression, bufread::GzDecoder, write::GzEncoder};
use log::{debug, info};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs::{self, File, OpenOptions};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

/// On-disk representation of a scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SceneFile {
    pub version: u32,
    /// RFC 3339 timestamp of the last save
    pub last_modified: String,
    pub element: Element,
}

/// Result of a successful [`save_scene`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveOutcome {
    pub path: PathBuf,
    pub bytes_written: u64,
    pub compressed: bool,
}

/// A scene read back by [`load_scene`].
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedScene {
    pub element: Element,
    pub version: u32,
    pub last_modified: String,
    pub compressed: bool,
}

/// Writes `element` to `path`, replacing any existing file atomically.
///
/// The payload is serialized first; if it exceeds `options.max_file_size_bytes` or holds
/// a NaN or infinite number, nothing is written. Missing parent directories are created.
pub fn save_scene(
    path: &Path,
    element: &Element,
    options: &SceneOptions,
) -> Result<SaveOutcome, SceneError> {
    let file_payload = SceneFile {
        version: CURRENT_VERSION,
        last_modified: Utc::now().to_rfc3339(),
        element: element.clone(),
    };

    // JSON has no encoding for NaN or infinity; serde_json turns them into null, which
    // would make the file unreadable.
    let value = serde_json::to_value(&file_payload)?;
    if let Some(location) = find_null(&value, "") {
        return Err(SceneError::NonFinite { location });
    }

    let mut bytes = if options.pretty {
        serde_json::to_vec_pretty(&value)?
    } else {
        serde_json::to_vec(&value)?
    };

    if bytes.len() as u64 > options.max_file_size_bytes {
        return Err(SceneError::TooLarge {
            size: bytes.len() as u64,
            limit: options.max_file_size_bytes,
        });
    }

    let compressed = options.should_compress(bytes.len() as u64);
    if compressed {
        bytes = compress_bytes(&bytes).map_err(|err| SceneError::io(path, err))?;
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|err| SceneError::io(parent, err))?;
    }

    let tmp_path = temp_path(path);
    write_temp_file(&tmp_path, |file| file.write_all(&bytes))?;

    if let Err(err) = fs::rename(&tmp_path, path) {
        fs::remove_file(&tmp_path).ok();
        return Err(SceneError::io(path, err));
    }

    info!(
        "Scene saved to {} ({} bytes, compression={})",
        path.display(),
        bytes.len(),
        compressed
    );

    Ok(SaveOutcome {
        path: path.to_path_buf(),
        bytes_written: bytes.len() as u64,
        compressed,
    })
}

/// Reads a scene written by [`save_scene`], plain or gzip-compressed.
///
/// `options.max_file_size_bytes` bounds both the file on disk and the decompressed JSON.
pub fn load_scene(path: &Path, options: &SceneOptions) -> Result<LoadedScene, SceneError> {
    let metadata = fs::metadata(path).map_err(|err| SceneError::io(path, err))?;
    if metadata.len() > options.max_file_size_bytes {
        return Err(SceneError::TooLarge {
            size: metadata.len(),
            limit: options.max_file_size_bytes,
        });
    }

    let mut file_bytes = Vec::new();
    File::open(path)
        .and_then(|mut file| file.read_to_end(&mut file_bytes))
        .map_err(|err| SceneError::io(path, err))?;

    let compressed = is_gzip(&file_bytes);
    let json_bytes = if compressed {
        debug!("Scene file {} is gzip-compressed", path.display());
        let limit = options.max_file_size_bytes;
        let mut out = Vec::new();
        GzDecoder::new(&file_bytes[..])
            .take(limit.saturating_add(1))
            .read_to_end(&mut out)
            .map_err(|source| SceneError::Decompress {
                path: path.to_path_buf(),
                source,
            })?;
        if out.len() as u64 > limit {
            return Err(SceneError::TooLarge {
                size: out.len() as u64,
                limit,
            });
        }
        out
    } else {
        file_bytes
    };

    let scene_file: SceneFile = serde_json::from_slice(&json_bytes)?;
    if scene_file.version != CURRENT_VERSION {
        return Err(SceneError::UnsupportedVersion {
            found: scene_file.version,
            expected: CURRENT_VERSION,
        });
    }

    debug!(
        "Loaded scene from {} (saved {})",
        path.display(),
        scene_file.last_modified
    );

    Ok(LoadedScene {
        element: scene_file.element,
        version: scene_file.version,
        last_modified: scene_file.last_modified,
        compressed,
    })
}

/// JSON schema of the scene file format.
pub fn scene_schema() -> schemars::Schema {
    schemars::schema_for!(SceneFile)
}

fn compress_bytes(data: &[u8]) -> std::io::Result<Vec<u8>> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data)?;
    encoder.finish()
}

/// Creates `tmp_path`, fills it through `write` and syncs it. The file is removed again
/// if any step after creation fails.
pub(super) fn write_temp_file(
    tmp_path: &Path,
    write: impl FnOnce(&mut File) -> std::io::Result<()>,
) -> Result<(), SceneError> {
    let mut tmp_file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(tmp_path)
        .map_err(|err| SceneError::io(tmp_path, err))?;

    if let Err(err) = write(&mut tmp_file).and_then(|_| tmp_file.sync_all()) {
        drop(tmp_file);
        fs::remove_file(tmp_path).ok();
        return Err(SceneError::io(tmp_path, err));
    }
    Ok(())
}

/// JSON pointer to the first null in `value`. Scene models have no optional fields, so
/// a null can only come from a non-finite float.
fn find_null(value: &Value, pointer: &str) -> Option<String> {
    match value {
        Value::Null => Some(if pointer.is_empty() {
            "/".to_string()
        } else {
            pointer.to_string()
        }),
        Value::Array(items) => items
            .iter()
            .enumerate()
            .find_map(|(index, item)| find_null(item, &format!("{pointer}/{index}"))),
        Value::Object(fields) => fields
            .iter()
            .find_map(|(key, item)| find_null(item, &format!("{pointer}/{key}"))),
        Value::Bool(_) | Value::Number(_) | Value::String(_) => None,
    }
}

fn is_gzip(bytes: &[u8]) -> bool {
    bytes.len() > 2 && bytes[0] == 0x1f && bytes[1] == 0x8b
}

fn temp_path(target: &Path) -> PathBuf {
    let file_name = target
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "scene".to_string());
    let mut candidate = target.with_file_name(format!("{file_name}.tmp"));
    let mut counter = 0u32;
    while candidate.exists() {
        counter += 1;
        candidate = target.with_file_name(format!("{file_name}.tmp{counter}"));
    }
    candidate
}
