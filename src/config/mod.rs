//! Configuration file support for collage.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/collage/config.toml`. Settings cover scene file output, the
//! inspector's tree printing, and the generated demo scene.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::{ColorSpec, SceneCompression};
pub use types::{DemoConfig, InspectConfig, SceneConfig};

use anyhow::{Context, Result};
use log::{debug, info};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML file.
/// All fields have sensible defaults and will use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [scene]
/// compression = "auto"
/// pretty = true
///
/// [inspect]
/// max_depth = 8
/// show_transforms = true
///
/// [demo]
/// width = 1024
/// height = 768
/// accent_color = [255, 128, 0]
/// ```
#[derive(Debug, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Scene file output and size limits
    #[serde(default)]
    pub scene: SceneConfig,

    /// Tree printing for `collage inspect`
    #[serde(default)]
    pub inspect: InspectConfig,

    /// Parameters of the generated demo scene
    #[serde(default)]
    pub demo: DemoConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning is logged.
    ///
    /// Validated ranges:
    /// - `scene.max_file_size_bytes`: 1 KiB - 512 MiB
    /// - `inspect.max_depth`: 1 - 64
    /// - `demo.width`, `demo.height`: 64 - 8192
    fn validate_and_clamp(&mut self) {
        const MIN_FILE: u64 = 1024;
        const MAX_FILE: u64 = 512 * 1024 * 1024;
        if !(MIN_FILE..=MAX_FILE).contains(&self.scene.max_file_size_bytes) {
            log::warn!(
                "Invalid max_file_size_bytes {}, clamping to {}-{} range",
                self.scene.max_file_size_bytes,
                MIN_FILE,
                MAX_FILE
            );
            self.scene.max_file_size_bytes =
                self.scene.max_file_size_bytes.clamp(MIN_FILE, MAX_FILE);
        }

        if !(1..=64).contains(&self.inspect.max_depth) {
            log::warn!(
                "Invalid inspect max_depth {}, clamping to 1-64 range",
                self.inspect.max_depth
            );
            self.inspect.max_depth = self.inspect.max_depth.clamp(1, 64);
        }

        if !(64..=8192).contains(&self.demo.width) {
            log::warn!(
                "Invalid demo width {}, clamping to 64-8192 range",
                self.demo.width
            );
            self.demo.width = self.demo.width.clamp(64, 8192);
        }

        if !(64..=8192).contains(&self.demo.height) {
            log::warn!(
                "Invalid demo height {}, clamping to 64-8192 range",
                self.demo.height
            );
            self.demo.height = self.demo.height.clamp(64, 8192);
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/collage/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("collage");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined, or if the file
    /// exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;
        Self::load_from(&config_path)
    }

    /// Loads configuration from `config_path`, or returns defaults if it does not exist.
    ///
    /// All loaded values are validated and clamped to acceptable ranges.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        // Validate and clamp values to acceptable ranges
        config.validate_and_clamp();

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Saves the current configuration to the default location.
    pub fn save(&self) -> Result<()> {
        let config_path = Self::get_config_path()?;
        self.save_to(&config_path)
    }

    /// Saves the configuration to `config_path` as TOML, creating the parent directory
    /// if needed.
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let config_str = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(config_path, config_str)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        info!("Saved config to {}", config_path.display());
        Ok(())
    }

    /// Creates a default configuration file with documentation comments.
    ///
    /// Writes the example config from `config.example.toml` to the user's config
    /// directory and returns its path.
    ///
    /// # Errors
    /// Returns an error if a config file already exists at the target path, or if the
    /// directory or file cannot be written.
    pub fn create_default_file() -> Result<PathBuf> {
        let config_path = Self::get_config_path()?;

        if config_path.exists() {
            return Err(anyhow::anyhow!(
                "Config file already exists at {}",
                config_path.display()
            ));
        }

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(&config_path, EXAMPLE_CONFIG)?;

        info!("Created default config at {}", config_path.display());
        Ok(config_path)
    }

    /// JSON schema describing the configuration file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }
}

const EXAMPLE_CONFIG: &str = include_str!("../../config.example.toml");

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_yields_defaults() {
        let temp = TempDir::new().unwrap();
        let config = Config::load_from(&temp.path().join("absent.toml")).unwrap();
        assert_eq!(config.scene.compression, SceneCompression::Auto);
        assert_eq!(config.inspect.max_depth, 16);
        assert_eq!((config.demo.width, config.demo.height), (800, 600));
    }

    #[test]
    fn partial_file_keeps_other_defaults_and_clamps() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(
            &path,
            "[inspect]\nmax_depth = 500\n\n[demo]\nwidth = 10\naccent_color = [0, 255, 0]\n",
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.inspect.max_depth, 64);
        assert_eq!(config.demo.width, 64);
        assert_eq!(config.demo.height, 600);
        assert_eq!(config.demo.accent_color, ColorSpec::Rgb([0, 255, 0]));
        assert!(config.scene.pretty);
    }

    #[test]
    fn invalid_toml_is_an_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "[scene\npretty = yes").unwrap();
        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn saved_config_loads_back() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.scene.compression = SceneCompression::On;
        config.scene.max_file_size_bytes = 4096;
        config.inspect.max_depth = 3;
        config.inspect.show_transforms = true;
        config.demo.accent_color = ColorSpec::Rgb([10, 20, 30]);
        config.demo.image_path = "art/sheet.png".to_string();
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.scene.compression, SceneCompression::On);
        assert_eq!(loaded.scene.max_file_size_bytes, 4096);
        assert_eq!(loaded.inspect.max_depth, 3);
        assert!(loaded.inspect.show_transforms);
        assert_eq!(loaded.demo.accent_color, ColorSpec::Rgb([10, 20, 30]));
        assert_eq!(loaded.demo.image_path, "art/sheet.png");
        assert_eq!((loaded.demo.width, loaded.demo.height), (800, 600));
    }

    #[test]
    fn example_config_parses() {
        let config: Config = toml::from_str(EXAMPLE_CONFIG).unwrap();
        assert_eq!(config.scene.compression, SceneCompression::Auto);
    }

    #[test]
    fn schema_lists_top_level_sections() {
        let schema = serde_json::to_value(Config::json_schema()).unwrap();
        let properties = schema["properties"].as_object().unwrap();
        for section in ["scene", "inspect", "demo"] {
            assert!(properties.contains_key(section), "missing {section}");
        }
    }
}
