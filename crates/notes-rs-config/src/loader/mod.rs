//! Layered configuration loader.
//!
//! Discovers configuration layers (user file, working directory file, explicit
//! file, environment, runtime overrides), validates each against the schema,
//! merges them and produces the final `NotesConfig`.

mod env;
mod layer_io;
mod merge;
mod schema;


use crate::{ConfigError, NotesConfig};
use log::{debug, info};
use serde_json::Value;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Default config filename in local layers.
const DEFAULT_CONFIG_FILE: &str = "notes.json5";
/// Default config directory under the user's home.
const DEFAULT_CONFIG_DIR: &str = ".notes-rs";

/// Effective config plus metadata about which layers were loaded.
#[derive(Debug, Clone)]
pub struct LayeredConfig {
    /// The merged, validated config.
    pub config: NotesConfig,
    /// Metadata for each layer that contributed values.
    pub layers: Vec<ConfigLayer>,
}

/// Origin for a single config layer in the stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigLayerSource {
    /// User-specific configuration file.
    User,
    /// `notes.json5` in the working directory.
    Cwd,
    /// File named explicitly by the caller.
    File,
    /// Process environment variables.
    Env,
    /// Runtime overrides (highest precedence).
    Runtime,
}

/// Metadata about a config layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigLayer {
    /// Layer origin.
    pub source: ConfigLayerSource,
    /// Location on disk for file layers.
    pub path: Option<PathBuf>,
}

/// Options controlling layered config discovery and overrides.
#[derive(Debug, Clone)]
pub struct LayeredConfigOptions {
    /// Working directory used to find the local `notes.json5`.
    pub cwd: PathBuf,
    /// Optional user config path (defaults to `~/.notes-rs/notes.json5`).
    pub user_config_path: Option<PathBuf>,
    /// Explicit config file; it must exist when set.
    pub config_path: Option<PathBuf>,
    /// Environment snapshot consulted for `APP_*`, `CORS_*` and `NOTES_*` keys.
    pub env: Vec<(String, String)>,
    /// Runtime override values applied last.
    pub runtime_values: Vec<Value>,
}

impl LayeredConfigOptions {
    /// Create options with default layer locations and the process environment.
    pub fn new(cwd: impl AsRef<Path>) -> Self {
        Self {
            cwd: cwd.as_ref().to_path_buf(),
            user_config_path: layer_io::default_user_config_path(),
            config_path: None,
            env: std::env::vars().collect(),
            runtime_values: Vec::new(),
        }
    }

    /// Use an explicit config file in addition to the discovered ones.
    pub fn with_config_path(mut self, path: impl AsRef<Path>) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Replace the environment snapshot.
    pub fn with_env<I, K, V>(mut self, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.env = vars
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect();
        self
    }

    /// Add a runtime override object that is applied last.
    pub fn with_runtime_value(mut self, value: Value) -> Self {
        self.runtime_values.push(value);
        self
    }
}

impl NotesConfig {
    /// Load a single config from a path (no layering).
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        info!("loading config from path: {}", path.as_ref().display());
        let contents = fs::read_to_string(path)?;
        let value: Value = json5::from_str(&contents)?;
        config_from_value(value, "config")
    }

    /// Load a single config from JSON5 contents (no layering).
    pub fn load_from_str(contents: &str) -> Result<Self, ConfigError> {
        debug!("loading config from raw contents (len={})", contents.len());
        let value: Value = json5::from_str(contents)?;
        config_from_value(value, "config")
    }

    /// Load a layered config stack using explicit layer locations and overrides.
    ///
    /// Layer precedence (low -> high): defaults, user file, cwd file, explicit
    /// file, environment, runtime overrides.
    pub fn load_layered_with_options(
        options: LayeredConfigOptions,
    ) -> Result<LayeredConfig, ConfigError> {
        let mut layers = Vec::new();
        let mut merged = Value::Object(serde_json::Map::new());
        let mut seen_paths = HashSet::new();

        let file_layers = [
            (ConfigLayerSource::User, options.user_config_path.clone(), false),
            (
                ConfigLayerSource::Cwd,
                Some(options.cwd.join(DEFAULT_CONFIG_FILE)),
                false,
            ),
            (ConfigLayerSource::File, options.config_path.clone(), true),
        ];
        for (source, path, required) in file_layers {
            let Some(path) = path else {
                continue;
            };
            if !seen_paths.insert(layer_io::unique_path(&path)) {
                debug!(
                    "skipping duplicate layer (source={:?}, path={})",
                    source,
                    path.display()
                );
                continue;
            }
            let loaded = if required {
                Some(layer_io::load_required_layer(source, &path)?)
            } else {
                layer_io::load_optional_layer(source, Some(&path))?
            };
            if let Some(layer) = loaded {
                debug!("loaded {:?} layer (path={})", source, path.display());
                merge::merge_json_values(&mut merged, &layer.value);
                layers.push(layer.meta);
            }
        }

        if let Some(value) = env::env_layer(&options.env)? {
            debug!("loaded environment layer");
            merge::merge_json_values(&mut merged, &value);
            layers.push(ConfigLayer {
                source: ConfigLayerSource::Env,
                path: None,
            });
        }

        for value in &options.runtime_values {
            schema::validate_layer_schema(value, "runtime")?;
            merge::merge_json_values(&mut merged, value);
            layers.push(ConfigLayer {
                source: ConfigLayerSource::Runtime,
                path: None,
            });
        }

        let config = config_from_value(merged, "effective")?;
        info!("layered config loaded (layers={})", layers.len());
        Ok(LayeredConfig { config, layers })
    }

    /// Validate configuration invariants that cannot be expressed in serde.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.app.name.trim().is_empty() {
            return Err(ConfigError::InvalidField {
                path: "app.name".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if self.cors.allowed_origins.is_empty() {
            return Err(ConfigError::InvalidField {
                path: "cors.allowed_origins".to_string(),
                message: "at least one origin is required".to_string(),
            });
        }
        if let Some(idx) = self
            .cors
            .allowed_origins
            .iter()
            .position(|origin| origin.trim().is_empty())
        {
            return Err(ConfigError::InvalidField {
                path: format!("cors.allowed_origins[{idx}]"),
                message: "origin must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

/// Internal representation of a loaded config layer.
#[derive(Debug, Clone)]
struct LoadedLayer {
    meta: ConfigLayer,
    value: Value,
}

fn config_from_value(value: Value, label: &str) -> Result<NotesConfig, ConfigError> {
    schema::validate_layer_schema(&value, label)?;
    let config: NotesConfig = serde_json::from_value(value)?;
    config.validate()?;
    Ok(config)
}
