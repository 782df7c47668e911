//! Configuration handling for startoff.
//! An optional `startoff.json`, `startoff.yml` or `startoff.yaml` file can
//! override the template table, the fetch timeout, the install command and
//! the file patterns used while materializing.

use crate::constants::{
    CONFIG_FILES, DEFAULT_FETCH_TIMEOUT_SECS, DEFAULT_INSTALL_ARGS, DEFAULT_INSTALL_PROGRAM,
};
use crate::error::{Error, Result};
use crate::profile::ProjectType;
use crate::template::{TemplateReference, TemplateRegistry};
use indexmap::IndexMap;
use log::debug;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_SCHEMA: &str = r#"{
  "type": "object",
  "additionalProperties": false,
  "properties": {
    "templates": {
      "type": "object",
      "propertyNames": { "enum": ["pc", "h5"] },
      "additionalProperties": {
        "type": "object",
        "required": ["host", "repository"],
        "additionalProperties": false,
        "properties": {
          "host": { "type": "string", "minLength": 1 },
          "repository": { "type": "string", "minLength": 1 }
        }
      }
    },
    "fetch_timeout_secs": { "type": "integer", "minimum": 1 },
    "install": {
      "type": "object",
      "additionalProperties": false,
      "properties": {
        "enabled": { "type": "boolean" },
        "program": { "type": "string", "minLength": 1 },
        "args": { "type": "array", "items": { "type": "string" } }
      }
    },
    "ignore": { "type": "array", "items": { "type": "string" } },
    "copy_without_render": { "type": "array", "items": { "type": "string" } }
  }
}"#;

/// How dependencies get installed once the project is generated.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct InstallConfig {
    pub enabled: bool,
    pub program: String,
    pub args: Vec<String>,
}

impl Default for InstallConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            program: DEFAULT_INSTALL_PROGRAM.to_string(),
            args: DEFAULT_INSTALL_ARGS.iter().map(|a| a.to_string()).collect(),
        }
    }
}

/// Tool configuration. Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Per-type overrides of the built-in template table
    pub templates: IndexMap<ProjectType, TemplateReference>,
    pub fetch_timeout_secs: u64,
    pub install: InstallConfig,
    /// Extra globs excluded from materialization
    pub ignore: Vec<String>,
    /// Globs of files copied byte for byte instead of rendered
    pub copy_without_render: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            templates: IndexMap::new(),
            fetch_timeout_secs: DEFAULT_FETCH_TIMEOUT_SECS,
            install: InstallConfig::default(),
            ignore: Vec::new(),
            copy_without_render: Vec::new(),
        }
    }
}

impl Config {
    /// Template table with this configuration's overrides applied.
    pub fn registry(&self) -> Result<TemplateRegistry> {
        TemplateRegistry::with_overrides(self.templates.clone())
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }
}

/// Finds the first existing configuration file in `dir`.
pub fn find_config_file<P: AsRef<Path>>(dir: P) -> Option<PathBuf> {
    CONFIG_FILES.iter().map(|file| dir.as_ref().join(file)).find(|path| path.exists())
}

/// Parses configuration content, trying JSON first and YAML second.
///
/// # Errors
/// * `Error::ConfigError` if the content is malformed or violates the schema
pub fn parse_config(content: &str) -> Result<Config> {
    if content.trim().is_empty() {
        return Ok(Config::default());
    }
    let raw: serde_json::Value = match serde_json::from_str(content) {
        Ok(value) => value,
        Err(_) => serde_yaml::from_str(content)
            .map_err(|e| Error::ConfigError(format!("Invalid configuration format: {e}")))?,
    };
    // A document holding only comments means "use the defaults".
    if raw.is_null() {
        return Ok(Config::default());
    }

    let schema: serde_json::Value = serde_json::from_str(CONFIG_SCHEMA)
        .map_err(|e| Error::ConfigError(format!("Invalid built-in schema: {e}")))?;
    let validator = jsonschema::validator_for(&schema)
        .map_err(|e| Error::ConfigError(format!("Invalid built-in schema: {e}")))?;
    validator
        .validate(&raw)
        .map_err(|e| Error::ConfigError(format!("Invalid schema: {e}")))?;

    let config: Config = serde_json::from_value(raw)
        .map_err(|e| Error::ConfigError(format!("Invalid schema: {e}")))?;
    for reference in config.templates.values() {
        reference.validate()?;
    }
    Ok(config)
}

/// Loads the configuration.
///
/// An explicit `path` must exist. Without one, the first of `CONFIG_FILES`
/// found in `search_dir` is used, and the defaults apply if none exists.
pub fn load_config<P: AsRef<Path>>(path: Option<&Path>, search_dir: P) -> Result<Config> {
    let path = match path {
        Some(path) if !path.is_file() => {
            return Err(Error::ConfigError(format!(
                "configuration file '{}' does not exist",
                path.display()
            )));
        }
        Some(path) => path.to_path_buf(),
        None => match find_config_file(search_dir) {
            Some(path) => path,
            None => {
                debug!("No configuration file found, using defaults.");
                return Ok(Config::default());
            }
        },
    };

    debug!("Loading configuration from {}", path.display());
    let content = std::fs::read_to_string(&path).map_err(Error::IoError)?;
    parse_config(&content)
}
