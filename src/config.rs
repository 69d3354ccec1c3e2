use crate::constants::CONFIG_FILENAMES;
use crate::emitter::{Emitter, EmitterRegistry};
use crate::error::{Error, Result};
use log::{debug, info};
use serde::Deserialize;
use std::collections::HashSet;
use std::io::ErrorKind;
use std::path::Path;

/// Per-root configuration: rendering context and additional emitters.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigV1 {
    /// Variables made available to every template
    #[serde(default)]
    pub context: serde_json::Map<String, serde_json::Value>,
    /// Emitters appended to (or replacing) the built-in table
    #[serde(default)]
    pub emitters: Vec<Emitter>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "schemaVersion")]
pub enum Config {
    #[serde(rename = "v1")]
    V1(ConfigV1),
}

impl Config {
    /// Parses a configuration file, choosing JSON or YAML by its extension.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::InvalidData => Error::ConfigParseError {
                path: path.display().to_string(),
                reason: e.to_string(),
            },
            _ => Error::IoError(e),
        })?;
        let is_json = path.extension().is_some_and(|ext| ext == "json");

        let parsed = if is_json {
            serde_json::from_str(&contents).map_err(|e| e.to_string())
        } else {
            serde_yaml::from_str(&contents).map_err(|e| e.to_string())
        };

        parsed.map_err(|reason| Error::ConfigParseError {
            path: path.display().to_string(),
            reason,
        })
    }

    /// Loads the first configuration file found in `root_dir`.
    ///
    /// A root without a configuration file gets an empty default configuration.
    pub fn load_config<P: AsRef<Path>>(root_dir: P) -> Result<ConfigV1> {
        let root_dir = root_dir.as_ref();
        for config_file in CONFIG_FILENAMES {
            let path = root_dir.join(config_file);
            if path.is_file() {
                info!("Loading configuration from '{}'", path.display());
                let Config::V1(config) = Config::from_file(&path)?;
                config.validate(&path)?;
                return Ok(config);
            }
        }
        debug!(
            "No configuration file in '{}'. Tried: {}",
            root_dir.display(),
            CONFIG_FILENAMES.join(", ")
        );
        Ok(ConfigV1::default())
    }
}

impl ConfigV1 {
    /// Validates declared emitters. `source` names the file in error messages.
    pub fn validate(&self, source: &Path) -> Result<()> {
        let mut seen = HashSet::new();
        for emitter in &self.emitters {
            emitter.validate()?;
            if !seen.insert(&*emitter.name) {
                return Err(Error::DuplicateEmitter {
                    name: emitter.name.to_string(),
                    path: source.display().to_string(),
                });
            }
        }
        Ok(())
    }

    /// Builds the emitter table: built-ins followed by the declared emitters.
    pub fn registry(&self) -> Result<EmitterRegistry> {
        let mut registry = EmitterRegistry::new();
        for emitter in &self.emitters {
            registry.register(emitter.clone())?;
        }
        Ok(registry)
    }
}
