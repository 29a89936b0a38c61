use std::fs;
use std::io::ErrorKind;
use std::path::{ Path, PathBuf };

use serde::{ Deserialize, Serialize };

use crate::errors::ConfigError;
use crate::generators::GenerationOptions;

const APP_DIR: &str = "passgen";
const CONFIG_FILE: &str = "config.json";

/// Defaults for the command line, read from `config.json`. Every field is
/// optional in the file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub length: usize,
    pub lowercase: bool,
    pub uppercase: bool,
    pub digits: bool,
    pub symbols: bool,
    pub copy_to_clipboard: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            length: 12,
            lowercase: true,
            uppercase: true,
            digits: true,
            symbols: true,
            copy_to_clipboard: true,
        }
    }
}

impl Config {
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
    }

    /// Loads the config at `path`, or at the default location when `path`
    /// is `None`. Only a missing default file falls back to `Config::default()`.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::read(path),
            None => match Self::default_path() {
                Some(path) => match Self::read(&path) {
                    Err(ConfigError::Io { source, .. }) if source.kind() == ErrorKind::NotFound => {
                        log::debug!("no config at {}, using defaults", path.display());
                        Ok(Self::default())
                    }
                    result => result,
                },
                None => Ok(Self::default()),
            },
        }
    }

    fn read(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let config = serde_json::from_str(&contents).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })?;

        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    pub fn options(&self) -> GenerationOptions {
        GenerationOptions {
            lowercase: self.lowercase,
            uppercase: self.uppercase,
            digits: self.digits,
            symbols: self.symbols,
        }
    }
}
