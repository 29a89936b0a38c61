use std::path::PathBuf;

use thiserror::Error;

use crate::password::{ MAX_LENGTH, MIN_LENGTH };

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("At least one character type must be selected")]
    InvalidOptions,

    #[error("Password length must be between {min} and {max}, got {input:?}")]
    InvalidLength {
        input: String,
        min: usize,
        max: usize,
    },
}

impl GeneratorError {
    pub fn invalid_length(input: impl Into<String>) -> Self {
        GeneratorError::InvalidLength {
            input: input.into(),
            min: MIN_LENGTH,
            max: MAX_LENGTH,
        }
    }
}

#[derive(Error, Debug)]
pub enum ClipboardError {
    #[error("No clipboard is available on this system")]
    Unavailable,

    #[error("Could not write to clipboard: {0}")]
    Write(String),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Could not read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
