use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, WatchError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path:?}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config {path:?}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("Invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Error)]
pub enum WatchError {
    #[error("Data path does not exist: {0:?}")]
    MissingDataPath(PathBuf),

    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Anything typed at a prompt that is not an offered option.
    #[error("Not a valid option")]
    InvalidSelection { input: String },

    #[error("No {what} found in {scope}")]
    EmptyScope { what: &'static str, scope: String },

    #[error("Input closed")]
    InputClosed,

    #[error("Failed to launch {program}")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl WatchError {
    /// Exit status for errors the user can cause; `None` for unexpected failures.
    pub fn expected_status(&self) -> Option<u8> {
        match self {
            WatchError::MissingDataPath(_) | WatchError::Config(_) => Some(2),
            WatchError::InvalidSelection { .. } | WatchError::EmptyScope { .. } => Some(1),
            WatchError::InputClosed => Some(130),
            WatchError::Launch { .. } | WatchError::Io(_) => None,
        }
    }
}
