//! Error types and result aliases.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialize error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error in {context}: {error}")]
    Toml {
        error: toml::de::Error,
        context: String,
    },

    #[error("Missing required field '{field}' in project descriptor")]
    MissingField { field: &'static str },

    #[error("Workspace root must be an absolute path: {path}")]
    RelativeWorkspaceRoot { path: String },

    #[error("Invalid project type: {value}. Supported types: cli, lib, vsc")]
    InvalidProjectType { value: String },
}

impl Error {
    /// Returns `true` for errors caused by an invalid project descriptor.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Error::MissingField { .. }
                | Error::RelativeWorkspaceRoot { .. }
                | Error::InvalidProjectType { .. }
        )
    }
}

impl From<toml::de::Error> for Error {
    fn from(error: toml::de::Error) -> Self {
        Error::Toml {
            error,
            context: "nxgen.toml".to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
