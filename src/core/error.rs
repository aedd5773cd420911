use thiserror::Error;

#[derive(Error, Debug)]
pub enum CaseyError {
    #[error("Invalid employee record {id}: {reason}")]
    InvalidRecord { id: String, reason: String },

    #[error("Roster error: {0}")]
    RosterError(String),

    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CaseyError>;
