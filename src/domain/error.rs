use std::io;
use std::path::PathBuf;

use thiserror::Error;

use super::reservation::ValidationErrors;

/// Library-wide error type for nexus operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure outside the record store.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Settings file parsed but holds an unusable value.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// Option identifier is invalid.
    #[error("Invalid option identifier '{0}': must be alphanumeric with hyphens or underscores")]
    InvalidOptionId(String),

    /// Category name is not one of color, wheels, interior.
    #[error("Invalid category '{0}': must be one of color, wheels, interior")]
    InvalidCategory(String),

    /// A malformed option was handed to the configuration store.
    #[error("Option contract violated: {0}")]
    ContractViolation(String),

    /// Requested option id does not exist in the catalog.
    #[error("Unknown {category} option '{id}'. Available: {available}")]
    UnknownOption { category: String, id: String, available: String },

    /// Embedded catalog could not be loaded.
    #[error("Invalid catalog for '{category}': {reason}")]
    InvalidCatalog { category: String, reason: String },

    /// Reservation input failed one or more field rules.
    #[error("Reservation rejected: {0}")]
    Validation(#[from] ValidationErrors),

    /// Reservation could not be written to (or read from) the record store.
    #[error(transparent)]
    Persistence(#[from] PersistenceError),

    /// Interactive prompt failed.
    #[error("Prompt failed: {0}")]
    Prompt(String),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::InvalidConfig(message.into())
    }

    /// Process exit status the CLI reports for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Validation(_) => 2,
            _ => 1,
        }
    }
}

/// Failure of the durable record store.
///
/// A submission that hits any of these is not considered made; nothing was written.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("Failed to access record store at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to serialize reservations: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Record store at {path} is corrupt: {details}")]
    Corrupt { path: PathBuf, details: String },

    #[error("Storage quota exceeded: {needed} bytes needed, quota is {quota} bytes")]
    QuotaExceeded { needed: u64, quota: u64 },

    /// A stored id is already the largest representable one.
    #[error("Stored reservation id {latest} leaves no room for a newer id")]
    IdExhausted { latest: i64 },
}

impl PersistenceError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        PersistenceError::Io { path: path.into(), source }
    }
}
