//! Error types for platform model operations.

use std::path::PathBuf;

use crate::platform::PlatformType;

/// Errors that can occur while resolving or loading a platform.
#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    /// TOML deserialization error.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// TOML serialization error.
    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    /// I/O error reading a description file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Description file not found.
    #[error("platform file not found: {}", path.display())]
    NotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// A platform name matched neither a built-in configuration nor a
    /// loadable description file on any candidate path.
    #[error("unrecognized platform: '{name}'")]
    UnknownPlatform {
        /// The name that failed to resolve.
        name: String,
    },

    /// The platform type has no built-in configuration to apply.
    #[error("platform type '{0}' has no built-in configuration")]
    NotAPreset(PlatformType),

    /// A description file parsed, but its values violate the data model.
    #[error("invalid platform description: {detail}")]
    Validation {
        /// Description of the offending field.
        detail: String,
    },
}

/// Result type for platform operations.
pub type Result<T> = std::result::Result<T, PlatformError>;
