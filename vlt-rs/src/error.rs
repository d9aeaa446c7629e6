//! Error types and exit codes for vlt.

use std::path::PathBuf;
use thiserror::Error;

/// Process exit codes.
pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL_ERROR: i32 = 1;
    pub const NOTE_NOT_FOUND: i32 = 2;
    pub const NOTE_ALREADY_EXISTS: i32 = 3;
    pub const PARTIAL_PROPAGATION: i32 = 4;
}

/// Main error type for vault operations.
#[derive(Error, Debug)]
pub enum VaultError {
    /// A title matched no document name and no alias. Carries the query verbatim.
    #[error("note not found: {0}")]
    NoteNotFound(String),

    #[error("note already exists: {0}")]
    NoteAlreadyExists(PathBuf),

    #[error("vault not found at: {0}")]
    VaultNotFound(PathBuf),

    #[error("invalid vault path: {0}")]
    InvalidVaultPath(PathBuf),

    #[error("vault not specified (use --vault, set VLT_VAULT, or set default_vault in the config)")]
    NoVaultSpecified,

    #[error("config error: {0}")]
    ConfigError(String),

    /// Link propagation stopped at a failed write. Files already rewritten stay rewritten.
    #[error("link update halted at {path} after updating {updated} file(s): {source}")]
    PropagationHalted {
        updated: usize,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid search query: {0}")]
    InvalidSearchQuery(String),

    #[error("invalid tag: {0:?}")]
    InvalidTag(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("glob pattern error: {0}")]
    GlobPattern(#[from] glob::PatternError),
}

impl VaultError {
    /// Returns the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            VaultError::NoteNotFound(_) => exit_code::NOTE_NOT_FOUND,
            VaultError::NoteAlreadyExists(_) => exit_code::NOTE_ALREADY_EXISTS,
            VaultError::PropagationHalted { .. } => exit_code::PARTIAL_PROPAGATION,
            _ => exit_code::GENERAL_ERROR,
        }
    }

    /// Number of documents already rewritten when propagation halted, if this is a partial failure.
    pub fn partial_count(&self) -> Option<usize> {
        match self {
            VaultError::PropagationHalted { updated, .. } => Some(*updated),
            _ => None,
        }
    }
}

/// Result type alias for vault operations.
pub type Result<T> = std::result::Result<T, VaultError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_echoes_query() {
        let err = VaultError::NoteNotFound("Some Title".to_string());
        assert_eq!(err.to_string(), "note not found: Some Title");
        assert_eq!(err.exit_code(), exit_code::NOTE_NOT_FOUND);
    }

    #[test]
    fn test_partial_propagation() {
        let err = VaultError::PropagationHalted {
            updated: 3,
            path: PathBuf::from("b.md"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.partial_count(), Some(3));
        assert_eq!(err.exit_code(), exit_code::PARTIAL_PROPAGATION);
        assert!(err.to_string().contains("after updating 3 file(s)"));
    }
}
