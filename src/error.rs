//! Error types for ccsync
//!
//! Uses `thiserror` for library errors. Every fatal condition falls into one of
//! three kinds (see [`ErrorKind`]): configuration, probing, or a failed action.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for ccsync operations
pub type CcsyncResult<T> = Result<T, CcsyncError>;

/// Coarse classification of a fatal error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed or incomplete manifest / configuration. Raised before any mutating call.
    Config,
    /// A peer could not be queried.
    Probe,
    /// A compile, install, instantiate or upgrade call failed.
    Action,
}

/// Main error type for ccsync operations
#[derive(Error, Debug)]
pub enum CcsyncError {
    /// Neither the dedicated manifest nor the package.json fallback exists
    #[error("could not find configuration file {primary} nor {fallback}")]
    ManifestNotFound { primary: PathBuf, fallback: PathBuf },

    /// Manifest or configuration file could not be parsed
    #[error("invalid configuration in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// A required field is absent
    #[error("missing required field '{field}' in {file}")]
    MissingField { field: String, file: PathBuf },

    /// Language tag outside the supported set
    #[error("unknown chaincode language '{language}' for {chaincode}")]
    UnknownLanguage { chaincode: String, language: String },

    /// The same chaincode name is declared with two different languages
    #[error("chaincode '{chaincode}' is declared as both {first} and {second}")]
    LanguageConflict {
        chaincode: String,
        first: String,
        second: String,
    },

    /// Tool setting rejected (e.g. zero concurrency)
    #[error("invalid setting '{key}': {message}")]
    InvalidSetting { key: String, message: String },

    /// Peer unreachable or inventory query failed
    #[error("failed to query {listing} chaincodes on {peer} (channel {channel}): {message}")]
    Probe {
        peer: String,
        channel: String,
        listing: String,
        message: String,
    },

    /// A mutating action failed
    #[error("{action} failed for {subject}: {message}")]
    Action {
        action: String,
        subject: String,
        message: String,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CcsyncError {
    /// Classify the error into the reconciliation taxonomy
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::ManifestNotFound { .. }
            | Self::InvalidConfig { .. }
            | Self::MissingField { .. }
            | Self::UnknownLanguage { .. }
            | Self::LanguageConflict { .. }
            | Self::InvalidSetting { .. } => ErrorKind::Config,
            Self::Probe { .. } => ErrorKind::Probe,
            Self::Action { .. } | Self::Io(_) => ErrorKind::Action,
        }
    }

    /// Stable machine-readable code used in JSON output
    pub fn code(&self) -> &'static str {
        match self.kind() {
            ErrorKind::Config => "config_error",
            ErrorKind::Probe => "probe_error",
            ErrorKind::Action => "action_error",
        }
    }

    pub(crate) fn action(
        action: impl Into<String>,
        subject: impl Into<String>,
        message: impl ToString,
    ) -> Self {
        Self::Action {
            action: action.into(),
            subject: subject.into(),
            message: message.to_string(),
        }
    }
}
