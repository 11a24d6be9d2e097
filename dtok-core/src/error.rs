//! Error types for document loading and set resolution

use std::fmt;

/// Configuration/data errors raised while interpreting a token document.
///
/// Every variant is fatal: the pipeline is a build-time correctness gate and
/// has no notion of partial or best-effort resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// `$metadata.tokenSetOrder` is absent, not a list of strings, or empty
    MissingSetOrder,
    /// A marker set name was not found in the declared set order
    SetNotInOrder(String),
    /// A set named by the order is absent from the document or is not an object
    UndefinedSet(String),
    /// A node in the document does not match the expected token shape
    MalformedNode { path: String, reason: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::MissingSetOrder => {
                write!(f, "Token set order metadata is missing or empty")
            }
            ConfigError::SetNotInOrder(name) => {
                write!(f, "Missing token set \"{}\" in tokenSetOrder", name)
            }
            ConfigError::UndefinedSet(name) => {
                write!(f, "Token set \"{}\" is not defined", name)
            }
            ConfigError::MalformedNode { path, reason } => {
                write!(f, "Malformed token node at \"{}\": {}", path, reason)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Errors that can occur while loading a token document
#[derive(Debug, Clone)]
pub enum LoaderError {
    /// IO error when reading the document file
    IoError(String),
    /// The document is not valid JSON
    ParseError(String),
    /// The document parsed but violates the token document shape
    ConfigError(ConfigError),
}

impl fmt::Display for LoaderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoaderError::IoError(msg) => write!(f, "IO error: {}", msg),
            LoaderError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            LoaderError::ConfigError(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for LoaderError {}

impl From<std::io::Error> for LoaderError {
    fn from(err: std::io::Error) -> Self {
        LoaderError::IoError(err.to_string())
    }
}

impl From<serde_json::Error> for LoaderError {
    fn from(err: serde_json::Error) -> Self {
        LoaderError::ParseError(err.to_string())
    }
}

impl From<ConfigError> for LoaderError {
    fn from(err: ConfigError) -> Self {
        LoaderError::ConfigError(err)
    }
}
