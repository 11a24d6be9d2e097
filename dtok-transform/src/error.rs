//! Error types for transform execution

use std::fmt;

/// Errors raised while resolving or running a transform chain
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransformError {
    /// A chain referenced a transform name not present in the registry
    UnknownTransform(String),
}

impl fmt::Display for TransformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransformError::UnknownTransform(name) => {
                write!(f, "Unknown transform \"{}\"", name)
            }
        }
    }
}

impl std::error::Error for TransformError {}
