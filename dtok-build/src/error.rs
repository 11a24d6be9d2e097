//! Error types for stylesheet builds

use dtok_core::error::ConfigError;
use dtok_transform::error::TransformError;
use std::fmt;

/// Errors raised while building a stylesheet.
///
/// Every variant is fatal; there is no degraded-output mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// Set resolution or document shape error
    Config(ConfigError),
    /// Transform chain error
    Transform(TransformError),
    /// Two distinct token keys derived the same CSS variable name
    VariableCollision {
        variable: String,
        first: String,
        second: String,
    },
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildError::Config(err) => write!(f, "{}", err),
            BuildError::Transform(err) => write!(f, "{}", err),
            BuildError::VariableCollision {
                variable,
                first,
                second,
            } => write!(
                f,
                "CSS variable collision: \"{}\" is derived from both \"{}\" and \"{}\"",
                variable, first, second
            ),
        }
    }
}

impl std::error::Error for BuildError {}

impl From<ConfigError> for BuildError {
    fn from(err: ConfigError) -> Self {
        BuildError::Config(err)
    }
}

impl From<TransformError> for BuildError {
    fn from(err: TransformError) -> Self {
        BuildError::Transform(err)
    }
}
