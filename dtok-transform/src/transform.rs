//! TokenTransform trait definition
//!
//! A transform is a deterministic rewrite of a single flat token record.
//! Naming transforms rewrite the derived `name`; value transforms rewrite
//! `value` based on the type tag. The segmented `path` is off limits - CSS
//! variable names are derived from it after the chain has run.

use crate::flatten::FlatToken;

/// A single, pure rewrite step over flat token records.
///
/// # Examples
///
/// ```ignore
/// struct Uppercase;
///
/// impl TokenTransform for Uppercase {
///     fn name(&self) -> &str {
///         "value/uppercase"
///     }
///
///     fn apply(&self, token: FlatToken) -> FlatToken {
///         FlatToken { value: token.value.to_uppercase(), ..token }
///     }
/// }
/// ```
pub trait TokenTransform: Send + Sync {
    /// The registry name of this transform (e.g. "name/kebab")
    fn name(&self) -> &str;

    /// Optional description, shown by `dtok --list-transforms`
    fn description(&self) -> &str {
        ""
    }

    /// Rewrite one record. Must be total and deterministic, and must leave
    /// `path` untouched.
    fn apply(&self, token: FlatToken) -> FlatToken;
}
