//! Pre-built transform chains and registry
//!
//! The build uses one fixed chain: the kebab naming transform first,
//! followed by the value transforms that normalize units the way the
//! upstream token exports expect.

use crate::registry::TransformRegistry;
use once_cell::sync::Lazy;

/// The chain applied to every resolved set during a build.
pub const DEFAULT_CHAIN: &[&str] = &[
    "name/kebab",
    "value/font-weight",
    "value/size-px",
    "value/letter-spacing",
];

/// Shared default registry (the built-in transforms are stateless).
pub static DEFAULT_REGISTRY: Lazy<TransformRegistry> = Lazy::new(TransformRegistry::with_defaults);

/// The default chain as owned names, ready for configuration overrides.
pub fn default_chain() -> Vec<String> {
    DEFAULT_CHAIN.iter().map(|s| s.to_string()).collect()
}
