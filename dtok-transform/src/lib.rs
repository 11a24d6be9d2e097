//! Token transform registry and tree flattening
//!
//! This crate sits between set resolution (dtok-core) and CSS emission
//! (dtok-build). A resolved token tree is flattened into [`FlatToken`]
//! records - one per leaf, with the full segmented path preserved - and then
//! run through a named chain of [`TokenTransform`]s looked up in a
//! [`TransformRegistry`].
//!
//! The rest of the pipeline depends only on the registry interface, never on
//! a concrete transform: any conforming implementation (including a stub in
//! tests) can be substituted. The contract a transform must uphold:
//!
//! - deterministic: same input record, same output record
//! - total: every input record yields exactly one output record
//! - path-preserving: the segmented path is never rewritten, only the
//!   derived name and the value are - downstream address derivation depends
//!   on the original path shape
//!
//! The file structure:
//! .
//! ├── error.rs
//! ├── flatten.rs          # tree -> FlatToken records + chain execution
//! ├── registry.rs         # TransformRegistry for discovery and selection
//! ├── standard.rs         # the default chain and shared registry
//! ├── transform.rs        # TokenTransform trait definition
//! ├── transforms
//! │   ├── font_weight.rs
//! │   ├── kebab.rs
//! │   ├── letter_spacing.rs
//! │   └── size_px.rs
//! └── lib.rs

pub mod error;
pub mod flatten;
pub mod registry;
pub mod standard;
pub mod transform;
pub mod transforms;

pub use error::TransformError;
pub use flatten::{flatten, FlatToken};
pub use registry::TransformRegistry;
pub use transform::TokenTransform;
