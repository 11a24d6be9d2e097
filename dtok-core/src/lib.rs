//! Core data model and set resolution for the dtok token pipeline.
//!
//! This crate owns everything up to (and excluding) the transform chain:
//!
//! - [`document`]: the parsed token document - a tree of [`TokenNode`]s with
//!   leaf/branch shape decided once, at parse time.
//! - [`loader`]: reading a token document from disk or from a string.
//! - [`corrections`]: the font-weight type repair applied before resolution.
//! - [`resolve`]: prefix resolution over the declared set order and the
//!   order-sensitive deep merge of the selected sets.
//!
//! This is a pure lib: it never prints, never touches the environment, and
//! every failure surfaces as a typed error for the caller to report.

pub mod corrections;
pub mod document;
pub mod error;
pub mod loader;
pub mod resolve;

pub use document::{TokenDocument, TokenMetadata, TokenNode, TokenValue};
pub use error::{ConfigError, LoaderError};
pub use loader::DocumentLoader;
