//! Stylesheet generation for the dtok pipeline
//!
//! This crate turns transformed token sequences into the generated
//! stylesheet and ties the whole build together:
//!
//! - [`extract`]: pure filters picking the `text` and color-scale
//!   namespaces out of a flat token sequence.
//! - [`emit`]: the CSS custom-property emitter - `:root` block of
//!   mobile-resolved variables plus a desktop media-query override block.
//! - [`pipeline`]: `build_stylesheet`, the one-shot orchestration from
//!   parsed document to output text.
//!
//! This is a pure lib: warnings are returned as data, never printed, and
//! the caller decides where the output text goes.

pub mod emit;
pub mod error;
pub mod extract;
pub mod pipeline;

pub use emit::{CollisionPolicy, EmitOptions, Stylesheet};
pub use error::BuildError;
pub use pipeline::{build_stylesheet, BuildOptions};
