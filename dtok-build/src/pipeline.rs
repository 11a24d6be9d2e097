//! End-to-end build orchestration
//!
//! One synchronous pass: correct the document, resolve the mobile and
//! desktop branches independently, flatten each through the transform
//! chain, emit. The two branches share no mutable state and may run in
//! either order with identical results.

use crate::emit::{emit_stylesheet, EmitOptions, Stylesheet};
use crate::error::BuildError;
use dtok_core::corrections::fix_document;
use dtok_core::document::TokenDocument;
use dtok_core::resolve::{merge_sets, set_names_up_to};
use dtok_transform::flatten::{flatten_with, FlatToken};
use dtok_transform::registry::TransformRegistry;
use dtok_transform::standard::default_chain;

/// Options for a stylesheet build.
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Marker set for the mobile branch
    pub mobile_set: String,
    /// Marker set for the desktop branch
    pub desktop_set: String,
    /// Transform chain, applied in order to both branches
    pub transforms: Vec<String>,
    pub emit: EmitOptions,
}

impl Default for BuildOptions {
    fn default() -> Self {
        BuildOptions {
            mobile_set: "s-responsive/Mobile".to_string(),
            desktop_set: "s-responsive/Desktop".to_string(),
            transforms: default_chain(),
            emit: EmitOptions::default(),
        }
    }
}

/// Build the stylesheet for a parsed token document.
///
/// Fails on the first configuration error; both branches must resolve for
/// any output to be produced.
pub fn build_stylesheet(
    document: &TokenDocument,
    registry: &TransformRegistry,
    options: &BuildOptions,
) -> Result<Stylesheet, BuildError> {
    let document = fix_document(document);
    let order = &document.metadata.token_set_order;

    let mobile = resolve_branch(&document, &options.mobile_set, order, registry, options)?;
    let desktop = resolve_branch(&document, &options.desktop_set, order, registry, options)?;

    emit_stylesheet(&mobile, &desktop, &options.emit)
}

fn resolve_branch(
    document: &TokenDocument,
    marker: &str,
    order: &[String],
    registry: &TransformRegistry,
    options: &BuildOptions,
) -> Result<Vec<FlatToken>, BuildError> {
    let names = set_names_up_to(marker, order)?;
    let merged = merge_sets(document, names)?;
    Ok(flatten_with(&merged, registry, &options.transforms)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dtok_core::error::ConfigError;
    use dtok_core::loader::DocumentLoader;

    fn document(json: &str) -> TokenDocument {
        DocumentLoader::from_string(json)
            .document()
            .expect("fixture to parse")
    }

    #[test]
    fn test_missing_marker_aborts() {
        let doc = document(r#"{ "$metadata": { "tokenSetOrder": ["core"] }, "core": {} }"#);
        let result = build_stylesheet(
            &doc,
            &TransformRegistry::with_defaults(),
            &BuildOptions::default(),
        );
        assert_eq!(
            result.unwrap_err(),
            BuildError::Config(ConfigError::SetNotInOrder("s-responsive/Mobile".to_string()))
        );
    }

    #[test]
    fn test_unknown_transform_aborts() {
        let doc = document(
            r#"{
                "$metadata": { "tokenSetOrder": ["s-responsive/Mobile", "s-responsive/Desktop"] },
                "s-responsive/Mobile": {},
                "s-responsive/Desktop": {}
            }"#,
        );
        let options = BuildOptions {
            transforms: vec!["does/not-exist".to_string()],
            ..BuildOptions::default()
        };
        let result = build_stylesheet(&doc, &TransformRegistry::with_defaults(), &options);
        assert!(matches!(result, Err(BuildError::Transform(_))));
    }
}
