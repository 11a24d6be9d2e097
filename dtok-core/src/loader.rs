//! Document loading utilities
//!
//! `DocumentLoader` reads token source text from a file or a string and
//! parses it into a [`TokenDocument`]. The read is a single, synchronous,
//! all-or-nothing operation: any IO or parse failure aborts the pipeline.
//!
//! # Example
//!
//! ```rust,ignore
//! use dtok_core::DocumentLoader;
//!
//! let doc = DocumentLoader::from_path("tokens.json")?.document()?;
//! ```

use crate::document::TokenDocument;
use crate::error::LoaderError;
use std::fs;
use std::path::Path;

/// Loads token documents from files or strings.
pub struct DocumentLoader {
    source: String,
}

impl DocumentLoader {
    /// Load source text from a file path.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, LoaderError> {
        let source = fs::read_to_string(path)?;
        Ok(DocumentLoader { source })
    }

    /// Load from an in-memory string (used heavily by tests).
    pub fn from_string<S: Into<String>>(source: S) -> Self {
        DocumentLoader {
            source: source.into(),
        }
    }

    /// Parse the source into a [`TokenDocument`].
    pub fn document(&self) -> Result<TokenDocument, LoaderError> {
        let root: serde_json::Value = serde_json::from_str(&self.source)?;
        Ok(TokenDocument::from_value(root)?)
    }

    /// The raw source text.
    pub fn source(&self) -> &str {
        &self.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;

    const MINIMAL: &str = r#"{
        "$metadata": { "tokenSetOrder": ["core"] },
        "core": { "text": { "fontSize": { "md": { "value": "16", "type": "fontSizes" } } } }
    }"#;

    #[test]
    fn test_from_string_parses() {
        let doc = DocumentLoader::from_string(MINIMAL).document().unwrap();
        assert_eq!(doc.metadata.token_set_order, vec!["core"]);
        assert!(doc.set("core").is_some());
    }

    #[test]
    fn test_from_path_nonexistent() {
        let result = DocumentLoader::from_path("nonexistent.json");
        assert!(matches!(result, Err(LoaderError::IoError(_))));
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        let result = DocumentLoader::from_string("{ not json").document();
        assert!(matches!(result, Err(LoaderError::ParseError(_))));
    }

    #[test]
    fn test_missing_order_surfaces_config_error() {
        let result = DocumentLoader::from_string(r#"{ "core": {} }"#).document();
        match result {
            Err(LoaderError::ConfigError(err)) => assert_eq!(err, ConfigError::MissingSetOrder),
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
