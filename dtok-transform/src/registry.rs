//! Transform registry for discovery and selection
//!
//! Centralized registry for all available transforms. Transforms are
//! registered and retrieved by name; chains reference registry names so any
//! conforming implementation can be swapped in.

use crate::error::TransformError;
use crate::transform::TokenTransform;
use std::collections::HashMap;

/// Registry of token transforms
///
/// # Examples
///
/// ```ignore
/// let mut registry = TransformRegistry::new();
/// registry.register(MyTransform);
///
/// let transform = registry.get("my-transform")?;
/// let token = transform.apply(token);
/// ```
pub struct TransformRegistry {
    transforms: HashMap<String, Box<dyn TokenTransform>>,
}

impl TransformRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        TransformRegistry {
            transforms: HashMap::new(),
        }
    }

    /// Register a transform
    ///
    /// If a transform with the same name already exists, it will be replaced.
    pub fn register<T: TokenTransform + 'static>(&mut self, transform: T) {
        self.transforms
            .insert(transform.name().to_string(), Box::new(transform));
    }

    /// Get a transform by name
    pub fn get(&self, name: &str) -> Result<&dyn TokenTransform, TransformError> {
        self.transforms
            .get(name)
            .map(|t| t.as_ref())
            .ok_or_else(|| TransformError::UnknownTransform(name.to_string()))
    }

    /// Check if a transform exists
    pub fn has(&self, name: &str) -> bool {
        self.transforms.contains_key(name)
    }

    /// List all available transform names (sorted)
    pub fn list_transforms(&self) -> Vec<String> {
        let mut names: Vec<_> = self.transforms.keys().cloned().collect();
        names.sort();
        names
    }

    /// Create a registry with the built-in transforms
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register(crate::transforms::kebab::KebabName);
        registry.register(crate::transforms::font_weight::FontWeightValue);
        registry.register(crate::transforms::size_px::SizePx);
        registry.register(crate::transforms::letter_spacing::LetterSpacingEm);

        registry
    }
}

impl Default for TransformRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flatten::FlatToken;

    struct TestTransform;
    impl TokenTransform for TestTransform {
        fn name(&self) -> &str {
            "test"
        }
        fn description(&self) -> &str {
            "Test transform"
        }
        fn apply(&self, token: FlatToken) -> FlatToken {
            token
        }
    }

    #[test]
    fn test_registry_creation() {
        let registry = TransformRegistry::new();
        assert_eq!(registry.transforms.len(), 0);
    }

    #[test]
    fn test_registry_register_and_get() {
        let mut registry = TransformRegistry::new();
        registry.register(TestTransform);

        assert!(registry.has("test"));
        assert_eq!(registry.get("test").unwrap().name(), "test");
    }

    #[test]
    fn test_registry_get_nonexistent() {
        let registry = TransformRegistry::new();
        match registry.get("nonexistent") {
            Err(TransformError::UnknownTransform(name)) => assert_eq!(name, "nonexistent"),
            other => panic!("unexpected result: {:?}", other.map(|t| t.name().to_string())),
        }
    }

    #[test]
    fn test_registry_list_is_sorted() {
        let registry = TransformRegistry::with_defaults();
        let names = registry.list_transforms();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
    }

    #[test]
    fn test_registry_with_defaults() {
        let registry = TransformRegistry::with_defaults();
        assert!(registry.has("name/kebab"));
        assert!(registry.has("value/font-weight"));
        assert!(registry.has("value/size-px"));
        assert!(registry.has("value/letter-spacing"));
    }

    #[test]
    fn test_registry_replace_transform() {
        let mut registry = TransformRegistry::new();
        registry.register(TestTransform);
        registry.register(TestTransform); // Replace

        assert_eq!(registry.list_transforms().len(), 1);
    }
}
