//! Flattening resolved token trees into transformed records
//!
//! Depth-first traversal over a resolved [`TokenNode`] tree producing one
//! [`FlatToken`] per leaf. Traversal order follows the tree's (sorted) key
//! order, so flattening the same tree always yields the same sequence.

use crate::error::TransformError;
use crate::registry::TransformRegistry;
use dtok_core::document::TokenNode;

/// A flattened token record: the leaf's full segmented address plus its
/// (possibly transformed) name and value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatToken {
    /// Original nesting as ordered path segments (e.g. `["text", "fontSize", "md"]`)
    pub path: Vec<String>,
    /// Derived flat name; seeded with the dotted path, rewritten by naming transforms
    pub name: String,
    pub value: String,
    pub token_type: String,
}

impl FlatToken {
    /// The dotted form of the path (e.g. `text.fontSize.md`).
    pub fn dotted_path(&self) -> String {
        self.path.join(".")
    }
}

/// Flatten a resolved tree into one record per leaf.
pub fn flatten(root: &TokenNode) -> Vec<FlatToken> {
    let mut tokens = Vec::new();
    let mut path = Vec::new();
    flatten_into(root, &mut path, &mut tokens);
    tokens
}

fn flatten_into(node: &TokenNode, path: &mut Vec<String>, out: &mut Vec<FlatToken>) {
    match node {
        TokenNode::Leaf(value) => out.push(FlatToken {
            path: path.clone(),
            name: path.join("."),
            value: value.value.clone(),
            token_type: value.token_type.clone(),
        }),
        TokenNode::Branch(children) => {
            for (key, child) in children {
                path.push(key.clone());
                flatten_into(child, path, out);
                path.pop();
            }
        }
    }
}

/// Flatten a tree and run every record through the named transform chain.
///
/// The chain is resolved against the registry up front, so an unknown name
/// fails before any record is touched.
pub fn flatten_with(
    root: &TokenNode,
    registry: &TransformRegistry,
    chain: &[String],
) -> Result<Vec<FlatToken>, TransformError> {
    let transforms = chain
        .iter()
        .map(|name| registry.get(name))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(flatten(root)
        .into_iter()
        .map(|token| {
            transforms
                .iter()
                .fold(token, |token, transform| transform.apply(token))
        })
        .collect())
}
