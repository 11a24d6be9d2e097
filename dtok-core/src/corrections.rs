//! Data repairs applied before set resolution
//!
//! Token exports from the upstream design tool carry a known defect: leaves
//! nested under a `fontWeight` group are tagged `type: "text"` instead of
//! `type: "fontWeight"`. The fix here is a pure transform returning a
//! corrected copy - the ancestor flag is threaded through the recursion as an
//! accumulator, so the same input document can be reused across calls.

use crate::document::{TokenDocument, TokenNode, TokenValue};

/// Correct mistagged font-weight leaves across a whole document.
pub fn fix_document(document: &TokenDocument) -> TokenDocument {
    let sets = document
        .sets
        .iter()
        .map(|(name, node)| {
            (
                name.clone(),
                fix_node(node, name == "fontWeight"),
            )
        })
        .collect();
    TokenDocument {
        sets,
        metadata: document.metadata.clone(),
        themes: document.themes.clone(),
    }
}

/// Correct a single tree. Idempotent: corrected leaves no longer match the
/// `"text"` predicate, so a second pass is a no-op.
pub fn fix_font_weight_types(node: &TokenNode) -> TokenNode {
    fix_node(node, false)
}

fn fix_node(node: &TokenNode, in_font_weight: bool) -> TokenNode {
    match node {
        TokenNode::Leaf(value) => {
            if in_font_weight && value.token_type == "text" {
                TokenNode::Leaf(TokenValue {
                    token_type: "fontWeight".to_string(),
                    ..value.clone()
                })
            } else {
                TokenNode::Leaf(value.clone())
            }
        }
        TokenNode::Branch(children) => TokenNode::Branch(
            children
                .iter()
                .map(|(key, child)| {
                    let nested = in_font_weight || key == "fontWeight";
                    (key.clone(), fix_node(child, nested))
                })
                .collect(),
        ),
    }
}
