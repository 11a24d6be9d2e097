//! Set resolution and order-sensitive deep merge
//!
//! A target configuration (mobile, desktop) resolves to the inclusive prefix
//! of the declared set order up to its marker set. The selected sets are then
//! deep-merged left to right: where both sides are branches the merge
//! recurses, anywhere else the incoming side replaces the accumulator
//! wholesale. Sets past the marker are never consulted.

use crate::document::{TokenDocument, TokenNode};
use crate::error::ConfigError;
use std::collections::BTreeMap;

/// Every set name up to and including `marker`, in declaration order.
///
/// This is a prefix slice over the order list, not a dependency graph.
pub fn set_names_up_to<'a>(
    marker: &str,
    order: &'a [String],
) -> Result<&'a [String], ConfigError> {
    let index = order
        .iter()
        .position(|name| name == marker)
        .ok_or_else(|| ConfigError::SetNotInOrder(marker.to_string()))?;
    Ok(&order[..=index])
}

/// Deep-merge the named top-level sets of `document`, in sequence.
///
/// Each name must resolve to a branch at the top of the document; a missing
/// set, or a set that is a bare leaf, is a configuration error.
pub fn merge_sets(document: &TokenDocument, names: &[String]) -> Result<TokenNode, ConfigError> {
    let mut merged = BTreeMap::new();
    for name in names {
        match document.set(name) {
            Some(TokenNode::Branch(children)) => merge_branch(&mut merged, children),
            Some(TokenNode::Leaf(_)) | None => {
                return Err(ConfigError::UndefinedSet(name.clone()))
            }
        }
    }
    Ok(TokenNode::Branch(merged))
}

/// Merge rule: branch-into-branch recurses; every other shape pairing is a
/// wholesale replacement by the incoming side.
fn merge_branch(target: &mut BTreeMap<String, TokenNode>, source: &BTreeMap<String, TokenNode>) {
    for (key, incoming) in source {
        match (target.get_mut(key), incoming) {
            (Some(TokenNode::Branch(existing)), TokenNode::Branch(children)) => {
                merge_branch(existing, children)
            }
            _ => {
                target.insert(key.clone(), incoming.clone());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::DocumentLoader;

    fn order(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn document(json: &str) -> TokenDocument {
        DocumentLoader::from_string(json)
            .document()
            .expect("fixture to parse")
    }

    #[test]
    fn test_prefix_resolution_is_inclusive() {
        let order = order(&["S1", "S2", "S3", "S4"]);
        let names = set_names_up_to("S3", &order).unwrap();
        assert_eq!(names, &["S1", "S2", "S3"]);
    }

    #[test]
    fn test_marker_absent_from_order() {
        let order = order(&["S1", "S2"]);
        let result = set_names_up_to("S9", &order);
        assert_eq!(result.unwrap_err(), ConfigError::SetNotInOrder("S9".to_string()));
    }

    #[test]
    fn test_first_set_resolves_to_itself() {
        let order = order(&["S1", "S2"]);
        assert_eq!(set_names_up_to("S1", &order).unwrap(), &["S1"]);
    }

    #[test]
    fn test_later_set_wins_on_leaf_collision() {
        let doc = document(
            r#"{
                "$metadata": { "tokenSetOrder": ["A", "B"] },
                "A": { "x": { "y": { "value": "1", "type": "other" } } },
                "B": { "x": { "y": { "value": "2", "type": "other" } } }
            }"#,
        );

        let merged = merge_sets(&doc, &order(&["A", "B"])).unwrap();
        let y = merged.children().unwrap()["x"].children().unwrap()["y"].clone();
        match y {
            TokenNode::Leaf(value) => assert_eq!(value.value, "2"),
            TokenNode::Branch(_) => panic!("expected a leaf"),
        }

        // reversed order flips the winner
        let merged = merge_sets(&doc, &order(&["B", "A"])).unwrap();
        let y = merged.children().unwrap()["x"].children().unwrap()["y"].clone();
        match y {
            TokenNode::Leaf(value) => assert_eq!(value.value, "1"),
            TokenNode::Branch(_) => panic!("expected a leaf"),
        }
    }

    #[test]
    fn test_shape_mismatch_replaces_wholesale() {
        // A's "x" is a leaf, B's "x" is a branch: no partial merge, B wins
        let doc = document(
            r#"{
                "$metadata": { "tokenSetOrder": ["A", "B"] },
                "A": { "x": { "y": { "value": "1", "type": "color" } } },
                "B": { "x": { "z": { "value": "2", "type": "color" } } }
            }"#,
        );

        let merged = merge_sets(&doc, &order(&["A", "B"])).unwrap();
        let x = merged.children().unwrap()["x"].children().unwrap();
        assert!(x.contains_key("y"), "disjoint branch keys are both kept");
        assert!(x.contains_key("z"));

        let doc = document(
            r#"{
                "$metadata": { "tokenSetOrder": ["A", "B"] },
                "A": { "x": { "value": "1", "type": "color" } },
                "B": { "x": { "z": { "value": "2", "type": "color" } } }
            }"#,
        );
        let merged = merge_sets(&doc, &order(&["A", "B"])).unwrap();
        let x = merged.children().unwrap()["x"].clone();
        let children = x.children().expect("leaf replaced by branch");
        assert_eq!(children.len(), 1);
        assert!(children.contains_key("z"));
    }

    #[test]
    fn test_keys_present_on_one_side_carry_through() {
        let doc = document(
            r#"{
                "$metadata": { "tokenSetOrder": ["A", "B"] },
                "A": { "only": { "value": "1", "type": "color" } },
                "B": { "other": { "value": "2", "type": "color" } }
            }"#,
        );
        let merged = merge_sets(&doc, &order(&["A", "B"])).unwrap();
        let children = merged.children().unwrap();
        assert!(children.contains_key("only"));
        assert!(children.contains_key("other"));
    }

    #[test]
    fn test_undefined_set_is_fatal() {
        let doc = document(r#"{ "$metadata": { "tokenSetOrder": ["A"] }, "A": {} }"#);
        let result = merge_sets(&doc, &order(&["A", "missing"]));
        assert_eq!(
            result.unwrap_err(),
            ConfigError::UndefinedSet("missing".to_string())
        );
    }

    #[test]
    fn test_sets_past_the_marker_have_no_effect() {
        let doc = document(
            r#"{
                "$metadata": { "tokenSetOrder": ["S1", "S2"] },
                "S1": { "x": { "value": "base", "type": "other" } },
                "S2": { "x": { "value": "override", "type": "other" } }
            }"#,
        );
        let names = set_names_up_to("S1", &doc.metadata.token_set_order).unwrap();
        let merged = merge_sets(&doc, names).unwrap();
        match merged.children().unwrap()["x"].clone() {
            TokenNode::Leaf(value) => assert_eq!(value.value, "base"),
            TokenNode::Branch(_) => panic!("expected a leaf"),
        }
    }
}
