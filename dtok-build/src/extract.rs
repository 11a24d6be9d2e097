//! Namespace extraction over flat token sequences
//!
//! Two pure filters: the `text` namespace (typography tokens) keyed by the
//! dotted remainder of the path, and the `options/Color/Scale` namespace
//! keyed by the scale step identifier. Last write wins on duplicate keys,
//! following sequence order.

use dtok_transform::flatten::FlatToken;
use std::collections::BTreeMap;

/// Tokens under the `text` namespace, keyed by `path[1..]` joined with `.`.
pub fn text_token_map(tokens: &[FlatToken]) -> BTreeMap<String, &FlatToken> {
    let mut map = BTreeMap::new();
    for token in tokens {
        if token.path.first().map(String::as_str) != Some("text") {
            continue;
        }
        let key = token.path[1..].join(".");
        map.insert(key, token);
    }
    map
}

/// Color-scale tokens (`options/Color/Scale/<step>`), keyed by the step
/// identifier (e.g. `"100"`).
pub fn scale_token_map(tokens: &[FlatToken]) -> BTreeMap<String, &FlatToken> {
    let mut map = BTreeMap::new();
    for token in tokens {
        let is_scale = token.path.len() >= 4
            && token.path[0] == "options"
            && token.path[1] == "Color"
            && token.path[2] == "Scale";
        if !is_scale {
            continue;
        }
        map.insert(token.path[3].clone(), token);
    }
    map
}
