//! Kebab-case naming transform

use crate::flatten::FlatToken;
use crate::transform::TokenTransform;

/// `name/kebab`: derives the flat token name by kebab-casing every path
/// segment and joining with `-`. Only the name changes; the path is the
/// address downstream stages derive CSS variable names from.
pub struct KebabName;

impl TokenTransform for KebabName {
    fn name(&self) -> &str {
        "name/kebab"
    }

    fn description(&self) -> &str {
        "Kebab-case the token name from its path segments"
    }

    fn apply(&self, token: FlatToken) -> FlatToken {
        let name = token
            .path
            .iter()
            .map(|segment| to_kebab_case(segment))
            .collect::<Vec<_>>()
            .join("-");
        FlatToken { name, ..token }
    }
}

/// Convert camelCase or space-separated segments into kebab-case.
///
/// A `-` is inserted at every lower/digit to upper boundary, whitespace runs
/// collapse to a single `-`, and the result is lowercased.
pub fn to_kebab_case(segment: &str) -> String {
    let mut out = String::with_capacity(segment.len() + 4);
    let mut prev_lower_or_digit = false;
    let mut prev_dash = false;

    for ch in segment.chars() {
        if ch.is_whitespace() {
            if !prev_dash && !out.is_empty() {
                out.push('-');
                prev_dash = true;
            }
            prev_lower_or_digit = false;
            continue;
        }
        if ch.is_uppercase() {
            if prev_lower_or_digit && !prev_dash {
                out.push('-');
            }
            out.extend(ch.to_lowercase());
            prev_lower_or_digit = false;
        } else {
            out.push(ch);
            prev_lower_or_digit = ch.is_lowercase() || ch.is_ascii_digit();
        }
        prev_dash = false;
    }
    out
}
