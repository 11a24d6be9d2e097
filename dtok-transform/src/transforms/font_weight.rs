//! Font-weight keyword normalization

use crate::flatten::FlatToken;
use crate::transform::TokenTransform;

/// `value/font-weight`: maps the design tool's weight keyword names
/// (`Light`, `Regular`, `Semi Bold`, ...) to numeric CSS font weights.
/// Matching is case-insensitive and ignores spaces/dashes; values that are
/// already numeric or unrecognized pass through unchanged.
pub struct FontWeightValue;

impl TokenTransform for FontWeightValue {
    fn name(&self) -> &str {
        "value/font-weight"
    }

    fn description(&self) -> &str {
        "Map font weight keywords to numeric CSS weights"
    }

    fn apply(&self, token: FlatToken) -> FlatToken {
        if token.token_type != "fontWeight" {
            return token;
        }
        match keyword_to_weight(&token.value) {
            Some(weight) => FlatToken {
                value: weight.to_string(),
                ..token
            },
            None => token,
        }
    }
}

fn keyword_to_weight(value: &str) -> Option<u16> {
    let normalized: String = value
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect::<String>()
        .to_lowercase();

    let weight = match normalized.as_str() {
        "thin" | "hairline" => 100,
        "extralight" | "ultralight" => 200,
        "light" => 300,
        "regular" | "normal" => 400,
        "medium" => 500,
        "semibold" | "demibold" => 600,
        "bold" => 700,
        "extrabold" | "ultrabold" => 800,
        "black" | "heavy" => 900,
        _ => return None,
    };
    Some(weight)
}
