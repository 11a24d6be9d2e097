//! Pixel unit transform for dimension tokens

use crate::flatten::FlatToken;
use crate::transform::TokenTransform;

/// Types whose bare numeric values are pixel dimensions.
const PX_TYPES: &[&str] = &[
    "fontSizes",
    "sizing",
    "spacing",
    "borderRadius",
    "borderWidth",
    "dimension",
];

/// `value/size-px`: appends `px` to bare numeric values of dimension-ish
/// token types. Values that already carry a unit (`1rem`, `50%`) and
/// unitless types (line heights) pass through untouched.
pub struct SizePx;

impl TokenTransform for SizePx {
    fn name(&self) -> &str {
        "value/size-px"
    }

    fn description(&self) -> &str {
        "Append px to bare numeric dimension values"
    }

    fn apply(&self, token: FlatToken) -> FlatToken {
        if !PX_TYPES.contains(&token.token_type.as_str()) {
            return token;
        }
        if token.value.parse::<f64>().is_ok() {
            return FlatToken {
                value: format!("{}px", token.value),
                ..token
            };
        }
        token
    }
}
