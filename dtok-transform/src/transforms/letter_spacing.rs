//! Letter-spacing percentage conversion

use crate::flatten::FlatToken;
use crate::transform::TokenTransform;

/// `value/letter-spacing`: converts percentage letter-spacing values from
/// the design tool (`-1.5%`) into em units (`-0.015em`), matching how the
/// upstream exports expect tracking to be applied in CSS.
pub struct LetterSpacingEm;

impl TokenTransform for LetterSpacingEm {
    fn name(&self) -> &str {
        "value/letter-spacing"
    }

    fn description(&self) -> &str {
        "Convert percentage letter spacing to em"
    }

    fn apply(&self, token: FlatToken) -> FlatToken {
        if token.token_type != "letterSpacing" {
            return token;
        }
        let Some(percent) = token.value.strip_suffix('%') else {
            return token;
        };
        let Ok(number) = percent.trim().parse::<f64>() else {
            return token;
        };
        FlatToken {
            value: format!("{}em", number / 100.0),
            ..token
        }
    }
}
