//! CSS custom-property emitter
//!
//! Produces the generated stylesheet text: a header comment, a `:root`
//! block with the mobile-resolved text variables (sorted lexicographically)
//! and the color-scale variables (sorted numerically), then a desktop
//! media-query block that redefines only the `fontSize.*` / `lineHeight.*`
//! variables. Output is byte-for-byte deterministic.

use crate::error::BuildError;
use crate::extract::{scale_token_map, text_token_map};
use dtok_transform::flatten::FlatToken;
use dtok_transform::transforms::kebab::to_kebab_case;

/// What to do when two distinct token keys derive the same CSS variable name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionPolicy {
    /// Record a warning; the later declaration wins in the cascade
    Warn,
    /// Abort the build
    Error,
}

/// Emitter knobs.
#[derive(Debug, Clone)]
pub struct EmitOptions {
    /// Breakpoint for the desktop override block, in px
    pub desktop_min_width: u32,
    pub collisions: CollisionPolicy,
}

impl Default for EmitOptions {
    fn default() -> Self {
        EmitOptions {
            desktop_min_width: 1025,
            collisions: CollisionPolicy::Warn,
        }
    }
}

/// A generated stylesheet plus any non-fatal findings.
#[derive(Debug, Clone)]
pub struct Stylesheet {
    pub css: String,
    pub warnings: Vec<String>,
}

/// Derive the CSS variable name for a text-namespace token: drop the
/// namespace segment, kebab-case the rest, join with `-`.
pub fn css_var_name(token: &FlatToken) -> String {
    let segments: Vec<String> = token.path[1..].iter().map(|s| to_kebab_case(s)).collect();
    format!("--text-{}", segments.join("-"))
}

/// Emit the stylesheet from the mobile and desktop token sequences.
pub fn emit_stylesheet(
    mobile: &[FlatToken],
    desktop: &[FlatToken],
    options: &EmitOptions,
) -> Result<Stylesheet, BuildError> {
    let mobile_map = text_token_map(mobile);
    let desktop_map = text_token_map(desktop);
    let scale_map = scale_token_map(mobile);

    let mut warnings = Vec::new();
    let mut seen: Vec<(String, String)> = Vec::new();

    let mut lines = vec![
        "/**".to_string(),
        " * Do not edit directly, this file was auto-generated.".to_string(),
        " */".to_string(),
        String::new(),
        ":root {".to_string(),
    ];

    // text map keys iterate lexicographically
    for (key, token) in &mobile_map {
        let variable = css_var_name(token);
        let first = seen
            .iter()
            .find(|(name, _)| *name == variable)
            .map(|(_, owner)| owner.clone());
        match first {
            Some(first) => match options.collisions {
                CollisionPolicy::Error => {
                    return Err(BuildError::VariableCollision {
                        variable,
                        first,
                        second: key.clone(),
                    })
                }
                CollisionPolicy::Warn => warnings.push(format!(
                    "CSS variable collision: \"{}\" is derived from both \"{}\" and \"{}\"; the later declaration wins",
                    variable, first, key
                )),
            },
            None => seen.push((variable.clone(), key.clone())),
        }
        lines.push(format!("  {}: {};", variable, token.value));
    }

    let mut scale_keys: Vec<&String> = scale_map.keys().collect();
    scale_keys.sort_by_key(|key| (key.parse::<i64>().unwrap_or(i64::MAX), key.as_str()));
    for key in scale_keys {
        lines.push(format!("  --scale-{}: {};", key, scale_map[key.as_str()].value));
    }

    lines.push("}".to_string());

    let override_lines: Vec<String> = mobile_map
        .iter()
        .filter(|(key, _)| key.starts_with("fontSize.") || key.starts_with("lineHeight."))
        .filter_map(|(key, _)| {
            // keys with no desktop counterpart are skipped, not an error
            let token = desktop_map.get(key.as_str())?;
            Some(format!("    {}: {};", css_var_name(token), token.value))
        })
        .collect();

    if !override_lines.is_empty() {
        lines.push(String::new());
        lines.push(format!(
            "@media only screen and (min-width: {}px) {{",
            options.desktop_min_width
        ));
        lines.push("  :root {".to_string());
        lines.extend(override_lines);
        lines.push("  }".to_string());
        lines.push("}".to_string());
    }

    lines.push(String::new());
    Ok(Stylesheet {
        css: lines.join("\n"),
        warnings,
    })
}
