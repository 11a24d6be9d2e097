//! End-to-end stylesheet builds against an in-memory document
//!
//! These cover the full pass: parse, correct, resolve both branches,
//! transform, emit. The expected stylesheet is asserted byte-for-byte.

use dtok_build::pipeline::{build_stylesheet, BuildOptions};
use dtok_build::Stylesheet;
use dtok_core::document::TokenDocument;
use dtok_core::loader::DocumentLoader;
use dtok_transform::registry::TransformRegistry;

const FIXTURE: &str = r##"{
    "$metadata": {
        "tokenSetOrder": [
            "core",
            "s-typography/Base",
            "s-responsive/Mobile",
            "s-responsive/Desktop"
        ]
    },
    "core": {
        "options": {
            "Color": {
                "Scale": {
                    "0": { "value": "#ffffff", "type": "color" },
                    "25": { "value": "#fafafa", "type": "color" },
                    "100": { "value": "#f0f0f0", "type": "color" },
                    "1000": { "value": "#000000", "type": "color" }
                }
            }
        }
    },
    "s-typography/Base": {
        "text": {
            "fontFamily": { "body": { "value": "Inter", "type": "fontFamilies" } },
            "fontWeight": { "bold": { "value": "Bold", "type": "text" } }
        }
    },
    "s-responsive/Mobile": {
        "text": {
            "fontSize": {
                "md": { "value": 16, "type": "fontSizes" },
                "xl": { "value": 20, "type": "fontSizes" }
            },
            "lineHeight": { "md": { "value": 1.5, "type": "lineHeights" } },
            "letterSpacing": { "tight": { "value": "-1.5%", "type": "letterSpacing" } }
        }
    },
    "s-responsive/Desktop": {
        "text": {
            "fontSize": { "md": { "value": 18, "type": "fontSizes" } },
            "lineHeight": { "md": { "value": 1.6, "type": "lineHeights" } }
        }
    }
}"##;

fn build(json: &str) -> Stylesheet {
    let document: TokenDocument = DocumentLoader::from_string(json)
        .document()
        .expect("fixture to parse");
    build_stylesheet(
        &document,
        &TransformRegistry::with_defaults(),
        &BuildOptions::default(),
    )
    .expect("build to succeed")
}

#[test]
fn full_build_output() {
    let expected = "\
/**
 * Do not edit directly, this file was auto-generated.
 */

:root {
  --text-font-family-body: Inter;
  --text-font-size-md: 16px;
  --text-font-size-xl: 20px;
  --text-font-weight-bold: 700;
  --text-letter-spacing-tight: -0.015em;
  --text-line-height-md: 1.5;
  --scale-0: #ffffff;
  --scale-25: #fafafa;
  --scale-100: #f0f0f0;
  --scale-1000: #000000;
}

@media only screen and (min-width: 1025px) {
  :root {
    --text-font-size-md: 18px;
    --text-font-size-xl: 20px;
    --text-line-height-md: 1.6;
  }
}
";
    let sheet = build(FIXTURE);
    assert_eq!(sheet.css, expected);
    assert!(sheet.warnings.is_empty());
}

#[test]
fn build_is_deterministic() {
    let first = build(FIXTURE);
    let second = build(FIXTURE);
    assert_eq!(first.css, second.css);
}

#[test]
fn every_override_variable_has_a_base_declaration() {
    let sheet = build(FIXTURE);
    let (root, overrides) = sheet.css.split_once("@media").expect("override block");
    for line in overrides.lines() {
        let Some(declaration) = line.trim().strip_prefix("--") else {
            continue;
        };
        let name = declaration.split(':').next().unwrap();
        assert!(
            root.contains(&format!("--{}:", name)),
            "override --{} missing from :root",
            name
        );
    }
}

#[test]
fn override_block_omitted_without_responsive_keys() {
    let json = r#"{
        "$metadata": { "tokenSetOrder": ["s-responsive/Mobile", "s-responsive/Desktop"] },
        "s-responsive/Mobile": {
            "text": { "fontFamily": { "body": { "value": "Inter", "type": "fontFamilies" } } }
        },
        "s-responsive/Desktop": {
            "text": { "fontFamily": { "body": { "value": "Inter", "type": "fontFamilies" } } }
        }
    }"#;
    let sheet = build(json);
    assert!(!sheet.css.contains("@media"));
    assert!(sheet.css.ends_with("}\n"));
}

#[test]
fn sets_past_the_mobile_marker_do_not_leak_into_mobile_values() {
    // desktop set overrides fontSize.md, but the :root block must carry the
    // mobile-resolved value
    let sheet = build(FIXTURE);
    let root = sheet.css.split("@media").next().unwrap();
    assert!(root.contains("--text-font-size-md: 16px;"));
    assert!(!root.contains("--text-font-size-md: 18px;"));
}
