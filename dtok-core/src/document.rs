//! Token document model
//!
//! A token document is a tree keyed by arbitrary string segments. Whether a
//! node is a leaf or a branch is decided once, at parse time: a JSON object
//! carrying a `value` key is a leaf [`TokenValue`], anything else is a branch
//! of nested nodes. Downstream stages never shape-sniff again.
//!
//! The document's top-level branches are the *token sets* - the unit of
//! layering. Two reserved top-level keys are split off during parsing:
//! `$metadata` (carrying the set order) and `$themes` (parsed tolerantly,
//! unused by this pipeline).

use crate::error::ConfigError;
use serde_json::Value;
use std::collections::BTreeMap;

/// A leaf token: a literal value plus its type tag.
///
/// Values are kept in their literal string form - a JSON number `16` becomes
/// `"16"` so that unit transforms can decide its rendering. Keys other than
/// `value` and `type` (e.g. `description`) are carried in `extra` untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenValue {
    pub value: String,
    pub token_type: String,
    pub extra: BTreeMap<String, Value>,
}

impl TokenValue {
    pub fn new(value: impl Into<String>, token_type: impl Into<String>) -> Self {
        TokenValue {
            value: value.into(),
            token_type: token_type.into(),
            extra: BTreeMap::new(),
        }
    }
}

/// A node in the token tree: either a leaf value or a branch of children.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenNode {
    Leaf(TokenValue),
    Branch(BTreeMap<String, TokenNode>),
}

impl TokenNode {
    /// Build a branch from an iterator of named children (test-friendly).
    pub fn branch<I, K>(children: I) -> Self
    where
        I: IntoIterator<Item = (K, TokenNode)>,
        K: Into<String>,
    {
        TokenNode::Branch(children.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    pub fn leaf(value: impl Into<String>, token_type: impl Into<String>) -> Self {
        TokenNode::Leaf(TokenValue::new(value, token_type))
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, TokenNode::Leaf(_))
    }

    /// Children of a branch node; `None` for leaves.
    pub fn children(&self) -> Option<&BTreeMap<String, TokenNode>> {
        match self {
            TokenNode::Branch(children) => Some(children),
            TokenNode::Leaf(_) => None,
        }
    }
}

/// Document metadata: the declared set order.
///
/// The order defines a single global precedence - for any two sets A before B,
/// B's leaves win over A's on key collision during merge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenMetadata {
    pub token_set_order: Vec<String>,
}

/// A parsed token document: named top-level sets plus metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenDocument {
    pub sets: BTreeMap<String, TokenNode>,
    pub metadata: TokenMetadata,
    /// Raw `$themes` payload, if present. Parsed tolerantly; unused here.
    pub themes: Option<Value>,
}

impl TokenDocument {
    /// Parse a document from its JSON representation.
    ///
    /// Fails fast: a missing/empty `tokenSetOrder`, a non-object root, or a
    /// token entry that is neither a leaf nor a branch all abort the parse.
    pub fn from_value(root: Value) -> Result<Self, ConfigError> {
        let Value::Object(entries) = root else {
            return Err(ConfigError::MalformedNode {
                path: String::new(),
                reason: "document root must be an object".to_string(),
            });
        };

        let mut sets = BTreeMap::new();
        let mut metadata = None;
        let mut themes = None;

        for (key, value) in entries {
            match key.as_str() {
                "$metadata" => metadata = Some(parse_metadata(&value)?),
                "$themes" => themes = Some(value),
                _ => {
                    let node = parse_node(&value, &key)?;
                    sets.insert(key, node);
                }
            }
        }

        let metadata = metadata.ok_or(ConfigError::MissingSetOrder)?;
        Ok(TokenDocument {
            sets,
            metadata,
            themes,
        })
    }

    /// Look up a top-level set by name.
    pub fn set(&self, name: &str) -> Option<&TokenNode> {
        self.sets.get(name)
    }
}

fn parse_metadata(value: &Value) -> Result<TokenMetadata, ConfigError> {
    let order = value
        .get("tokenSetOrder")
        .and_then(Value::as_array)
        .ok_or(ConfigError::MissingSetOrder)?;

    let names: Vec<String> = order
        .iter()
        .map(|entry| entry.as_str().map(str::to_string))
        .collect::<Option<_>>()
        .ok_or(ConfigError::MissingSetOrder)?;

    if names.is_empty() {
        return Err(ConfigError::MissingSetOrder);
    }
    Ok(TokenMetadata {
        token_set_order: names,
    })
}

/// Parse a single node. The leaf predicate is structural: an object with a
/// `value` key is a leaf regardless of what other keys co-occur.
fn parse_node(value: &Value, path: &str) -> Result<TokenNode, ConfigError> {
    let Value::Object(entries) = value else {
        return Err(ConfigError::MalformedNode {
            path: path.to_string(),
            reason: "expected an object".to_string(),
        });
    };

    if entries.contains_key("value") {
        return parse_leaf(entries, path);
    }

    let mut children = BTreeMap::new();
    for (key, child) in entries {
        let child_path = format!("{}.{}", path, key);
        children.insert(key.clone(), parse_node(child, &child_path)?);
    }
    Ok(TokenNode::Branch(children))
}

fn parse_leaf(
    entries: &serde_json::Map<String, Value>,
    path: &str,
) -> Result<TokenNode, ConfigError> {
    let value = scalar_to_string(&entries["value"]).ok_or_else(|| ConfigError::MalformedNode {
        path: path.to_string(),
        reason: "token value must be a string, number or boolean".to_string(),
    })?;

    let token_type = match entries.get("type") {
        Some(Value::String(s)) => s.clone(),
        Some(_) => {
            return Err(ConfigError::MalformedNode {
                path: path.to_string(),
                reason: "token type must be a string".to_string(),
            })
        }
        None => String::new(),
    };

    let extra = entries
        .iter()
        .filter(|(key, _)| key.as_str() != "value" && key.as_str() != "type")
        .map(|(key, val)| (key.clone(), val.clone()))
        .collect();

    Ok(TokenNode::Leaf(TokenValue {
        value,
        token_type,
        extra,
    }))
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
