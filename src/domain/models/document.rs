//! The structured configuration document that env files are rendered from.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

/// A flat mapping from string keys to values, loaded once per run.
///
/// Keys that no template references may hold any JSON value. Keys a
/// template references must resolve to a [`ScalarValue`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfigDocument {
    fields: Map<String, Value>,
}

/// A scalar config value borrowed from a [`ConfigDocument`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScalarValue<'a> {
    /// A string, rendered verbatim
    String(&'a str),
    /// A JSON number, rendered in its canonical form (`27015`, `1.5`)
    Number(&'a Number),
    /// A boolean, rendered as `true` / `false`
    Bool(bool),
}

/// Outcome of looking a key up as a scalar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldLookup<'a> {
    Scalar(ScalarValue<'a>),
    Missing,
    /// Present, but `null`, an array or an object. Carries the JSON kind.
    NotScalar(&'static str),
}

impl ConfigDocument {
    /// Build a document from a parsed value whose top level must be a mapping.
    ///
    /// On failure returns the JSON kind that was found instead.
    pub fn from_value(value: Value) -> Result<Self, &'static str> {
        match value {
            Value::Object(fields) => Ok(fields.into()),
            other => Err(json_kind(&other)),
        }
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Look up `key` and classify it for rendering.
    pub fn lookup(&self, key: &str) -> FieldLookup<'_> {
        match self.fields.get(key) {
            None => FieldLookup::Missing,
            Some(Value::String(s)) => FieldLookup::Scalar(ScalarValue::String(s)),
            Some(Value::Number(n)) => FieldLookup::Scalar(ScalarValue::Number(n)),
            Some(Value::Bool(b)) => FieldLookup::Scalar(ScalarValue::Bool(*b)),
            Some(other) => FieldLookup::NotScalar(json_kind(other)),
        }
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl From<Map<String, Value>> for ConfigDocument {
    fn from(fields: Map<String, Value>) -> Self {
        Self { fields }
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for ConfigDocument {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl fmt::Display for ScalarValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => f.write_str(s),
            Self::Number(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}

/// Human-readable name of a JSON value's kind.
pub const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
