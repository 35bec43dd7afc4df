use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// The value mapping held by a running simulation: field id to current value.
pub type FieldValues = HashMap<String, FieldValue>;

/// Declared type of a simulation input. Decides how raw entries are coerced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    /// Entries are coerced to `f64` before they are stored
    Number,
    /// Entries are stored verbatim
    Text,
}

impl FieldType {
    /// Lowercase name used in listings and JSON output
    pub const fn name(self) -> &'static str {
        match self {
            Self::Number => "number",
            Self::Text => "text",
        }
    }

    /// Coerce a raw entry into a value of this type. Never fails.
    pub fn coerce(self, raw: &str) -> FieldValue {
        match self {
            Self::Number => FieldValue::Number(coerce_number(raw)),
            Self::Text => FieldValue::Text(raw.to_string()),
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Coerce raw text to a number.
///
/// Surrounding whitespace is ignored, a blank entry becomes `0` and anything
/// that does not parse as a float becomes `NaN`.
pub fn coerce_number(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

/// A value stored for one input field
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum FieldValue {
    /// Numeric value
    Number(f64),
    /// Text value
    Text(String),
}

impl FieldValue {
    /// Numeric content, if this is a number
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(_) => None,
        }
    }

    /// Text content, if this is text
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Number(_) => None,
        }
    }

    /// The field type this value satisfies
    pub const fn field_type(&self) -> FieldType {
        match self {
            Self::Number(_) => FieldType::Number,
            Self::Text(_) => FieldType::Text,
        }
    }

    /// Whether this value satisfies `field_type`
    pub fn satisfies(&self, field_type: FieldType) -> bool {
        self.field_type() == field_type
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

// -------------------------------------------------------------------------------------------------
// Conversions between `FieldValue` and `serde_json::Value`, used by the JSON output of the CLI.
// Non-finite numbers have no JSON representation and map to `null`.
// -------------------------------------------------------------------------------------------------

impl From<&FieldValue> for serde_json::Value {
    fn from(value: &FieldValue) -> Self {
        match value {
            FieldValue::Number(n) => serde_json::Number::from_f64(*n)
                .map_or(Self::Null, Self::Number),
            FieldValue::Text(s) => Self::String(s.clone()),
        }
    }
}

impl TryFrom<&serde_json::Value> for FieldValue {
    type Error = anyhow::Error;

    fn try_from(value: &serde_json::Value) -> Result<Self, Self::Error> {
        match value {
            serde_json::Value::Number(n) => n
                .as_f64()
                .map(Self::Number)
                .ok_or_else(|| anyhow!("Unsupported number value: {n}")),
            serde_json::Value::String(s) => Ok(Self::Text(s.clone())),
            other => Err(anyhow!(
                "Field values must be numbers or strings, got {other}"
            )),
        }
    }
}

/// Declaration of one simulation input
#[derive(Debug, Clone, Serialize)]
pub struct InputField {
    /// Key of the field; also the lookup key seen by the compute function
    pub id: &'static str,
    /// Display text
    pub label: &'static str,
    /// Declared type
    #[serde(rename = "type")]
    pub field_type: FieldType,
    /// Value seeded before any user edit
    pub default_value: FieldValue,
}

impl InputField {
    /// A numeric field
    pub const fn number(id: &'static str, label: &'static str, default_value: f64) -> Self {
        Self {
            id,
            label,
            field_type: FieldType::Number,
            default_value: FieldValue::Number(default_value),
        }
    }

    /// A free-text field
    pub fn text(id: &'static str, label: &'static str, default_value: &str) -> Self {
        Self {
            id,
            label,
            field_type: FieldType::Text,
            default_value: FieldValue::Text(default_value.to_string()),
        }
    }

    /// Coerce a raw entry per this field's declared type
    pub fn coerce(&self, raw: &str) -> FieldValue {
        self.field_type.coerce(raw)
    }

    /// Whether the default value satisfies the declared type
    pub fn has_valid_default(&self) -> bool {
        self.default_value.satisfies(self.field_type)
    }
}
