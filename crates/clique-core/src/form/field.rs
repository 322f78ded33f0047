//! Field specifications, values and rendered descriptors.

use serde::{Deserialize, Serialize};

/// Advisory keyboard/input hint for a field. Never gates validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyboardHint {
    #[default]
    Default,
    Email,
    Numeric,
    Url,
}

/// Value type a field stores in the form state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    Number,
    Bool,
}

impl FieldKind {
    /// Default value for a freshly mounted form.
    pub fn default_value(self) -> FieldValue {
        match self {
            FieldKind::Text => FieldValue::Text(String::new()),
            FieldKind::Number => FieldValue::Number("0".to_string()),
            FieldKind::Bool => FieldValue::Bool(false),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Number => "number",
            FieldKind::Bool => "boolean",
        }
    }
}

/// Current value of one field.
///
/// Numbers keep the raw text the user typed; parsing happens at submit time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum FieldValue {
    Text(String),
    Number(String),
    Bool(bool),
}

impl FieldValue {
    pub fn kind(&self) -> FieldKind {
        match self {
            FieldValue::Text(_) => FieldKind::Text,
            FieldValue::Number(_) => FieldKind::Number,
            FieldValue::Bool(_) => FieldKind::Bool,
        }
    }

    /// Raw text for text and number fields.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) | FieldValue::Number(s) => Some(s),
            FieldValue::Bool(_) => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FieldValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Whether the value counts as missing for a required-field check.
    ///
    /// Booleans are always present.
    pub fn is_blank(&self) -> bool {
        match self {
            FieldValue::Text(s) | FieldValue::Number(s) => s.trim().is_empty(),
            FieldValue::Bool(_) => false,
        }
    }

    /// Text shown by an input control.
    pub fn display(&self) -> String {
        match self {
            FieldValue::Text(s) | FieldValue::Number(s) => s.clone(),
            FieldValue::Bool(b) => b.to_string(),
        }
    }
}

/// Static description of one form input, owned by a [`super::FormSchema`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    /// Unique key within the schema (e.g., "email")
    pub key: String,
    /// Display label (e.g., "Email address")
    pub label: String,
    /// Placeholder shown while the value is empty
    pub placeholder: String,
    pub keyboard_hint: KeyboardHint,
    /// Obscured on screen; serialized as-is
    pub secret: bool,
    pub kind: FieldKind,
}

impl FieldSpec {
    pub fn new(key: impl Into<String>, label: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            placeholder: String::new(),
            keyboard_hint: KeyboardHint::Default,
            secret: false,
            kind,
        }
    }

    pub fn text(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(key, label, FieldKind::Text)
    }

    pub fn number(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(key, label, FieldKind::Number).hint(KeyboardHint::Numeric)
    }

    pub fn toggle(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(key, label, FieldKind::Bool)
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn hint(mut self, hint: KeyboardHint) -> Self {
        self.keyboard_hint = hint;
        self
    }

    pub fn secret(mut self) -> Self {
        self.secret = true;
        self
    }

    /// Snapshot this spec together with a current value.
    pub fn describe(&self, value: FieldValue) -> FieldDescriptor {
        FieldDescriptor {
            key: self.key.clone(),
            label: self.label.clone(),
            placeholder: self.placeholder.clone(),
            keyboard_hint: self.keyboard_hint,
            secret: self.secret,
            kind: self.kind,
            value,
        }
    }
}

/// A field spec paired with the value it had when the descriptor was built.
///
/// Descriptors are rebuilt from the form state on every render and never cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub key: String,
    pub label: String,
    pub placeholder: String,
    pub keyboard_hint: KeyboardHint,
    pub secret: bool,
    pub kind: FieldKind,
    pub value: FieldValue,
}
