//! Form state container: one value per schema key.

use std::collections::BTreeMap;

use super::field::FieldValue;
use super::schema::FormSchema;
use crate::error::{Error, Result};

/// Current values for every field of one mounted form.
///
/// Updates return a new state and touch exactly one key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    values: BTreeMap<String, FieldValue>,
    defaults: BTreeMap<String, FieldValue>,
}

impl FormState {
    /// One entry per schema key, each at its kind's default.
    pub fn initialize(schema: &FormSchema) -> Self {
        let defaults: BTreeMap<String, FieldValue> = schema
            .fields()
            .iter()
            .map(|f| (f.key.clone(), f.kind.default_value()))
            .collect();
        Self {
            values: defaults.clone(),
            defaults,
        }
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.values.get(key)
    }

    /// Text of a text/number field, empty for unknown keys and booleans.
    pub fn text(&self, key: &str) -> &str {
        self.get(key).and_then(FieldValue::as_text).unwrap_or("")
    }

    /// Return a copy with `key` set to `value`.
    ///
    /// Unknown keys and values of the wrong kind are wiring errors.
    pub fn update(&self, key: &str, value: FieldValue) -> Result<Self> {
        let current = self
            .values
            .get(key)
            .ok_or_else(|| Error::unknown_field(key))?;
        if current.kind() != value.kind() {
            return Err(Error::field_kind_mismatch(key, current.kind().name()));
        }

        let mut next = self.clone();
        next.values.insert(key.to_string(), value);
        Ok(next)
    }

    /// The defaults this state was initialized with.
    pub fn reset(&self) -> Self {
        Self {
            values: self.defaults.clone(),
            defaults: self.defaults.clone(),
        }
    }

    pub fn is_pristine(&self) -> bool {
        self.values == self.defaults
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::FieldSpec;
    use std::collections::BTreeSet;

    fn signup_schema() -> FormSchema {
        FormSchema::new(
            vec![
                FieldSpec::text("firstname", "First Name"),
                FieldSpec::text("email", "Email address"),
                FieldSpec::number("graduation_year", "Graduation Year"),
                FieldSpec::toggle("is_admin", "Admin"),
            ],
            ["email"],
        )
        .unwrap()
    }

    #[test]
    fn test_initialize_key_set_matches_schema() {
        let schema = signup_schema();
        let state = schema.initialize();
        let state_keys: BTreeSet<_> = state.keys().collect();
        let schema_keys: BTreeSet<_> = schema.keys().collect();
        assert_eq!(state_keys, schema_keys);
    }

    #[test]
    fn test_initialize_defaults() {
        let state = signup_schema().initialize();
        assert_eq!(state.text("firstname"), "");
        assert_eq!(state.get("graduation_year"), Some(&FieldValue::Number("0".into())));
        assert_eq!(state.get("is_admin"), Some(&FieldValue::Bool(false)));
        assert!(state.is_pristine());
    }

    #[test]
    fn test_update_changes_only_one_key() {
        let state = signup_schema().initialize();
        let next = state
            .update("email", FieldValue::Text("a@b.com".into()))
            .unwrap();

        assert_eq!(next.text("email"), "a@b.com");
        for (key, value) in state.iter().filter(|(k, _)| *k != "email") {
            assert_eq!(next.get(key), Some(value));
        }
        // Input state is untouched
        assert_eq!(state.text("email"), "");
    }

    #[test]
    fn test_update_is_idempotent() {
        let state = signup_schema().initialize();
        let value = FieldValue::Text("Ada".into());
        let once = state.update("firstname", value.clone()).unwrap();
        let twice = once.update("firstname", value).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_update_keeps_raw_value() {
        let state = signup_schema().initialize();
        let next = state
            .update("firstname", FieldValue::Text("  Ada  ".into()))
            .unwrap();
        assert_eq!(next.text("firstname"), "  Ada  ");
    }

    #[test]
    fn test_update_unknown_key_rejected() {
        let state = signup_schema().initialize();
        let err = state
            .update("nickname", FieldValue::Text("x".into()))
            .unwrap_err();
        assert!(matches!(err, Error::UnknownField { .. }));
    }

    #[test]
    fn test_update_wrong_kind_rejected() {
        let state = signup_schema().initialize();
        let err = state
            .update("is_admin", FieldValue::Text("yes".into()))
            .unwrap_err();
        assert!(matches!(err, Error::FieldKindMismatch { expected: "boolean", .. }));
    }

    #[test]
    fn test_reset_returns_defaults() {
        let schema = signup_schema();
        let state = schema
            .initialize()
            .update("email", FieldValue::Text("a@b.com".into()))
            .unwrap()
            .update("is_admin", FieldValue::Bool(true))
            .unwrap();
        assert!(!state.is_pristine());
        assert_eq!(state.reset(), schema.initialize());
    }
}
