//! Ordered form schema with a required-field policy.

use std::collections::HashSet;

use super::field::{FieldDescriptor, FieldSpec};
use super::state::FormState;
use crate::error::{Error, Result};

/// An ordered sequence of field specs plus the keys that must be non-blank
/// on submit. Order is render order and validation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSchema {
    fields: Vec<FieldSpec>,
    required: Vec<String>,
}

impl FormSchema {
    /// Build a schema, rejecting duplicate keys and required keys that are
    /// not part of the field list.
    pub fn new<I, S>(fields: Vec<FieldSpec>, required: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        for field in &fields {
            if !seen.insert(field.key.as_str()) {
                return Err(Error::duplicate_field(&field.key));
            }
        }

        let required: Vec<String> = required.into_iter().map(Into::into).collect();
        if let Some(missing) = required.iter().find(|k| !seen.contains(k.as_str())) {
            return Err(Error::required_field_missing(missing));
        }

        Ok(Self { fields, required })
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    pub fn field(&self, key: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.key == key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.field(key).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.key.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn is_required(&self, key: &str) -> bool {
        self.required.iter().any(|k| k == key)
    }

    /// Required keys in schema (render) order.
    pub fn required_in_order(&self) -> impl Iterator<Item = &FieldSpec> {
        self.fields.iter().filter(|f| self.is_required(&f.key))
    }

    /// Fresh state with every field at its kind's default.
    pub fn initialize(&self) -> FormState {
        FormState::initialize(self)
    }

    /// Build descriptors from the current state. Pure: no mutation, no I/O.
    pub fn descriptors(&self, state: &FormState) -> Vec<FieldDescriptor> {
        self.fields
            .iter()
            .map(|spec| {
                let value = state
                    .get(&spec.key)
                    .cloned()
                    .unwrap_or_else(|| spec.kind.default_value());
                spec.describe(value)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::FieldValue;

    fn login_schema() -> FormSchema {
        FormSchema::new(
            vec![
                FieldSpec::text("email", "Email address"),
                FieldSpec::text("password", "Password").secret(),
            ],
            ["email", "password"],
        )
        .unwrap()
    }

    #[test]
    fn test_duplicate_keys_rejected() {
        let err = FormSchema::new(
            vec![FieldSpec::text("email", "A"), FieldSpec::text("email", "B")],
            Vec::<String>::new(),
        )
        .unwrap_err();
        assert!(matches!(err, Error::DuplicateField { ref key } if key == "email"));
    }

    #[test]
    fn test_required_key_must_exist() {
        let err = FormSchema::new(vec![FieldSpec::text("title", "Title")], ["club_name"])
            .unwrap_err();
        assert!(matches!(err, Error::RequiredFieldMissing { ref key } if key == "club_name"));
        assert!(err.is_configuration());
    }

    #[test]
    fn test_required_in_schema_order() {
        let schema = FormSchema::new(
            vec![
                FieldSpec::text("club_name", "Club"),
                FieldSpec::text("title", "Title"),
            ],
            ["title", "club_name"],
        )
        .unwrap();
        let keys: Vec<_> = schema.required_in_order().map(|f| f.key.as_str()).collect();
        assert_eq!(keys, vec!["club_name", "title"]);
    }

    #[test]
    fn test_descriptors_reflect_state() {
        let schema = login_schema();
        let state = schema
            .initialize()
            .update("email", FieldValue::Text("a@b.com".into()))
            .unwrap();

        let descriptors = schema.descriptors(&state);
        assert_eq!(descriptors.len(), 2);
        assert_eq!(descriptors[0].value.as_text(), Some("a@b.com"));
        assert_eq!(descriptors[1].value.as_text(), Some(""));
        assert!(descriptors[1].secret);
    }

    #[test]
    fn test_descriptors_do_not_mutate_state() {
        let schema = login_schema();
        let state = schema.initialize();
        let before = state.clone();
        let _ = schema.descriptors(&state);
        assert_eq!(state, before);
    }
}
