//! Keystroke-to-value editing for form fields
//!
//! Every accepted keystroke produces the field's complete new raw value.
//! Nothing is trimmed or coerced here; malformed input is left for
//! validation at submit time.

use clique_core::{FieldDescriptor, FieldKind, FieldValue};

use crate::input_key::InputKey;

/// Compute the value after `key` and hand it to `on_change`.
///
/// Returns `true` if the key edited the field.
pub fn apply_edit<F>(descriptor: &FieldDescriptor, key: &InputKey, on_change: F) -> bool
where
    F: FnOnce(&str, FieldValue),
{
    match edited_value(descriptor, key) {
        Some(value) => {
            on_change(&descriptor.key, value);
            true
        }
        None => false,
    }
}

fn edited_value(descriptor: &FieldDescriptor, key: &InputKey) -> Option<FieldValue> {
    match (&descriptor.value, key) {
        (FieldValue::Bool(current), InputKey::Char(' ')) => Some(FieldValue::Bool(!current)),
        (FieldValue::Bool(_), _) => None,

        (value, InputKey::Char(c)) => {
            let mut text = value.as_text().unwrap_or_default().to_string();
            text.push(*c);
            Some(rewrap(descriptor.kind, text))
        }
        (value, InputKey::Backspace) => {
            let mut text = value.as_text().unwrap_or_default().to_string();
            text.pop()?;
            Some(rewrap(descriptor.kind, text))
        }
        (value, InputKey::CharCtrl('u')) => {
            if value.as_text().unwrap_or_default().is_empty() {
                None
            } else {
                Some(rewrap(descriptor.kind, String::new()))
            }
        }
        _ => None,
    }
}

fn rewrap(kind: FieldKind, text: String) -> FieldValue {
    match kind {
        FieldKind::Number => FieldValue::Number(text),
        _ => FieldValue::Text(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clique_core::FieldSpec;

    fn edit(descriptor: &FieldDescriptor, key: InputKey) -> Option<(String, FieldValue)> {
        let mut emitted = None;
        apply_edit(descriptor, &key, |k, v| emitted = Some((k.to_string(), v)));
        emitted
    }

    #[test]
    fn test_char_appends_raw() {
        let d = FieldSpec::text("title", "Title").describe(FieldValue::Text("Hi ".into()));
        assert_eq!(
            edit(&d, InputKey::Char(' ')),
            Some(("title".to_string(), FieldValue::Text("Hi  ".into())))
        );
    }

    #[test]
    fn test_backspace_removes_last_char() {
        let d = FieldSpec::text("email", "Email").describe(FieldValue::Text("ab".into()));
        assert_eq!(
            edit(&d, InputKey::Backspace),
            Some(("email".to_string(), FieldValue::Text("a".into())))
        );

        let empty = FieldSpec::text("email", "Email").describe(FieldValue::Text(String::new()));
        assert_eq!(edit(&empty, InputKey::Backspace), None);
    }

    #[test]
    fn test_number_accepts_any_text() {
        let d = FieldSpec::number("graduation_year", "Year").describe(FieldValue::Number("202".into()));
        assert_eq!(
            edit(&d, InputKey::Char('x')),
            Some((
                "graduation_year".to_string(),
                FieldValue::Number("202x".into())
            ))
        );
    }

    #[test]
    fn test_space_toggles_bool() {
        let d = FieldSpec::toggle("is_active", "Active").describe(FieldValue::Bool(false));
        assert_eq!(
            edit(&d, InputKey::Char(' ')),
            Some(("is_active".to_string(), FieldValue::Bool(true)))
        );
        assert_eq!(edit(&d, InputKey::Char('y')), None);
    }

    #[test]
    fn test_ctrl_u_clears() {
        let d = FieldSpec::text("name", "Name").describe(FieldValue::Text("Chess".into()));
        assert_eq!(
            edit(&d, InputKey::CharCtrl('u')),
            Some(("name".to_string(), FieldValue::Text(String::new())))
        );
    }

    #[test]
    fn test_navigation_keys_do_not_edit() {
        let d = FieldSpec::text("name", "Name").describe(FieldValue::Text("Chess".into()));
        assert_eq!(edit(&d, InputKey::Tab), None);
        assert_eq!(edit(&d, InputKey::Enter), None);
    }
}
