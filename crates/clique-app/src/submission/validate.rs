//! Local validation run before anything is sent

use clique_core::{FieldKind, FieldValue, FormSchema, FormState, SubmissionResult, REASON_INVALID_NUMBER};

/// Check required fields, then number fields, in schema order.
///
/// Returns the first failure. Never modifies `state`.
pub fn validate(schema: &FormSchema, state: &FormState) -> Result<(), SubmissionResult> {
    for spec in schema.required_in_order() {
        let blank = state.get(&spec.key).map_or(true, FieldValue::is_blank);
        if blank {
            return Err(SubmissionResult::required(&spec.key));
        }
    }

    for spec in schema.fields().iter().filter(|f| f.kind == FieldKind::Number) {
        let text = state.text(&spec.key).trim();
        if !text.is_empty() && text.parse::<i64>().is_err() {
            return Err(SubmissionResult::validation(&spec.key, REASON_INVALID_NUMBER));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screens::ScreenKind;

    fn filled(screen: ScreenKind, values: &[(&str, &str)]) -> (FormSchema, FormState) {
        let schema = screen.schema().unwrap();
        let mut state = schema.initialize();
        for (key, value) in values {
            let value = match schema.field(key).unwrap().kind {
                FieldKind::Number => FieldValue::Number(value.to_string()),
                _ => FieldValue::Text(value.to_string()),
            };
            state = state.update(key, value).unwrap();
        }
        (schema, state)
    }

    #[test]
    fn test_first_blank_required_field_in_schema_order() {
        let (schema, state) = filled(ScreenKind::ClubSignup, &[("name", "Chess")]);
        assert_eq!(
            validate(&schema, &state),
            Err(SubmissionResult::required("contact_email"))
        );
    }

    #[test]
    fn test_whitespace_only_is_blank() {
        let (schema, state) = filled(ScreenKind::Login, &[("email", "   "), ("password", "x")]);
        assert_eq!(validate(&schema, &state), Err(SubmissionResult::required("email")));
    }

    #[test]
    fn test_create_post_missing_title() {
        let (schema, state) = filled(ScreenKind::CreatePost, &[("club_name", "Chess Club")]);
        assert_eq!(validate(&schema, &state), Err(SubmissionResult::required("title")));
    }

    #[test]
    fn test_invalid_number() {
        let (schema, state) = filled(
            ScreenKind::Signup,
            &[
                ("email", "a@rpi.edu"),
                ("password", "pw"),
                ("rcs_id", "smithj"),
                ("graduation_year", "twenty"),
            ],
        );
        assert_eq!(
            validate(&schema, &state),
            Err(SubmissionResult::validation("graduation_year", "invalid number"))
        );
    }

    #[test]
    fn test_blank_optional_number_is_accepted() {
        let (schema, state) = filled(
            ScreenKind::Signup,
            &[
                ("email", "a@rpi.edu"),
                ("password", "pw"),
                ("rcs_id", "smithj"),
                ("graduation_year", ""),
            ],
        );
        assert_eq!(validate(&schema, &state), Ok(()));
    }

    #[test]
    fn test_validation_does_not_touch_state() {
        let (schema, state) = filled(ScreenKind::Login, &[("email", " a@b.com ")]);
        let before = state.clone();
        let _ = validate(&schema, &state);
        assert_eq!(state, before);
    }
}
