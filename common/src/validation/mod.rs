//! Client-side validation of a student draft.
//!
//! Every field is checked independently and all violations are reported
//! together, so the form can highlight each offending input at once. The
//! server applies none of these rules; they exist only to keep obviously
//! malformed records out of the collection.

use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

use crate::model::student::{Field, StudentDraft};

/// Field-level error messages keyed by field, in form order.
pub type FieldErrors = BTreeMap<Field, String>;

/// `local@domain.tld`: a single `@`, no whitespace, a dot inside the domain.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles")
});

const MIN_NAME_LEN: usize = 2;
const PHONE_DIGITS: usize = 10;

/// Validates `draft`, returning one message per invalid field.
///
/// The returned map is empty iff the draft is valid. A "required" message
/// takes precedence over the shape message of the same field.
pub fn validate(draft: &StudentDraft) -> FieldErrors {
    let mut errors = FieldErrors::new();

    let name = draft.name.trim();
    if name.is_empty() {
        errors.insert(Field::Name, "Name is required".to_string());
    } else if name.chars().count() < MIN_NAME_LEN {
        errors.insert(
            Field::Name,
            format!("Name must be at least {} characters", MIN_NAME_LEN),
        );
    }

    let email = draft.email.trim();
    if email.is_empty() {
        errors.insert(Field::Email, "Email is required".to_string());
    } else if !EMAIL_PATTERN.is_match(email) {
        errors.insert(Field::Email, "Email is invalid".to_string());
    }

    if draft.course.trim().is_empty() {
        errors.insert(Field::Course, "Course is required".to_string());
    }

    if draft.phone.trim().is_empty() {
        errors.insert(Field::Phone, "Phone is required".to_string());
    } else if phone_digits(&draft.phone).len() != PHONE_DIGITS {
        errors.insert(
            Field::Phone,
            format!("Phone must be {} digits", PHONE_DIGITS),
        );
    }

    errors
}

/// `true` when [`validate`] reports no errors.
pub fn is_valid(draft: &StudentDraft) -> bool {
    validate(draft).is_empty()
}

/// Strips everything but ASCII digits, so `(555) 123-4567` becomes `5551234567`.
pub fn phone_digits(phone: &str) -> String {
    phone.chars().filter(char::is_ascii_digit).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, email: &str, course: &str, phone: &str) -> StudentDraft {
        StudentDraft {
            name: name.to_string(),
            email: email.to_string(),
            course: course.to_string(),
            phone: phone.to_string(),
        }
    }

    #[test]
    fn empty_draft_reports_every_field() {
        let errors = validate(&StudentDraft::default());
        assert_eq!(errors.len(), 4);
        assert_eq!(errors[&Field::Name], "Name is required");
        assert_eq!(errors[&Field::Email], "Email is required");
        assert_eq!(errors[&Field::Course], "Course is required");
        assert_eq!(errors[&Field::Phone], "Phone is required");
    }

    #[test]
    fn reports_only_the_broken_fields() {
        let errors = validate(&draft("Al", "bad-email", "CS", "12345"));
        assert_eq!(
            errors.keys().copied().collect::<Vec<_>>(),
            vec![Field::Email, Field::Phone]
        );
        assert_eq!(errors[&Field::Email], "Email is invalid");
        assert_eq!(errors[&Field::Phone], "Phone must be 10 digits");
    }

    #[test]
    fn formatted_phone_normalizes_to_ten_digits() {
        let clean = draft("Alice Smith", "a@b.com", "CS", "(555) 123-4567");
        assert!(validate(&clean).is_empty());
        assert!(is_valid(&clean));
    }

    #[test]
    fn validation_is_deterministic() {
        let candidate = draft(" A ", "x@y", " ", "555-0100");
        assert_eq!(validate(&candidate), validate(&candidate));
    }

    #[test]
    fn name_length_counts_trimmed_characters() {
        let errors = validate(&draft("  A  ", "a@b.com", "CS", "5551234567"));
        assert_eq!(errors[&Field::Name], "Name must be at least 2 characters");

        assert!(is_valid(&draft("Zoë", "a@b.com", "CS", "5551234567")));
    }

    #[test]
    fn whitespace_only_fields_are_missing() {
        let errors = validate(&draft("   ", "  ", "\t", " "));
        assert_eq!(errors[&Field::Name], "Name is required");
        assert_eq!(errors[&Field::Email], "Email is required");
        assert_eq!(errors[&Field::Phone], "Phone is required");
    }

    #[test]
    fn email_shape() {
        for ok in ["a@b.com", "first.last@uni.edu.au", "  padded@mail.org  "] {
            assert!(EMAIL_PATTERN.is_match(ok.trim()), "{ok} should be accepted");
        }
        for bad in ["a@b", "@b.com", "a@.", "a b@c.com", "a@b@c.com", "plain"] {
            assert!(!EMAIL_PATTERN.is_match(bad), "{bad} should be rejected");
        }
    }

    #[test]
    fn phone_with_too_many_digits_is_rejected() {
        let errors = validate(&draft("Alice", "a@b.com", "CS", "+1 555 123 4567"));
        assert_eq!(errors[&Field::Phone], "Phone must be 10 digits");
        assert_eq!(phone_digits("+1 555 123 4567"), "15551234567");
    }
}
