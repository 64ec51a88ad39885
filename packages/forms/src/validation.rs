//! Client-side field rules.
//!
//! Every rule is evaluated, so a single submit can report errors on several
//! fields at once.

use crate::email::is_valid_email;
use crate::fields::{Field, LoginInput, RegistrationInput};

pub const NAME_MIN_CHARS: usize = 2;
pub const PASSWORD_MIN_CHARS: usize = 6;

pub const NAME_REQUIRED: &str = "Please enter your name";
pub const EMAIL_INVALID: &str = "Please enter a valid email";
pub const PASSWORD_TOO_SHORT: &str = "Password must be 6+ characters";
pub const PASSWORD_REQUIRED: &str = "Password is required";
pub const DOB_REQUIRED: &str = "Date of birth is required";
pub const GENDER_REQUIRED: &str = "Please select a gender";

/// A rule violation on one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub message: &'static str,
}

/// Outcome of validating one submit attempt. Empty means acceptable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    errors: Vec<FieldError>,
}

impl ValidationResult {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }

    /// Message reported for `field`, if it failed.
    pub fn message(&self, field: Field) -> Option<&'static str> {
        self.errors
            .iter()
            .find(|error| error.field == field)
            .map(|error| error.message)
    }

    fn check(&mut self, ok: bool, field: Field, message: &'static str) {
        if !ok {
            self.errors.push(FieldError { field, message });
        }
    }
}

/// Registration rules that vary between deployments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistrationRules {
    /// Reject an empty gender selection.
    pub require_gender: bool,
}

impl Default for RegistrationRules {
    fn default() -> Self {
        Self {
            require_gender: true,
        }
    }
}

pub fn validate_registration(input: &RegistrationInput, rules: &RegistrationRules) -> ValidationResult {
    let mut result = ValidationResult::default();
    result.check(
        input.name.chars().count() >= NAME_MIN_CHARS,
        Field::Name,
        NAME_REQUIRED,
    );
    result.check(is_valid_email(&input.email), Field::Email, EMAIL_INVALID);
    result.check(
        input.password.chars().count() >= PASSWORD_MIN_CHARS,
        Field::Password,
        PASSWORD_TOO_SHORT,
    );
    result.check(!input.date_of_birth.is_empty(), Field::Dob, DOB_REQUIRED);
    if rules.require_gender {
        result.check(!input.gender.is_empty(), Field::Gender, GENDER_REQUIRED);
    }
    result
}

pub fn validate_login(input: &LoginInput) -> ValidationResult {
    let mut result = ValidationResult::default();
    result.check(is_valid_email(&input.email), Field::Email, EMAIL_INVALID);
    result.check(!input.password.is_empty(), Field::Password, PASSWORD_REQUIRED);
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registration() -> RegistrationInput {
        RegistrationInput {
            name: "Ada".into(),
            email: "a@b.com".into(),
            password: "123456".into(),
            date_of_birth: "2000-01-01".into(),
            gender: "f".into(),
        }
    }

    #[test]
    fn test_valid_registration_passes() {
        let result = validate_registration(&registration(), &RegistrationRules::default());
        assert!(result.is_empty());
    }

    #[test]
    fn test_single_char_name_is_rejected() {
        let input = RegistrationInput {
            name: "A".into(),
            ..registration()
        };
        let result = validate_registration(&input, &RegistrationRules::default());
        assert_eq!(result.len(), 1);
        assert_eq!(result.message(Field::Name), Some(NAME_REQUIRED));
    }

    #[test]
    fn test_name_length_counts_characters() {
        let input = RegistrationInput {
            name: "Ó".into(),
            ..registration()
        };
        let result = validate_registration(&input, &RegistrationRules::default());
        assert_eq!(result.message(Field::Name), Some(NAME_REQUIRED));
    }

    #[test]
    fn test_all_failures_are_reported_together() {
        let input = RegistrationInput {
            name: String::new(),
            email: "nope".into(),
            password: "12345".into(),
            date_of_birth: String::new(),
            gender: String::new(),
        };
        let result = validate_registration(&input, &RegistrationRules::default());
        let fields: Vec<Field> = result.iter().map(|error| error.field).collect();
        assert_eq!(fields, Field::ALL.to_vec());
        assert_eq!(result.message(Field::Password), Some(PASSWORD_TOO_SHORT));
        assert_eq!(result.message(Field::Dob), Some(DOB_REQUIRED));
        assert_eq!(result.message(Field::Gender), Some(GENDER_REQUIRED));
    }

    #[test]
    fn test_gender_check_can_be_disabled() {
        let input = RegistrationInput {
            gender: String::new(),
            ..registration()
        };
        let lenient = RegistrationRules {
            require_gender: false,
        };
        assert!(validate_registration(&input, &lenient).is_empty());
        assert!(!validate_registration(&input, &RegistrationRules::default()).is_empty());
    }

    #[test]
    fn test_login_rules() {
        let ok = LoginInput {
            email: "a@b.com".into(),
            password: "x".into(),
        };
        assert!(validate_login(&ok).is_empty());

        let bad = LoginInput {
            email: "a@b".into(),
            password: String::new(),
        };
        let result = validate_login(&bad);
        assert_eq!(result.message(Field::Email), Some(EMAIL_INVALID));
        assert_eq!(result.message(Field::Password), Some(PASSWORD_REQUIRED));
    }
}
