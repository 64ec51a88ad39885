//! Field identifiers, the two form kinds, and the typed inputs they submit.

use std::fmt;

use serde::Serialize;

use crate::view::FormView;

/// An input on one of the forms.
///
/// [`Field::id`] is the element id the page renders for the input, and
/// [`Field::error_id`] the id of the slot holding its error message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Password,
    Dob,
    Gender,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::Name,
        Field::Email,
        Field::Password,
        Field::Dob,
        Field::Gender,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Password => "password",
            Field::Dob => "dob",
            Field::Gender => "gender",
        }
    }

    pub fn error_id(self) -> &'static str {
        match self {
            Field::Name => "nameError",
            Field::Email => "emailError",
            Field::Password => "passwordError",
            Field::Dob => "dobError",
            Field::Gender => "genderError",
        }
    }

    /// Look a field up by its element id.
    pub fn from_id(id: &str) -> Option<Field> {
        Field::ALL.into_iter().find(|field| field.id() == id)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Which page a controller drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormKind {
    Register,
    Login,
}

impl FormKind {
    /// Fields rendered on this form, in display order.
    pub fn fields(self) -> &'static [Field] {
        match self {
            FormKind::Register => &Field::ALL,
            FormKind::Login => &[Field::Email, Field::Password],
        }
    }

    /// Submit button label while idle.
    pub fn idle_label(self) -> &'static str {
        match self {
            FormKind::Register => "Register",
            FormKind::Login => "Sign In",
        }
    }

    /// Submit button label while a request is in flight.
    pub fn busy_label(self) -> &'static str {
        match self {
            FormKind::Register => "Creating account...",
            FormKind::Login => "Signing in...",
        }
    }

    /// Global error shown when the server gives no usable message.
    pub fn fallback_error(self) -> &'static str {
        match self {
            FormKind::Register => "Something went wrong. Try again.",
            FormKind::Login => "Login failed",
        }
    }
}

/// Registration payload, serialised as the `/register` request body.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct RegistrationInput {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(rename = "dob")]
    pub date_of_birth: String,
    pub gender: String,
}

impl RegistrationInput {
    /// Collect the current field values from the page.
    pub fn read(view: &impl FormView) -> Self {
        Self {
            name: view.value(Field::Name),
            email: view.value(Field::Email),
            password: view.value(Field::Password),
            date_of_birth: view.value(Field::Dob),
            gender: view.value(Field::Gender),
        }
    }
}

impl fmt::Debug for RegistrationInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistrationInput")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("date_of_birth", &self.date_of_birth)
            .field("gender", &self.gender)
            .finish()
    }
}

/// Sign-in payload, serialised as the `/login` request body.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

impl LoginInput {
    pub fn read(view: &impl FormView) -> Self {
        Self {
            email: view.value(Field::Email),
            password: view.value(Field::Password),
        }
    }
}

impl fmt::Debug for LoginInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginInput")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}
