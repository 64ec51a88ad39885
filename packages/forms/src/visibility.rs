//! Password show/hide state.

use std::fmt;

/// How the password input displays its value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Visibility {
    #[default]
    Obscured,
    Plain,
}

/// Icon shown on the visibility toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconId {
    Eye,
    EyeOff,
}

impl Visibility {
    /// The other mode.
    pub fn toggle(self) -> Self {
        match self {
            Visibility::Obscured => Visibility::Plain,
            Visibility::Plain => Visibility::Obscured,
        }
    }

    /// Value for the input's `type` attribute.
    pub fn input_type(self) -> &'static str {
        match self {
            Visibility::Obscured => "password",
            Visibility::Plain => "text",
        }
    }

    /// The icon advertises the action the next click performs.
    pub fn icon(self) -> IconId {
        match self {
            Visibility::Obscured => IconId::Eye,
            Visibility::Plain => IconId::EyeOff,
        }
    }
}

impl IconId {
    pub fn as_str(self) -> &'static str {
        match self {
            IconId::Eye => "eye",
            IconId::EyeOff => "eye-off",
        }
    }
}

impl fmt::Display for IconId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
