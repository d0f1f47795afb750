//! Form fields and their values.
//!
//! The registration form has a fixed set of fields. [`FieldId`] names them
//! and fixes their order; [`FormValues`] holds the current text of each one
//! and is the payload handed to the submit collaborator.

use std::fmt;

use serde::Serialize;

/// One of the three named inputs of the registration form.
///
/// Variants are declared in display order, which is also the focus
/// traversal order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldId {
    /// Email address.
    Email,
    /// Password.
    Password,
    /// Password confirmation, must equal [`FieldId::Password`].
    RepeatPassword,
}

impl FieldId {
    /// All fields in display order.
    pub const ALL: [FieldId; 3] = [FieldId::Email, FieldId::Password, FieldId::RepeatPassword];

    /// Name used in submitted payloads and logs.
    pub fn name(self) -> &'static str {
        match self {
            FieldId::Email => "email",
            FieldId::Password => "password",
            FieldId::RepeatPassword => "repeatPassword",
        }
    }

    /// Human-readable placeholder shown in the UI.
    pub fn label(self) -> &'static str {
        match self {
            FieldId::Email => "Email",
            FieldId::Password => "Password",
            FieldId::RepeatPassword => "Repeat password",
        }
    }

    /// Position in [`FieldId::ALL`].
    pub fn index(self) -> usize {
        match self {
            FieldId::Email => 0,
            FieldId::Password => 1,
            FieldId::RepeatPassword => 2,
        }
    }

    /// Whether the UI masks this field's contents.
    pub fn is_secret(self) -> bool {
        matches!(self, FieldId::Password | FieldId::RepeatPassword)
    }

    /// Next field in display order. `None` after the last field.
    pub fn next(self) -> Option<FieldId> {
        Self::ALL.get(self.index() + 1).copied()
    }

    /// Previous field in display order. `None` before the first field.
    pub fn prev(self) -> Option<FieldId> {
        self.index().checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Current text of every field.
///
/// Serializes as `{"email", "password", "repeatPassword"}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormValues {
    /// Email address.
    pub email: String,
    /// Password.
    pub password: String,
    /// Password confirmation.
    pub repeat_password: String,
}

impl FormValues {
    /// Create values from the three field texts.
    pub fn new(
        email: impl Into<String>,
        password: impl Into<String>,
        repeat_password: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            repeat_password: repeat_password.into(),
        }
    }

    /// Text of the given field.
    pub fn get(&self, field: FieldId) -> &str {
        match field {
            FieldId::Email => &self.email,
            FieldId::Password => &self.password,
            FieldId::RepeatPassword => &self.repeat_password,
        }
    }

    /// Replace the text of the given field.
    pub fn set(&mut self, field: FieldId, value: String) {
        match field {
            FieldId::Email => self.email = value,
            FieldId::Password => self.password = value,
            FieldId::RepeatPassword => self.repeat_password = value,
        }
    }

    /// True if every field is the empty string.
    pub fn is_empty(&self) -> bool {
        FieldId::ALL.iter().all(|&field| self.get(field).is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn traversal_order_matches_all() {
        assert_eq!(FieldId::Email.next(), Some(FieldId::Password));
        assert_eq!(FieldId::Password.next(), Some(FieldId::RepeatPassword));
        assert_eq!(FieldId::RepeatPassword.next(), None);

        assert_eq!(FieldId::Email.prev(), None);
        assert_eq!(FieldId::RepeatPassword.prev(), Some(FieldId::Password));

        for (i, field) in FieldId::ALL.iter().enumerate() {
            assert_eq!(field.index(), i);
        }
    }

    #[test]
    fn set_and_get_address_the_same_field() {
        let mut values = FormValues::default();
        assert!(values.is_empty());

        values.set(FieldId::RepeatPassword, "secret".into());
        assert_eq!(values.get(FieldId::RepeatPassword), "secret");
        assert_eq!(values.repeat_password, "secret");
        assert!(values.get(FieldId::Password).is_empty());
        assert!(!values.is_empty());
    }

    #[test]
    fn names_use_camel_case() {
        assert_eq!(FieldId::RepeatPassword.to_string(), "repeatPassword");
        assert!(FieldId::Password.is_secret());
        assert!(!FieldId::Email.is_secret());
    }
}
