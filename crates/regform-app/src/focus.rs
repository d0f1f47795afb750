//! Input focus.
//!
//! [`Focus`] says which control receives keys. [`FocusObserver`] detects the
//! instant the form becomes valid so the app can move focus to the submit
//! control.

use crate::FieldId;

/// Control that receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// A text field.
    Field(FieldId),
    /// The submit button.
    Submit,
}

impl Default for Focus {
    fn default() -> Self {
        Focus::Field(FieldId::Email)
    }
}

impl Focus {
    /// Field under focus. `None` when the submit control has focus.
    pub fn field(self) -> Option<FieldId> {
        match self {
            Focus::Field(field) => Some(field),
            Focus::Submit => None,
        }
    }
}

/// Rising-edge detector on form validity.
///
/// [`observe`](Self::observe) returns `true` exactly once per transition from
/// invalid to valid. Repeated observations while valid, and every
/// observation while invalid, return `false`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FocusObserver {
    was_valid: bool,
}

impl FocusObserver {
    /// Create an observer seeded with the current validity.
    pub fn new(is_valid: bool) -> Self {
        Self { was_valid: is_valid }
    }

    /// Record the latest validity. `true` if focus should move to submit.
    pub fn observe(&mut self, is_valid: bool) -> bool {
        let fire = is_valid && !self.was_valid;
        self.was_valid = is_valid;
        fire
    }
}
