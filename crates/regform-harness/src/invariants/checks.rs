//! Standard invariant checks.
//!
//! These invariants capture behavioral properties that must always hold.
//! They verify WHAT must be true, not specific test scenarios.

use regform_app::{FieldId, Focus};

use super::{FormSnapshot, Invariant, InvariantKind, InvariantResult, Violation};

/// Validity must equal a fresh schema evaluation.
///
/// The form's stored evaluation must match re-running the schema on the
/// current values, and `is_valid` must be true iff that evaluation is empty.
/// A mismatch means some change skipped re-validation.
pub struct ValidityMatchesSchema;

impl Invariant for ValidityMatchesSchema {
    fn kind(&self) -> InvariantKind {
        InvariantKind::ValidityMatchesSchema
    }

    fn check(&self, state: &FormSnapshot) -> InvariantResult {
        if state.evaluation != state.expected {
            return Err(Violation {
                invariant: self.kind(),
                message: format!(
                    "stale evaluation {:?}, schema gives {:?}",
                    state.evaluation, state.expected
                ),
            });
        }
        if state.is_valid != state.expected.is_empty() {
            return Err(Violation {
                invariant: self.kind(),
                message: format!(
                    "is_valid = {} with {} failing field(s)",
                    state.is_valid,
                    state.expected.len()
                ),
            });
        }
        if state.submit_enabled != state.is_valid {
            return Err(Violation {
                invariant: self.kind(),
                message: format!(
                    "submit_enabled = {} but is_valid = {}",
                    state.submit_enabled, state.is_valid
                ),
            });
        }
        Ok(())
    }
}

/// Reported errors must be a subset of the evaluation.
///
/// Every message shown next to a field must be that field's current
/// evaluation result. Showing an error for a passing field is a bug.
pub struct ErrorsMatchEvaluation;

impl Invariant for ErrorsMatchEvaluation {
    fn kind(&self) -> InvariantKind {
        InvariantKind::ErrorsMatchEvaluation
    }

    fn check(&self, state: &FormSnapshot) -> InvariantResult {
        for (field, message) in state.errors.iter() {
            if state.evaluation.get(field) != Some(message) {
                return Err(Violation {
                    invariant: self.kind(),
                    message: format!(
                        "{field}: reports {message:?}, evaluation has {:?}",
                        state.evaluation.get(field)
                    ),
                });
            }
        }
        Ok(())
    }
}

/// A disabled submit control must not hold focus.
pub struct SubmitFocusRequiresValidity;

impl Invariant for SubmitFocusRequiresValidity {
    fn kind(&self) -> InvariantKind {
        InvariantKind::SubmitFocusRequiresValidity
    }

    fn check(&self, state: &FormSnapshot) -> InvariantResult {
        if state.focus == Some(Focus::Submit) && !state.submit_enabled {
            return Err(Violation {
                invariant: self.kind(),
                message: "submit control focused while disabled".to_string(),
            });
        }
        Ok(())
    }
}

/// Cursors must stay within their field's text.
pub struct CursorsInBounds;

impl Invariant for CursorsInBounds {
    fn kind(&self) -> InvariantKind {
        InvariantKind::CursorsInBounds
    }

    fn check(&self, state: &FormSnapshot) -> InvariantResult {
        for field in FieldId::ALL {
            let cursor = state.cursors[field.index()];
            let len = state.value_len(field);
            if cursor > len {
                return Err(Violation {
                    invariant: self.kind(),
                    message: format!("{field}: cursor {cursor} past length {len}"),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use regform_app::{App, AppEvent, FormConfig, FormValues};

    use super::*;

    fn snapshot_with(email: &str, password: &str, repeat: &str) -> FormSnapshot {
        let mut app = App::new(&FormConfig::default());
        for (field, value) in FieldId::ALL.into_iter().zip([email, password, repeat]) {
            app.handle(AppEvent::FieldChanged { field, value: value.to_owned() });
        }
        FormSnapshot::from_app(&app)
    }

    #[test]
    fn live_snapshots_pass() {
        for snapshot in [
            snapshot_with("a@b.com", "123456", "123456"),
            snapshot_with("bad", "12", ""),
            FormSnapshot::from_app(&App::new(&FormConfig::default())),
        ] {
            assert!(ValidityMatchesSchema.check(&snapshot).is_ok());
            assert!(ErrorsMatchEvaluation.check(&snapshot).is_ok());
            assert!(SubmitFocusRequiresValidity.check(&snapshot).is_ok());
            assert!(CursorsInBounds.check(&snapshot).is_ok());
        }
    }

    #[test]
    fn stale_validity_detected() {
        let mut snapshot = snapshot_with("bad", "12", "");
        snapshot.is_valid = true;
        snapshot.submit_enabled = true;

        let violation = ValidityMatchesSchema.check(&snapshot).err();
        assert_eq!(violation.map(|v| v.invariant), Some(InvariantKind::ValidityMatchesSchema));
    }

    #[test]
    fn stale_evaluation_detected() {
        let mut snapshot = snapshot_with("a@b.com", "123456", "123456");
        snapshot.values = FormValues::new("bad", "123456", "123456");
        snapshot.expected = snapshot_with("bad", "123456", "123456").expected;

        assert!(ValidityMatchesSchema.check(&snapshot).is_err());
    }

    #[test]
    fn phantom_error_detected() {
        let mut snapshot = snapshot_with("bad", "12", "");
        snapshot.errors = snapshot_with("a@b.com", "12", "").errors;
        snapshot.evaluation = snapshot_with("a@b.com", "123456", "123456").evaluation;

        assert!(ErrorsMatchEvaluation.check(&snapshot).is_err());
    }

    #[test]
    fn disabled_submit_focus_detected() {
        let snapshot = FormSnapshot { focus: Some(Focus::Submit), ..FormSnapshot::default() };
        assert!(SubmitFocusRequiresValidity.check(&snapshot).is_err());
    }

    #[test]
    fn cursor_overflow_detected() {
        let snapshot = FormSnapshot { cursors: [1, 0, 0], ..FormSnapshot::default() };
        assert!(CursorsInBounds.check(&snapshot).is_err());
    }
}
