//! Observable state snapshots for invariant checking.
//!
//! Snapshots capture the observable state of the form at a point in time.
//! Invariants operate on snapshots rather than live state to ensure
//! consistent, atomic checks.

use regform_app::{App, FieldErrors, FieldId, Focus, FormValues};

/// Snapshot of a single App's observable form state.
#[derive(Debug, Clone, Default)]
pub struct FormSnapshot {
    /// Field values.
    pub values: FormValues,
    /// Errors reported per field.
    pub errors: FieldErrors,
    /// Evaluation the form holds.
    pub evaluation: FieldErrors,
    /// Fresh schema evaluation of `values`, computed at snapshot time.
    pub expected: FieldErrors,
    /// Aggregate validity the form reports.
    pub is_valid: bool,
    /// Whether the submit control is enabled.
    pub submit_enabled: bool,
    /// Control receiving keys. `None` for snapshots built by hand.
    pub focus: Option<Focus>,
    /// Cursor position (in characters) per field.
    pub cursors: [usize; 3],
}

impl FormSnapshot {
    /// Capture the state of an App.
    pub fn from_app(app: &App) -> Self {
        let form = app.form();
        Self {
            values: form.values().clone(),
            errors: form.errors().clone(),
            evaluation: form.evaluation().clone(),
            expected: form.schema().validate(form.values()),
            is_valid: form.is_valid(),
            submit_enabled: app.submit_enabled(),
            focus: Some(app.focus()),
            cursors: FieldId::ALL.map(|field| app.cursor(field)),
        }
    }

    /// Length (in characters) of a field's value.
    pub fn value_len(&self, field: FieldId) -> usize {
        self.values.get(field).chars().count()
    }
}
