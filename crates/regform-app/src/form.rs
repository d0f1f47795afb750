//! Form state.
//!
//! [`Form`] owns the field values and re-evaluates the [`Schema`] on every
//! change. Two views of the evaluation are exposed:
//!
//! - [`Form::is_valid`] always reflects the full evaluation and gates
//!   submission.
//! - [`Form::errors`] reports only the errors of fields the
//!   [`ValidationMode`] has revealed, so a freshly reset form carries no
//!   messages while still being invalid.

use crate::{FieldErrors, FieldId, FormConfig, FormError, FormValues, Schema, ValidationMode};

/// Field values, validation state and per-field interaction flags.
#[derive(Debug, Clone)]
pub struct Form {
    schema: Schema,
    mode: ValidationMode,
    values: FormValues,
    /// Full evaluation of `values`.
    evaluation: FieldErrors,
    /// `evaluation` restricted to revealed fields.
    errors: FieldErrors,
    /// Field received a change since the last reset.
    dirty: [bool; 3],
    /// Focus left the field since the last reset.
    touched: [bool; 3],
}

impl Form {
    /// Create an empty registration form.
    pub fn new(config: &FormConfig) -> Self {
        Self::with_schema(Schema::registration(config), config.mode)
    }

    /// Create an empty form validated by a custom schema.
    pub fn with_schema(schema: Schema, mode: ValidationMode) -> Self {
        let mut form = Self {
            schema,
            mode,
            values: FormValues::default(),
            evaluation: FieldErrors::default(),
            errors: FieldErrors::default(),
            dirty: [false; 3],
            touched: [false; 3],
        };
        form.revalidate();
        form
    }

    /// Replace a field's value and re-evaluate every rule.
    ///
    /// The field counts as changed even if the text is identical.
    pub fn set_value(&mut self, field: FieldId, value: impl Into<String>) {
        self.values.set(field, value.into());
        self.dirty[field.index()] = true;
        self.revalidate();
    }

    /// Record that focus left a field.
    pub fn touch(&mut self, field: FieldId) {
        if !self.touched[field.index()] {
            self.touched[field.index()] = true;
            self.revalidate();
        }
    }

    /// Hand out the values if the form is valid, then reset it.
    pub fn submit(&mut self) -> Result<FormValues, FormError> {
        if !self.is_valid() {
            return Err(FormError::Invalid { failing: self.evaluation.len() });
        }
        let values = std::mem::take(&mut self.values);
        self.reset();
        Ok(values)
    }

    /// Clear all values, errors and interaction flags.
    pub fn reset(&mut self) {
        self.values = FormValues::default();
        self.dirty = [false; 3];
        self.touched = [false; 3];
        self.revalidate();
    }

    /// True iff every field passes its rules.
    pub fn is_valid(&self) -> bool {
        self.evaluation.is_empty()
    }

    /// Current values.
    pub fn values(&self) -> &FormValues {
        &self.values
    }

    /// Current text of a field.
    pub fn value(&self, field: FieldId) -> &str {
        self.values.get(field)
    }

    /// Reported errors (fields revealed by the validation mode).
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Reported error for one field.
    pub fn error(&self, field: FieldId) -> Option<&str> {
        self.errors.get(field)
    }

    /// Full evaluation, including fields not yet revealed.
    pub fn evaluation(&self) -> &FieldErrors {
        &self.evaluation
    }

    /// Field received a change since the last reset.
    pub fn is_dirty(&self, field: FieldId) -> bool {
        self.dirty[field.index()]
    }

    /// Focus left the field since the last reset.
    pub fn is_touched(&self, field: FieldId) -> bool {
        self.touched[field.index()]
    }

    /// Validation schema.
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    fn is_revealed(&self, field: FieldId) -> bool {
        match self.mode {
            ValidationMode::OnChange => self.is_dirty(field),
            ValidationMode::OnTouched => self.is_touched(field),
        }
    }

    fn revalidate(&mut self) {
        self.evaluation = self.schema.validate(&self.values);

        let mut errors = FieldErrors::default();
        for (field, message) in self.evaluation.iter() {
            if self.is_revealed(field) {
                errors.insert(field, message.to_owned());
            }
        }
        self.errors = errors;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> Form {
        Form::new(&FormConfig::default())
    }

    fn fill(form: &mut Form, email: &str, password: &str, repeat: &str) {
        form.set_value(FieldId::Email, email);
        form.set_value(FieldId::Password, password);
        form.set_value(FieldId::RepeatPassword, repeat);
    }

    #[test]
    fn new_form_is_invalid_without_reported_errors() {
        let form = form();

        assert!(!form.is_valid());
        assert!(form.errors().is_empty());
        assert_eq!(form.evaluation().len(), 3);
        assert!(form.values().is_empty());
    }

    #[test]
    fn valid_values_make_form_valid() {
        let mut form = form();
        fill(&mut form, "a@b.com", "123456", "123456");

        assert!(form.is_valid());
        assert!(form.errors().is_empty());
    }

    #[test]
    fn only_edited_fields_report_errors() {
        let mut form = form();
        form.set_value(FieldId::Email, "bad");

        assert_eq!(form.error(FieldId::Email), Some("Invalid email"));
        assert!(form.error(FieldId::Password).is_none());
        assert!(form.evaluation().contains(FieldId::Password));
    }

    #[test]
    fn submit_invalid_is_refused_without_state_change() {
        let mut form = form();
        fill(&mut form, "bad", "12", "");

        assert_eq!(form.submit(), Err(FormError::Invalid { failing: 3 }));
        assert_eq!(form.value(FieldId::Email), "bad");
        assert_eq!(form.errors().len(), 3);
    }

    #[test]
    fn submit_valid_returns_values_and_resets() {
        let mut form = form();
        fill(&mut form, "a@b.com", "123456", "123456");

        let values = form.submit();
        assert_eq!(values, Ok(FormValues::new("a@b.com", "123456", "123456")));

        assert!(form.values().is_empty());
        assert!(form.errors().is_empty());
        assert!(!form.is_valid());
        for field in FieldId::ALL {
            assert!(!form.is_dirty(field));
            assert!(!form.is_touched(field));
        }
    }

    #[test]
    fn on_touched_mode_waits_for_blur() {
        let config = FormConfig { mode: ValidationMode::OnTouched, ..FormConfig::default() };
        let mut form = Form::new(&config);

        form.set_value(FieldId::Email, "bad");
        assert!(form.error(FieldId::Email).is_none());

        form.touch(FieldId::Email);
        assert_eq!(form.error(FieldId::Email), Some("Invalid email"));

        form.set_value(FieldId::Email, "a@b.com");
        assert!(form.error(FieldId::Email).is_none());
    }

    #[test]
    fn touched_but_unchanged_field_hidden_in_on_change_mode() {
        let mut form = form();
        form.touch(FieldId::Email);

        assert!(form.is_touched(FieldId::Email));
        assert!(form.error(FieldId::Email).is_none());
    }
}
