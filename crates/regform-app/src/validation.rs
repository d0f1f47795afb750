//! Declarative field validation.
//!
//! A [`Schema`] is an ordered list of [`Rule`]s per field. Each rule is a
//! predicate plus the message reported when the predicate fails. Predicates
//! see the candidate value and the whole [`FormValues`], so a rule can depend
//! on another field (the password confirmation does).
//!
//! Evaluation reports, per field, the message of the first failing rule in
//! declaration order.
//!
//! # Example
//!
//! ```
//! use regform_app::{FieldId, FormValues, Schema};
//!
//! let schema = Schema::builder()
//!     .field(FieldId::Email)
//!     .required("Email is required")
//!     .email("Invalid email")
//!     .field(FieldId::Password)
//!     .required("Password is required")
//!     .min_length(6, "Too short")
//!     .build();
//!
//! let errors = schema.validate(&FormValues::new("a@b.com", "123", ""));
//! assert_eq!(errors.get(FieldId::Password), Some("Too short"));
//! assert!(errors.get(FieldId::Email).is_none());
//! ```

use std::{
    collections::BTreeMap,
    fmt,
    sync::{Arc, LazyLock},
};

use regex::Regex;

use crate::{FieldId, FormConfig, FormValues};

/// HTML5 email address pattern.
const EMAIL_PATTERN: &str = concat!(
    r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+",
    r"@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?",
    r"(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
);

#[allow(clippy::expect_used, reason = "pattern is a constant covered by tests")]
static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("email pattern compiles"));

type Predicate = Arc<dyn Fn(&str, &FormValues) -> bool + Send + Sync>;

/// A single validation rule: predicate plus failure message.
#[derive(Clone)]
pub struct Rule {
    predicate: Predicate,
    message: String,
}

impl Rule {
    /// Create a rule from a predicate over `(value, all_values)`.
    pub fn new<F>(predicate: F, message: impl Into<String>) -> Self
    where
        F: Fn(&str, &FormValues) -> bool + Send + Sync + 'static,
    {
        Self { predicate: Arc::new(predicate), message: message.into() }
    }

    /// Message reported when the rule fails.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Evaluate the rule.
    pub fn passes(&self, value: &str, values: &FormValues) -> bool {
        (self.predicate)(value, values)
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule").field("message", &self.message).finish_non_exhaustive()
    }
}

/// Per-field error messages. A field without an entry is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<FieldId, String>);

impl FieldErrors {
    /// Error message for a field. `None` if the field is valid.
    pub fn get(&self, field: FieldId) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    /// Whether the field has an error.
    pub fn contains(&self, field: FieldId) -> bool {
        self.0.contains_key(&field)
    }

    /// True if no field has an error.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of fields with an error.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Fields with errors, in display order.
    pub fn iter(&self) -> impl Iterator<Item = (FieldId, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }

    pub(crate) fn insert(&mut self, field: FieldId, message: String) {
        self.0.insert(field, message);
    }
}

/// Ordered validation rules for each field.
#[derive(Debug, Clone, Default)]
pub struct Schema {
    fields: Vec<(FieldId, Vec<Rule>)>,
}

impl Schema {
    /// Start building a schema.
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::new()
    }

    /// The registration form schema.
    ///
    /// - `email`: required, HTML5 email pattern
    /// - `password`: required, at least `config.min_password_length` chars
    /// - `repeatPassword`: equal to `password`, then required. A mismatch is
    ///   reported ahead of emptiness, so an empty confirmation under a
    ///   non-empty password reads as a mismatch.
    pub fn registration(config: &FormConfig) -> Self {
        let min = config.min_password_length;
        Self::builder()
            .field(FieldId::Email)
            .required("Email is required")
            .email("Invalid email")
            .field(FieldId::Password)
            .required("Password is required")
            .min_length(min, format!("Password must be at least {min} characters"))
            .field(FieldId::RepeatPassword)
            .equals_field(FieldId::Password, "Passwords do not match")
            .required("Repeat password is required")
            .build()
    }

    /// Rules declared for a field, in evaluation order.
    pub fn rules(&self, field: FieldId) -> &[Rule] {
        self.fields
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, rules)| rules.as_slice())
            .unwrap_or_default()
    }

    /// First failing rule's message for one field. `None` if it passes.
    pub fn validate_field(&self, field: FieldId, values: &FormValues) -> Option<&str> {
        let value = values.get(field);
        self.rules(field).iter().find(|rule| !rule.passes(value, values)).map(Rule::message)
    }

    /// Evaluate every field against the full set of values.
    pub fn validate(&self, values: &FormValues) -> FieldErrors {
        let mut errors = FieldErrors::default();
        for &(field, _) in &self.fields {
            if let Some(message) = self.validate_field(field, values) {
                errors.insert(field, message.to_owned());
            }
        }
        errors
    }
}

/// Builder for [`Schema`].
#[derive(Debug, Default)]
pub struct SchemaBuilder {
    fields: Vec<(FieldId, Vec<Rule>)>,
}

impl SchemaBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start adding rules for a field.
    pub fn field(self, field: FieldId) -> FieldRules {
        FieldRules { builder: self, field, rules: Vec::new() }
    }

    /// Finish the schema.
    pub fn build(self) -> Schema {
        Schema { fields: self.fields }
    }

    fn push(&mut self, field: FieldId, rules: Vec<Rule>) {
        if let Some((_, existing)) = self.fields.iter_mut().find(|(f, _)| *f == field) {
            existing.extend(rules);
        } else {
            self.fields.push((field, rules));
        }
    }
}

/// Rules being added to a single field.
#[derive(Debug)]
pub struct FieldRules {
    builder: SchemaBuilder,
    field: FieldId,
    rules: Vec<Rule>,
}

impl FieldRules {
    /// Add a custom rule.
    pub fn rule<F>(mut self, predicate: F, message: impl Into<String>) -> Self
    where
        F: Fn(&str, &FormValues) -> bool + Send + Sync + 'static,
    {
        self.rules.push(Rule::new(predicate, message));
        self
    }

    /// Require a non-empty value. Whitespace counts as content.
    pub fn required(self, message: impl Into<String>) -> Self {
        self.rule(|value, _| !value.is_empty(), message)
    }

    /// Require an email address. Empty passes; pair with [`Self::required`].
    pub fn email(self, message: impl Into<String>) -> Self {
        self.rule(|value, _| value.is_empty() || EMAIL_REGEX.is_match(value), message)
    }

    /// Require at least `min` characters, counted in UTF-16 code units as
    /// browsers measure text length. Characters outside the BMP count twice.
    pub fn min_length(self, min: usize, message: impl Into<String>) -> Self {
        self.rule(move |value, _| value.encode_utf16().count() >= min, message)
    }

    /// Require the value to equal another field's current value.
    pub fn equals_field(self, other: FieldId, message: impl Into<String>) -> Self {
        self.rule(move |value, values| value == values.get(other), message)
    }

    /// Continue with the next field.
    pub fn field(self, field: FieldId) -> FieldRules {
        self.finish().field(field)
    }

    /// Finish the schema.
    pub fn build(self) -> Schema {
        self.finish().build()
    }

    fn finish(self) -> SchemaBuilder {
        let mut builder = self.builder;
        builder.push(self.field, self.rules);
        builder
    }
}
