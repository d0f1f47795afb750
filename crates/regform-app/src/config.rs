//! Form configuration.

use crate::ConfigError;

/// Default minimum password length, in characters.
pub const DEFAULT_MIN_PASSWORD_LENGTH: usize = 6;

/// When a field's validation error becomes visible.
///
/// Validation always runs on every edit and always gates the submit
/// control. The mode only decides which errors are reported per field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ValidationMode {
    /// Report a field's error once the field has been edited.
    #[default]
    OnChange,
    /// Report a field's error once focus has left the field.
    OnTouched,
}

/// Form configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormConfig {
    /// Minimum password length, in characters.
    pub min_password_length: usize,
    /// Error reveal mode.
    pub mode: ValidationMode,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self { min_password_length: DEFAULT_MIN_PASSWORD_LENGTH, mode: ValidationMode::default() }
    }
}

impl FormConfig {
    /// Check the configuration for values the schema cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_password_length == 0 {
            return Err(ConfigError::MinPasswordLength(self.min_password_length));
        }
        Ok(())
    }
}
