//! Invariant checking for deterministic simulation testing.
//!
//! Invariants are properties that must always hold during form interaction.
//! Unlike example-based tests that check specific scenarios, invariants
//! verify behavioral properties across all possible key sequences.
//!
//! # Architecture
//!
//! The invariant system extracts observable state from the App into a
//! [`FormSnapshot`], then runs registered [`Invariant`] checks against it.
//! Violations trigger panics with detailed context for debugging.
//!
//! # Usage
//!
//! ```
//! use regform_app::{App, FormConfig};
//! use regform_harness::{FormSnapshot, InvariantRegistry};
//!
//! let app = App::new(&FormConfig::default());
//! let registry = InvariantRegistry::standard();
//! let snapshot = FormSnapshot::from_app(&app);
//! assert!(registry.check_all(&snapshot).is_ok());
//! ```

mod checks;
mod snapshot;

use thiserror::Error;

pub use checks::{
    CursorsInBounds, ErrorsMatchEvaluation, SubmitFocusRequiresValidity, ValidityMatchesSchema,
};
pub use snapshot::FormSnapshot;

/// Invariant check result.
pub type InvariantResult = Result<(), Violation>;

/// Identifies a registered invariant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvariantKind {
    /// See [`ValidityMatchesSchema`].
    ValidityMatchesSchema,
    /// See [`ErrorsMatchEvaluation`].
    ErrorsMatchEvaluation,
    /// See [`SubmitFocusRequiresValidity`].
    SubmitFocusRequiresValidity,
    /// See [`CursorsInBounds`].
    CursorsInBounds,
}

/// Invariant violation with context.
#[derive(Debug, Clone, Error)]
#[error("{invariant:?}: {message}")]
pub struct Violation {
    /// Violated invariant.
    pub invariant: InvariantKind,
    /// Description of what went wrong.
    pub message: String,
}

/// An invariant that can be checked against form state.
///
/// Invariants are behavioral properties that must always hold.
/// They capture WHAT must be true, not specific test scenarios.
pub trait Invariant: Send + Sync {
    /// Invariant identity for error reporting.
    fn kind(&self) -> InvariantKind;

    /// Check the invariant against the current state.
    ///
    /// Returns `Ok(())` if the invariant holds, or a [`Violation`]
    /// describing what went wrong.
    fn check(&self, state: &FormSnapshot) -> InvariantResult;
}

/// Registry of invariants to check.
///
/// Collects multiple invariants and runs them all against form state.
/// Use [`InvariantRegistry::standard()`] for the standard form invariants.
pub struct InvariantRegistry {
    invariants: Vec<Box<dyn Invariant>>,
}

impl Default for InvariantRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl InvariantRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self { invariants: Vec::new() }
    }

    /// Create a registry with the standard form invariants.
    ///
    /// Includes:
    /// - [`ValidityMatchesSchema`]: validity follows a fresh evaluation
    /// - [`ErrorsMatchEvaluation`]: reported errors are real
    /// - [`SubmitFocusRequiresValidity`]: disabled submit never focused
    /// - [`CursorsInBounds`]: cursors stay inside their text
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.add(ValidityMatchesSchema);
        registry.add(ErrorsMatchEvaluation);
        registry.add(SubmitFocusRequiresValidity);
        registry.add(CursorsInBounds);
        registry
    }

    /// Add an invariant to the registry.
    pub fn add<I: Invariant + 'static>(&mut self, invariant: I) {
        self.invariants.push(Box::new(invariant));
    }

    /// Check all invariants against the given state.
    ///
    /// Returns `Ok(())` if all invariants hold, or all violations found.
    pub fn check_all(&self, state: &FormSnapshot) -> Result<(), Vec<Violation>> {
        let violations: Vec<_> =
            self.invariants.iter().filter_map(|inv| inv.check(state).err()).collect();

        if violations.is_empty() { Ok(()) } else { Err(violations) }
    }

    /// Check all invariants, panicking on first violation.
    ///
    /// Use this in tests where you want immediate failure with context.
    #[allow(clippy::panic, reason = "test assertion helper")]
    pub fn assert_all(&self, state: &FormSnapshot, context: &str) {
        if let Err(violations) = self.check_all(state) {
            let messages: Vec<_> = violations.iter().map(ToString::to_string).collect();
            panic!("Invariant violation {context}:\n  {}", messages.join("\n  "));
        }
    }

    /// Number of registered invariants.
    pub fn len(&self) -> usize {
        self.invariants.len()
    }

    /// Check if registry is empty.
    pub fn is_empty(&self) -> bool {
        self.invariants.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_registry_has_invariants() {
        let registry = InvariantRegistry::standard();
        assert!(!registry.is_empty());
        assert_eq!(registry.len(), 4);
    }

    #[test]
    fn fresh_app_passes_invariants() {
        let registry = InvariantRegistry::standard();
        let app = regform_app::App::new(&regform_app::FormConfig::default());
        let snapshot = FormSnapshot::from_app(&app);
        assert!(registry.check_all(&snapshot).is_ok());
    }

    #[test]
    fn all_violations_collected() {
        let registry = InvariantRegistry::standard();
        let snapshot = FormSnapshot {
            is_valid: true,
            focus: Some(regform_app::Focus::Submit),
            cursors: [0, 0, 4],
            ..FormSnapshot::default()
        };

        let violations = registry.check_all(&snapshot).err().unwrap_or_default();
        let kinds: Vec<_> = violations.iter().map(|v| v.invariant).collect();
        assert_eq!(kinds, vec![
            InvariantKind::ValidityMatchesSchema,
            InvariantKind::SubmitFocusRequiresValidity,
            InvariantKind::CursorsInBounds,
        ]);
    }

    #[test]
    #[should_panic(expected = "Invariant violation after edit")]
    fn assert_all_panics_with_context() {
        let snapshot = FormSnapshot { cursors: [1, 0, 0], ..FormSnapshot::default() };
        let mut registry = InvariantRegistry::new();
        registry.add(CursorsInBounds);
        registry.assert_all(&snapshot, "after edit");
    }
}
