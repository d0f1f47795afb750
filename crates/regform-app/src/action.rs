//! Application side-effects and intents.
//!
//! This module defines the [`AppAction`] enum, which represents instructions
//! produced by the [`crate::App`] state machine for the runtime to execute.

use crate::FormValues;

/// Actions produced by the App state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppAction {
    /// Render the UI.
    Render,

    /// Quit the application.
    Quit,

    /// Hand validated values to the submit collaborator.
    ///
    /// The form has already been reset when this action is produced, and
    /// the values move into the action. If the collaborator then fails, the
    /// runtime stops with its error and the values are not restored.
    Submit {
        /// Values at the moment of submission.
        values: FormValues,
    },
}
