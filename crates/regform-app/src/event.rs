//! Application input events.
//!
//! This module defines [`AppEvent`], the set of inputs that drive the
//! [`crate::App`] state machine. Events originate from user interaction
//! (keyboard, resize), system ticks, or programmatic input such as a paste.

use crate::{FieldId, KeyInput};

/// Events processed by the App state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// Keyboard input.
    Key(KeyInput),

    /// Replace a field's value wholesale.
    FieldChanged {
        /// Field being changed.
        field: FieldId,
        /// New text.
        value: String,
    },

    /// Periodic tick.
    Tick,

    /// Terminal resize (columns, rows).
    Resize(u16, u16),
}
