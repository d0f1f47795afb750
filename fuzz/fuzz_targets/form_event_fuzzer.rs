//! Fuzz target for the form state machine
//!
//! Drive `App` with arbitrary keystrokes and direct field edits.
//!
//! # Strategy
//!
//! - Keystrokes: any character (multi-byte included) and every navigation key
//! - Direct edits: arbitrary strings written into any field
//! - Config: short and long minimum password lengths, both validation modes
//!
//! # Invariants
//!
//! - Standard invariant registry holds after every event
//! - Submit is emitted ONLY for values the schema accepts
//! - A submission ALWAYS leaves the form empty and disabled
//! - NEVER panic on any input

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use regform_app::{
    App, AppAction, AppEvent, FieldId, FormConfig, KeyInput, Schema, ValidationMode,
};
use regform_harness::{FormSnapshot, InvariantRegistry};

#[derive(Debug, Clone, Arbitrary)]
struct FormScenario {
    min_password_length: u8,
    on_touched: bool,
    events: Vec<FuzzedEvent>,
}

#[derive(Debug, Clone, Arbitrary)]
enum FuzzedEvent {
    Key(FuzzedKey),
    Edit { field: FuzzedField, value: String },
    Tick,
    Resize { cols: u16, rows: u16 },
}

#[derive(Debug, Clone, Copy, Arbitrary)]
enum FuzzedField {
    Email,
    Password,
    RepeatPassword,
}

#[derive(Debug, Clone, Copy, Arbitrary)]
enum FuzzedKey {
    Char(char),
    Enter,
    Backspace,
    Delete,
    Tab,
    BackTab,
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
}

impl From<FuzzedField> for FieldId {
    fn from(field: FuzzedField) -> Self {
        match field {
            FuzzedField::Email => FieldId::Email,
            FuzzedField::Password => FieldId::Password,
            FuzzedField::RepeatPassword => FieldId::RepeatPassword,
        }
    }
}

impl From<FuzzedKey> for KeyInput {
    fn from(key: FuzzedKey) -> Self {
        match key {
            FuzzedKey::Char(c) => KeyInput::Char(c),
            FuzzedKey::Enter => KeyInput::Enter,
            FuzzedKey::Backspace => KeyInput::Backspace,
            FuzzedKey::Delete => KeyInput::Delete,
            FuzzedKey::Tab => KeyInput::Tab,
            FuzzedKey::BackTab => KeyInput::BackTab,
            FuzzedKey::Left => KeyInput::Left,
            FuzzedKey::Right => KeyInput::Right,
            FuzzedKey::Up => KeyInput::Up,
            FuzzedKey::Down => KeyInput::Down,
            FuzzedKey::Home => KeyInput::Home,
            FuzzedKey::End => KeyInput::End,
        }
    }
}

impl From<FuzzedEvent> for AppEvent {
    fn from(event: FuzzedEvent) -> Self {
        match event {
            FuzzedEvent::Key(key) => AppEvent::Key(key.into()),
            FuzzedEvent::Edit { field, value } => {
                AppEvent::FieldChanged { field: field.into(), value }
            }
            FuzzedEvent::Tick => AppEvent::Tick,
            FuzzedEvent::Resize { cols, rows } => AppEvent::Resize(cols, rows),
        }
    }
}

fuzz_target!(|scenario: FormScenario| {
    let config = FormConfig {
        min_password_length: (scenario.min_password_length % 32) as usize + 1,
        mode: if scenario.on_touched {
            ValidationMode::OnTouched
        } else {
            ValidationMode::OnChange
        },
    };
    let schema = Schema::registration(&config);
    let invariants = InvariantRegistry::standard();
    let mut app = App::new(&config);

    for event in scenario.events.into_iter().take(512) {
        let actions = app.handle(event.into());

        for action in &actions {
            if let AppAction::Submit { values } = action {
                assert!(schema.validate(values).is_empty(), "submitted invalid values: {values:?}");
                assert!(app.form().values().is_empty(), "form not reset after submit");
                assert!(!app.submit_enabled(), "submit enabled on empty form");
            }
        }

        invariants.assert_all(&FormSnapshot::from_app(&app), "after fuzzed event");
    }
});
