//! Property-based tests for App invariants.
//!
//! Tests verify that the standard invariants hold under arbitrary event
//! sequences, in both validation modes.

use proptest::prelude::*;
use regform_app::{App, AppEvent, FieldId, FormConfig, KeyInput, ValidationMode};
use regform_harness::{FormSnapshot, InvariantRegistry};

/// Generate random key input, biased towards text that can become valid.
fn key_strategy() -> impl Strategy<Value = KeyInput> {
    prop_oneof![
        8 => prop::sample::select(vec!['a', 'b', '1', '2', '@', '.', 'é', ' '])
            .prop_map(KeyInput::Char),
        1 => Just(KeyInput::Enter),
        1 => Just(KeyInput::Backspace),
        1 => Just(KeyInput::Delete),
        1 => Just(KeyInput::Tab),
        1 => Just(KeyInput::BackTab),
        1 => Just(KeyInput::Up),
        1 => Just(KeyInput::Down),
        1 => Just(KeyInput::Left),
        1 => Just(KeyInput::Right),
        1 => Just(KeyInput::Home),
        1 => Just(KeyInput::End),
    ]
}

/// Generate random app events.
fn event_strategy() -> impl Strategy<Value = AppEvent> {
    prop_oneof![
        10 => key_strategy().prop_map(AppEvent::Key),
        2 => (prop::sample::select(FieldId::ALL.to_vec()), "[a-z0-9@.]{0,10}")
            .prop_map(|(field, value)| AppEvent::FieldChanged { field, value }),
        2 => prop::sample::select(vec!["a@b.com", "123456"]).prop_map(|value| {
            AppEvent::FieldChanged { field: FieldId::Password, value: value.to_owned() }
        }),
        1 => Just(AppEvent::Tick),
        1 => (1u16..200, 1u16..100).prop_map(|(c, r)| AppEvent::Resize(c, r)),
    ]
}

fn mode_strategy() -> impl Strategy<Value = ValidationMode> {
    prop_oneof![Just(ValidationMode::OnChange), Just(ValidationMode::OnTouched)]
}

proptest! {
    #[test]
    fn prop_app_invariants_hold(
        mode in mode_strategy(),
        events in prop::collection::vec(event_strategy(), 0..100),
    ) {
        let config = FormConfig { mode, ..FormConfig::default() };
        let mut app = App::new(&config);
        let invariants = InvariantRegistry::standard();

        for event in events {
            let _ = app.handle(event);
            let snapshot = FormSnapshot::from_app(&app);
            prop_assert!(invariants.check_all(&snapshot).is_ok());
        }
    }

    #[test]
    fn prop_submission_always_resets(
        email_local in "[a-z]{1,8}",
        password in "[a-z0-9]{6,12}",
        extra in prop::collection::vec(key_strategy(), 0..20),
    ) {
        let mut app = App::new(&FormConfig::default());
        let email = format!("{email_local}@example.com");
        for (field, value) in FieldId::ALL.into_iter().zip([&email, &password, &password]) {
            app.handle(AppEvent::FieldChanged { field, value: value.clone() });
        }
        for key in extra {
            app.handle(AppEvent::Key(key));
        }

        let was_valid = app.submit_enabled();
        let actions = app.submit();
        InvariantRegistry::standard().assert_all(&FormSnapshot::from_app(&app), "after submit");

        prop_assert_eq!(actions.is_empty(), !was_valid);
        if was_valid {
            prop_assert!(app.form().values().is_empty());
            prop_assert!(app.form().errors().is_empty());
            prop_assert!(!app.submit_enabled());
        }
    }
}
