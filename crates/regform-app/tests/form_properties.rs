//! Property-based tests for the form state machine.
//!
//! Tests verify that validity, error reporting and focus rules hold under
//! arbitrary value combinations and key sequences.

use proptest::prelude::*;
use regform_app::{
    App, AppAction, AppEvent, FieldId, Focus, FocusObserver, FormConfig, FormValues, KeyInput,
    Schema,
};

/// Addresses the email rule accepts.
fn email_strategy() -> impl Strategy<Value = String> {
    ("[a-z0-9._+-]{1,12}", "[a-z0-9]{1,10}", "[a-z]{2,5}")
        .prop_map(|(local, domain, tld)| format!("{local}@{domain}.{tld}"))
}

/// Generate random key input.
fn key_strategy() -> impl Strategy<Value = KeyInput> {
    prop_oneof![
        6 => prop::char::range('!', '~').prop_map(KeyInput::Char),
        1 => Just(KeyInput::Enter),
        1 => Just(KeyInput::Backspace),
        1 => Just(KeyInput::Delete),
        1 => Just(KeyInput::Tab),
        1 => Just(KeyInput::BackTab),
        1 => Just(KeyInput::Left),
        1 => Just(KeyInput::Right),
        1 => Just(KeyInput::Home),
        1 => Just(KeyInput::End),
    ]
}

proptest! {
    #[test]
    fn prop_conforming_values_are_valid(
        email in email_strategy(),
        password in "[ -~]{6,20}",
    ) {
        let mut app = App::new(&FormConfig::default());
        for (field, value) in FieldId::ALL.into_iter().zip([&email, &password, &password]) {
            app.handle(AppEvent::FieldChanged { field, value: value.clone() });
        }

        prop_assert!(app.form().is_valid());
        prop_assert!(app.submit_enabled());
        prop_assert!(app.form().errors().is_empty());
        prop_assert_eq!(app.focus(), Focus::Submit);
    }

    #[test]
    fn prop_short_password_always_invalid(
        email in email_strategy(),
        password in "[ -~]{1,5}",
    ) {
        let schema = Schema::registration(&FormConfig::default());
        let errors = schema.validate(&FormValues::new(email, password.clone(), password));

        prop_assert!(errors.contains(FieldId::Password));
        prop_assert!(!errors.contains(FieldId::Email));
        prop_assert!(!errors.contains(FieldId::RepeatPassword));
    }

    #[test]
    fn prop_validity_tracks_schema(keys in prop::collection::vec(key_strategy(), 0..80)) {
        let config = FormConfig::default();
        let schema = Schema::registration(&config);
        let mut app = App::new(&config);

        for key in keys {
            let actions = app.handle(AppEvent::Key(key));

            for action in &actions {
                if let AppAction::Submit { values } = action {
                    // Only valid values leave the form
                    prop_assert!(schema.validate(values).is_empty());
                    prop_assert!(app.form().values().is_empty());
                }
            }

            let evaluation = schema.validate(app.form().values());
            prop_assert_eq!(app.form().is_valid(), evaluation.is_empty());
            prop_assert_eq!(app.form().evaluation(), &evaluation);

            // Reported errors are a subset of the evaluation
            for (field, message) in app.form().errors().iter() {
                prop_assert_eq!(evaluation.get(field), Some(message));
            }

            // A disabled submit control never holds focus
            if app.focus() == Focus::Submit {
                prop_assert!(app.submit_enabled());
            }

            for field in FieldId::ALL {
                prop_assert!(app.cursor(field) <= app.form().value(field).chars().count());
            }
        }
    }

    #[test]
    fn prop_observer_fires_on_rising_edges(seq in prop::collection::vec(any::<bool>(), 0..50)) {
        let mut observer = FocusObserver::new(false);
        let mut previous = false;

        for valid in seq {
            let fired = observer.observe(valid);
            prop_assert_eq!(fired, valid && !previous);
            previous = valid;
        }
    }
}
