//! Application state machine.
//!
//! This module defines the [`App`] state machine, which manages the
//! interactive state of the registration form completely decoupled from
//! terminal I/O.
//!
//! This is a pure state machine: it consumes [`crate::AppEvent`] inputs and
//! produces [`crate::AppAction`] instructions for the runtime to execute.
//!
//! # Responsibilities
//!
//! - Edits the focused field through a per-field cursor.
//! - Re-validates synchronously on every change, so the submit gate always
//!   reflects the latest edit.
//! - Moves focus to the submit control when the form becomes valid.
//! - Emits [`crate::AppAction::Submit`] and resets the form on submission.

use crate::{
    AppAction, AppEvent, FieldId, Focus, FocusObserver, Form, FormConfig, KeyInput,
    input::byte_offset,
};

/// Application state machine.
///
/// Pure state machine that processes events and produces actions.
/// No I/O dependencies - fully testable in simulation.
#[derive(Debug, Clone)]
pub struct App {
    /// Field values and validation state.
    form: Form,
    /// Control receiving keys.
    focus: Focus,
    /// Detects the invalid -> valid transition.
    observer: FocusObserver,
    /// Cursor position (in characters) per field.
    cursors: [usize; 3],
    /// Terminal dimensions (columns, rows).
    terminal_size: (u16, u16),
    /// Transient status message. `None` if no message.
    status_message: Option<String>,
    /// Successful submissions since start.
    submissions: u64,
}

impl App {
    /// Create an App with an empty registration form.
    pub fn new(config: &FormConfig) -> Self {
        Self::with_form(Form::new(config))
    }

    /// Create an App around an existing form.
    pub fn with_form(form: Form) -> Self {
        let observer = FocusObserver::new(form.is_valid());
        let cursors = FieldId::ALL.map(|field| form.value(field).chars().count());
        Self {
            form,
            focus: Focus::default(),
            observer,
            cursors,
            terminal_size: (80, 24),
            status_message: None,
            submissions: 0,
        }
    }

    /// Process an event and return actions.
    pub fn handle(&mut self, event: AppEvent) -> Vec<AppAction> {
        match event {
            AppEvent::Key(key) => self.handle_key(key),
            AppEvent::FieldChanged { field, value } => {
                self.cursors[field.index()] = value.chars().count();
                self.change(field, value);
                vec![AppAction::Render]
            },
            AppEvent::Tick => vec![],
            AppEvent::Resize(cols, rows) => {
                self.terminal_size = (cols, rows);
                vec![AppAction::Render]
            },
        }
    }

    /// Submit the form.
    ///
    /// Produces [`AppAction::Submit`] and resets the form when valid. While
    /// invalid the submit control is disabled and this is a no-op.
    pub fn submit(&mut self) -> Vec<AppAction> {
        match self.form.submit() {
            Ok(values) => {
                self.cursors = [0; 3];
                self.focus = Focus::default();
                self.observer.observe(self.form.is_valid());
                self.submissions += 1;
                self.status_message = Some(format!("Registered {}", values.email));
                tracing::debug!(submissions = self.submissions, "form submitted and reset");
                vec![AppAction::Submit { values }, AppAction::Render]
            },
            Err(e) => {
                tracing::debug!("submit ignored: {e}");
                vec![]
            },
        }
    }

    /// Quit the application.
    pub fn quit(&self) -> Vec<AppAction> {
        vec![AppAction::Quit]
    }

    /// Form values and validation state.
    pub fn form(&self) -> &Form {
        &self.form
    }

    /// Control receiving keys.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Cursor position (in characters) within a field.
    pub fn cursor(&self, field: FieldId) -> usize {
        self.cursors[field.index()]
    }

    /// Whether the submit control accepts activation.
    pub fn submit_enabled(&self) -> bool {
        self.form.is_valid()
    }

    /// Successful submissions since start.
    pub fn submissions(&self) -> u64 {
        self.submissions
    }

    /// Terminal dimensions (columns, rows).
    pub fn terminal_size(&self) -> (u16, u16) {
        self.terminal_size
    }

    /// Transient status message. `None` if no message.
    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    fn handle_key(&mut self, key: KeyInput) -> Vec<AppAction> {
        match key {
            KeyInput::Esc => self.quit(),
            KeyInput::Tab | KeyInput::Down => {
                self.cycle_focus(true);
                vec![AppAction::Render]
            },
            KeyInput::BackTab | KeyInput::Up => {
                self.cycle_focus(false);
                vec![AppAction::Render]
            },
            _ => match self.focus {
                Focus::Field(field) => self.handle_field_key(field, key),
                Focus::Submit => match key {
                    KeyInput::Enter | KeyInput::Char(' ') => self.submit(),
                    _ => vec![],
                },
            },
        }
    }

    fn handle_field_key(&mut self, field: FieldId, key: KeyInput) -> Vec<AppAction> {
        let idx = field.index();
        let cursor = self.cursors[idx];
        let len = self.form.value(field).chars().count();

        match key {
            KeyInput::Char(c) => {
                let mut value = self.form.value(field).to_owned();
                value.insert(byte_offset(&value, cursor), c);
                self.cursors[idx] = cursor.saturating_add(1);
                self.change(field, value);
            },
            KeyInput::Backspace => {
                if cursor == 0 {
                    return vec![];
                }
                let mut value = self.form.value(field).to_owned();
                value.remove(byte_offset(&value, cursor - 1));
                self.cursors[idx] = cursor - 1;
                self.change(field, value);
            },
            KeyInput::Delete => {
                if cursor >= len {
                    return vec![];
                }
                let mut value = self.form.value(field).to_owned();
                value.remove(byte_offset(&value, cursor));
                self.change(field, value);
            },
            KeyInput::Left => self.cursors[idx] = cursor.saturating_sub(1),
            KeyInput::Right => self.cursors[idx] = cursor.saturating_add(1).min(len),
            KeyInput::Home => self.cursors[idx] = 0,
            KeyInput::End => self.cursors[idx] = len,
            KeyInput::Enter => {
                // Implicit submission; falls through to the next field while
                // the submit control is disabled.
                if self.form.is_valid() {
                    return self.submit();
                }
                self.cycle_focus(true);
            },
            KeyInput::Tab
            | KeyInput::BackTab
            | KeyInput::Up
            | KeyInput::Down
            | KeyInput::Esc => return vec![],
        }

        vec![AppAction::Render]
    }

    /// Apply a new value, then run the focus observer.
    fn change(&mut self, field: FieldId, value: String) {
        self.form.set_value(field, value);

        let len = self.form.value(field).chars().count();
        let idx = field.index();
        self.cursors[idx] = self.cursors[idx].min(len);

        if self.observer.observe(self.form.is_valid()) {
            tracing::debug!(%field, "form became valid, focusing submit");
            self.move_focus(Focus::Submit);
        } else if self.focus == Focus::Submit && !self.form.is_valid() {
            // Disabled controls cannot hold focus.
            let target = self.form.evaluation().iter().next().map_or(field, |(f, _)| f);
            self.move_focus(Focus::Field(target));
        }
    }

    /// Move focus one control forward or back. The submit control sits
    /// after the last field and is skipped while disabled.
    fn cycle_focus(&mut self, forward: bool) {
        let wrap = if forward { FieldId::Email } else { FieldId::RepeatPassword };
        let target = match self.focus {
            Focus::Field(field) => {
                let neighbour = if forward { field.next() } else { field.prev() };
                match neighbour {
                    Some(next) => Focus::Field(next),
                    None if self.submit_enabled() => Focus::Submit,
                    None => Focus::Field(wrap),
                }
            },
            Focus::Submit => Focus::Field(wrap),
        };
        self.move_focus(target);
    }

    fn move_focus(&mut self, target: Focus) {
        if let Some(field) = self.focus.field()
            && self.focus != target
        {
            self.form.touch(field);
        }
        self.focus = target;
    }
}
