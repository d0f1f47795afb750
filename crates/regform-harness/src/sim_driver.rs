//! Simulation driver implementing the Driver trait.
//!
//! `SimDriver` provides the same interface as `TerminalDriver` but for
//! deterministic testing. It implements [`Driver`] so the same
//! [`regform_app::Runtime`] orchestration code runs in both production and
//! simulation.
//!
//! Clones share state: keep a clone to inject events and inspect results
//! while the runtime owns the driver.

use std::{
    collections::VecDeque,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use regform_app::{App, AppEvent, Driver, FormValues, KeyInput};
use thiserror::Error;

use crate::invariants::{FormSnapshot, InvariantRegistry, Violation};

/// Error type for simulation driver.
#[derive(Debug, Clone, Error)]
pub enum SimDriverError {
    /// A rendered state broke one or more invariants.
    #[error("invariant violation: {0:?}")]
    Invariant(Vec<Violation>),

    /// The submit collaborator was configured to refuse submissions.
    #[error("submission rejected")]
    SubmitRejected,
}

/// Shared state for event injection.
///
/// This allows injection from outside async contexts.
#[derive(Default)]
struct SharedState {
    pending_events: VecDeque<AppEvent>,
    submissions: Vec<FormValues>,
    renders: usize,
    last_snapshot: Option<FormSnapshot>,
    reject_submissions: bool,
    stopped: bool,
}

/// Simulation driver for deterministic testing.
///
/// Implements [`Driver`] trait so the same [`regform_app::Runtime`]
/// orchestration code runs in both the terminal UI and simulation tests.
/// Input ends when the event queue is empty.
#[derive(Clone, Default)]
pub struct SimDriver {
    state: Arc<Mutex<SharedState>>,
    invariants: Option<Arc<InvariantRegistry>>,
}

impl SimDriver {
    /// Create a new simulation driver.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable invariant checking on every render.
    #[must_use]
    pub fn with_invariants(mut self, registry: InvariantRegistry) -> Self {
        self.invariants = Some(Arc::new(registry));
        self
    }

    /// Inject an `AppEvent` for processing.
    pub fn inject_event(&self, event: AppEvent) {
        self.state().pending_events.push_back(event);
    }

    /// Inject a key press.
    pub fn inject_key(&self, key: KeyInput) {
        self.inject_event(AppEvent::Key(key));
    }

    /// Inject one key press per character.
    pub fn type_text(&self, text: &str) {
        let mut state = self.state();
        state.pending_events.extend(text.chars().map(|c| AppEvent::Key(KeyInput::Char(c))));
    }

    /// Make subsequent submissions fail with [`SimDriverError::SubmitRejected`].
    pub fn reject_submissions(&self, reject: bool) {
        self.state().reject_submissions = reject;
    }

    /// Check if there are pending events to process.
    pub fn has_pending(&self) -> bool {
        !self.state().pending_events.is_empty()
    }

    /// Values received through [`Driver::submit`], in order.
    pub fn submissions(&self) -> Vec<FormValues> {
        self.state().submissions.clone()
    }

    /// Number of renders performed.
    pub fn renders(&self) -> usize {
        self.state().renders
    }

    /// State captured at the most recent render.
    pub fn last_snapshot(&self) -> Option<FormSnapshot> {
        self.state().last_snapshot.clone()
    }

    /// Whether the runtime has stopped the driver.
    pub fn is_stopped(&self) -> bool {
        self.state().stopped
    }

    fn state(&self) -> MutexGuard<'_, SharedState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Driver for SimDriver {
    type Error = SimDriverError;

    async fn poll_event(&mut self) -> Result<Option<AppEvent>, Self::Error> {
        Ok(self.state().pending_events.pop_front())
    }

    fn render(&mut self, app: &App) -> Result<(), Self::Error> {
        let snapshot = FormSnapshot::from_app(app);
        if let Some(registry) = &self.invariants {
            registry.check_all(&snapshot).map_err(SimDriverError::Invariant)?;
        }

        let mut state = self.state();
        state.renders += 1;
        state.last_snapshot = Some(snapshot);
        Ok(())
    }

    fn submit(&mut self, values: FormValues) -> Result<(), Self::Error> {
        let mut state = self.state();
        if state.reject_submissions {
            tracing::debug!("simulated collaborator rejected submission");
            return Err(SimDriverError::SubmitRejected);
        }
        state.submissions.push(values);
        Ok(())
    }

    fn stop(&mut self) {
        self.state().stopped = true;
    }
}

#[cfg(test)]
mod tests {
    use regform_app::FormConfig;

    use super::*;

    #[test]
    fn inject_event_queues_event() {
        let driver = SimDriver::new();
        driver.inject_event(AppEvent::Tick);

        assert!(driver.has_pending());
    }

    #[test]
    fn type_text_queues_one_key_per_char() {
        let driver = SimDriver::new();
        driver.type_text("ab");

        let state = driver.state();
        assert_eq!(state.pending_events.len(), 2);
        assert_eq!(state.pending_events.front(), Some(&AppEvent::Key(KeyInput::Char('a'))));
    }

    #[test]
    fn clones_share_state() {
        let driver = SimDriver::new();
        let mut handle = driver.clone();

        handle.submit(FormValues::new("a@b.com", "123456", "123456")).ok();
        assert_eq!(driver.submissions().len(), 1);
    }

    #[test]
    fn render_records_snapshot() {
        let mut driver = SimDriver::new().with_invariants(InvariantRegistry::standard());
        let app = App::new(&FormConfig::default());

        assert!(driver.render(&app).is_ok());
        assert_eq!(driver.renders(), 1);
        assert!(driver.last_snapshot().is_some_and(|s| !s.is_valid));
    }

    #[test]
    fn rejected_submission_is_not_recorded() {
        let mut driver = SimDriver::new();
        driver.reject_submissions(true);

        let result = driver.submit(FormValues::default());
        assert!(matches!(result, Err(SimDriverError::SubmitRejected)));
        assert!(driver.submissions().is_empty());
    }
}
