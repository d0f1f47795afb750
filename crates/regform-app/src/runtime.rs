//! Generic runtime for application orchestration.
//!
//! The Runtime drives the application event loop, coordinating between:
//! - [`App`]: form state machine
//! - [`Driver`]: Platform-specific I/O

use crate::{App, AppAction, Driver, FormConfig};

/// Generic runtime that orchestrates App and Driver.
///
/// # Type Parameters
///
/// - `D`: Platform-specific I/O driver
pub struct Runtime<D>
where
    D: Driver,
{
    driver: D,
    app: App,
}

impl<D> Runtime<D>
where
    D: Driver,
{
    /// Create a new runtime with an empty registration form.
    pub fn new(driver: D, config: &FormConfig) -> Self {
        Self::with_app(driver, App::new(config))
    }

    /// Create a runtime around an existing App.
    pub fn with_app(driver: D, app: App) -> Self {
        Self { driver, app }
    }

    /// Run the main event loop.
    ///
    /// Each cycle polls one event, lets the App handle it, and executes the
    /// resulting actions in order before polling again. The loop ends on
    /// [`AppAction::Quit`] or when the driver runs out of input.
    ///
    /// # Errors
    ///
    /// Returns an error if the driver encounters an I/O error.
    pub async fn run(mut self) -> Result<App, D::Error> {
        self.driver.render(&self.app)?;

        while let Some(event) = self.driver.poll_event().await? {
            let actions = self.app.handle(event);
            if self.process_actions(actions)? {
                break;
            }
        }

        self.driver.stop();
        Ok(self.app)
    }

    /// Process actions returned by the App.
    ///
    /// Returns `true` if should quit.
    fn process_actions(&mut self, actions: Vec<AppAction>) -> Result<bool, D::Error> {
        for action in actions {
            match action {
                AppAction::Render => self.driver.render(&self.app)?,
                AppAction::Quit => return Ok(true),
                AppAction::Submit { values } => {
                    tracing::debug!(email = %values.email, "dispatching submission");
                    self.driver.submit(values)?;
                },
            }
        }
        Ok(false)
    }
}
