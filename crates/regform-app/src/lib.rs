//! Application layer for the registration form
//!
//! Pure state machines and a generic runtime for a three-field registration
//! form, enabling deterministic simulation testing with the same code that
//! runs in the terminal frontend.
//!
//! # Components
//!
//! - [`Schema`]: declarative per-field validation rules
//! - [`Form`]: field values, error state and aggregate validity
//! - [`App`]: UI state machine (key handling, focus, submission)
//! - [`Driver`]: Trait for platform-specific I/O abstraction
//! - [`Runtime`]: Generic orchestration loop using Driver

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod action;
mod app;
mod config;
mod driver;
mod error;
mod event;
mod field;
mod focus;
mod form;
mod input;
mod runtime;
mod validation;

pub use action::AppAction;
pub use app::App;
pub use config::{DEFAULT_MIN_PASSWORD_LENGTH, FormConfig, ValidationMode};
pub use driver::Driver;
pub use error::{ConfigError, FormError};
pub use event::AppEvent;
pub use field::{FieldId, FormValues};
pub use focus::{Focus, FocusObserver};
pub use form::Form;
pub use input::KeyInput;
pub use runtime::Runtime;
pub use validation::{FieldErrors, FieldRules, Rule, Schema, SchemaBuilder};
