//! Terminal UI for the registration form
//!
//! A thin shell over [`regform_app::Driver`] that provides terminal-specific
//! I/O. All orchestration logic lives in the generic [`regform_app::Runtime`]
//!
//! This crate only handles terminal input, rendering and the submission log.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod terminal;
pub mod ui;

pub use regform_app::{App, AppAction, AppEvent, Driver, KeyInput, Runtime};
pub use terminal::{TerminalDriver, TerminalError};
