//! Deterministic simulation harness for registration form testing.
//!
//! # Simulation Driver
//!
//! [`SimDriver`] implements [`regform_app::Driver`] over an in-memory event
//! queue, so the same [`regform_app::Runtime`] orchestration code runs in the
//! terminal and in tests. It records every submission and every rendered
//! state.
//!
//! # Invariant Testing
//!
//! The `invariants` module provides behavioral testing through invariant
//! checks. Invariants verify WHAT must be true across all execution paths, not
//! specific scenarios. Use [`InvariantRegistry::standard()`] for the form
//! invariants.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod invariants;
pub mod sim_driver;

pub use invariants::{
    CursorsInBounds, ErrorsMatchEvaluation, FormSnapshot, Invariant, InvariantKind,
    InvariantRegistry, InvariantResult, SubmitFocusRequiresValidity, ValidityMatchesSchema,
    Violation,
};
pub use sim_driver::{SimDriver, SimDriverError};
