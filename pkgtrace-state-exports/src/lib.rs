// Copyright (c) 2022 MASSA LABS <info@massa.net>

//! # Overview
//!
//! This crate defines the abstract key-value state capability that the
//! package tracking contract (`pkgtrace-contract` crate) is executed
//! against. The concrete state is owned and lifecycle-managed by the
//! host ledger platform: this crate only exposes the trait the host
//! must implement and the errors its backend may surface. The contract
//! holds no state of its own between invocations and must receive the
//! capability as an explicit argument, never reach for it as a global.
//!
//! # Architecture
//!
//! ## `controller.rs`
//! Defines the `StateController` trait through which the contract
//! issues get/put/delete calls against the host ledger state.
//!
//! ## `error.rs`
//! Defines error types for the crate.
//!
//! ## Test exports
//!
//! When the crate feature `test-exports` is enabled, tooling useful
//! for testing purposes is exported: an in-memory `StateController`
//! and a mockall-generated mock of the trait.
//! See `test_exports/mod.rs` for details.

#![warn(missing_docs)]
#![warn(unused_crate_dependencies)]

mod controller;
mod error;

pub use controller::StateController;
pub use error::StateError;

#[cfg(feature = "test-exports")]
pub mod test_exports;
