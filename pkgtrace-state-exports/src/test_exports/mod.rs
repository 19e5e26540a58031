// Copyright (c) 2022 MASSA LABS <info@massa.net>

//! This module exposes useful tooling for testing.
//! It is only compiled and exported by the crate if the "test-exports"
//! feature is enabled.
//!
//! # Architecture
//!
//! ## `memory.rs`
//! Provides an in-memory `StateController` to run handlers against
//! within tests, together with raw-entry inspection helpers.
//!
//! ## `mock.rs`
//! Provides a mockall-generated `MockStateController` for
//! failure-injection tests.

mod memory;
mod mock;

pub use memory::MemoryStateController;
pub use mock::MockStateController;
