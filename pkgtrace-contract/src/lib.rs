// Copyright (c) 2022 MASSA LABS <info@massa.net>

//! # Overview
//!
//! This crate implements a minimal ledger-state smart contract keeping
//! track of shipped packages: a single record type (asset id, carrier,
//! temperature, location, datetime) with create, read, update and
//! delete operations executed against the host key-value state
//! (see the `pkgtrace-state-exports` crate).
//!
//! The host platform drives the contract through two entry points:
//! a mutating one (`invoke`) routing `init`, `write`, `delete`,
//! `init_package` and `update_package`, and a read-only one (`query`)
//! routing `read`. Arguments arrive as an ordered list of strings and
//! results leave as raw bytes, following the host calling convention.
//! The contract performs no locking and keeps no state of its own:
//! transaction isolation and commit ordering belong to the host.
//!
//! # Architecture
//!
//! ## `contract.rs`
//! Defines `PackageContract`, the dispatch entry points and the
//! individual operation handlers.
//!
//! ## `record.rs`
//! Defines `PackageRecord`, its argument validation and its JSON wire
//! format.
//!
//! ## `config.rs`
//! Contains configuration parameters for the contract.
//!
//! ## `constants.rs`
//! Defines the reserved state keys and argument shapes.
//!
//! ## `error.rs`
//! Defines error types for the crate.

#![warn(missing_docs)]
#![warn(unused_crate_dependencies)]

mod config;
mod constants;
mod contract;
mod error;
mod record;

pub use config::ContractConfig;
pub use constants::{PACKAGE_ARG_COUNT, SEED_STATE_KEY};
pub use contract::PackageContract;
pub use error::ContractError;
pub use record::PackageRecord;

#[cfg(test)]
mod tests;
