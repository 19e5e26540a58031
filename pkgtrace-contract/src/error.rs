// Copyright (c) 2022 MASSA LABS <info@massa.net>

//! This file defines all possible contract error categories.

use displaydoc::Display;
use pkgtrace_state_exports::StateError;
use thiserror::Error;

/// Errors of the package tracking contract.
///
/// Every error is surfaced to the host immediately: the contract
/// performs no retry and no rollback of its own (a host abort makes
/// the invocation take effect all-or-nothing).
#[non_exhaustive]
#[derive(Clone, Display, Error, Debug)]
pub enum ContractError {
    /// received unknown function invocation: {0}
    UnknownFunction(String),

    /// incorrect number of arguments: expecting {expected}, got {got}
    WrongArgumentCount {
        /// arity of the invoked handler
        expected: usize,
        /// number of arguments received
        got: usize,
    },

    /// argument {0} must be a non-empty string
    EmptyArgument(usize),

    /// package already exists: {0}
    PackageAlreadyExists(String),

    /// failed to look up package {0}: {1}
    PackageLookupError(String, #[source] StateError),

    /// failed to write state entry {0}: {1}
    StateWriteError(String, #[source] StateError),

    /// failed to read state entry {0}: {1}
    StateReadError(String, #[source] StateError),

    /// failed to delete state entry {0}: {1}
    StateDeleteError(String, #[source] StateError),

    /// failed to encode package record: {0}
    RecordEncodeError(String),
}
