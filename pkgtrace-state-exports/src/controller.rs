// Copyright (c) 2022 MASSA LABS <info@massa.net>

//! This file defines the trait the contract uses to access the ledger
//! state held by the host platform.

use crate::StateError;
use std::fmt::Debug;

/// Key-value state capability provided by the host ledger platform.
///
/// Each contract invocation runs within a host-managed transaction
/// boundary: calls are synchronous, there is no locking to perform on
/// this side, and a host abort makes the whole invocation take effect
/// all-or-nothing.
pub trait StateController: Send + Sync + Debug {
    /// Gets a copy of the value stored under a key.
    ///
    /// Absence of the key is host-defined: backends may return empty
    /// bytes or an error, and callers must not rely on either choice.
    ///
    /// # Returns
    /// The stored bytes, or a backend error
    fn get(&self, key: &str) -> Result<Vec<u8>, StateError>;

    /// Stores a value under a key, overwriting any previous value.
    fn put(&mut self, key: &str, value: Vec<u8>) -> Result<(), StateError>;

    /// Removes a key and its value.
    fn delete(&mut self, key: &str) -> Result<(), StateError>;
}
