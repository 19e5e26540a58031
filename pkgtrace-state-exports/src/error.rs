// Copyright (c) 2022 MASSA LABS <info@massa.net>

//! This file defines the possible state backend error categories.

use displaydoc::Display;
use thiserror::Error;

/// Errors surfaced by a host state backend.
#[non_exhaustive]
#[derive(Clone, Display, Error, Debug, PartialEq, Eq)]
pub enum StateError {
    /// state backend error: {0}
    BackendError(String),
}
