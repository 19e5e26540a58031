// Copyright (c) 2022 MASSA LABS <info@massa.net>

//! Reserved state keys and argument shapes of the contract.

/// Reserved state key under which the deployment seed value is stored.
pub const SEED_STATE_KEY: &str = "my_package";

/// Number of positional arguments of the package handlers:
/// `(id, carrier, temperature, location, datetime)`.
pub const PACKAGE_ARG_COUNT: usize = 5;
