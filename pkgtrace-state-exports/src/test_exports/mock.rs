// Copyright (c) 2022 MASSA LABS <info@massa.net>
// This file defines utilities to mock the crate for testing purposes

use crate::{StateController, StateError};

mockall::mock! {
    /// Mock of `StateController` for failure-injection tests.
    pub StateController {}

    impl StateController for StateController {
        fn get(&self, key: &str) -> Result<Vec<u8>, StateError>;
        fn put(&mut self, key: &str, value: Vec<u8>) -> Result<(), StateError>;
        fn delete(&mut self, key: &str) -> Result<(), StateError>;
    }
}

impl std::fmt::Debug for MockStateController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "MockStateController")
    }
}
