// Copyright (c) 2022 MASSA LABS <info@massa.net>

use crate::constants::SEED_STATE_KEY;

/// Configuration of the package tracking contract.
#[derive(Debug, Clone)]
pub struct ContractConfig {
    /// reserved state key under which the deployment seed is stored
    pub seed_key: String,
}

impl Default for ContractConfig {
    fn default() -> Self {
        Self {
            seed_key: SEED_STATE_KEY.to_string(),
        }
    }
}
