// Copyright (c) 2022 MASSA LABS <info@massa.net>

//! This file defines the package tracking contract: the two host entry
//! points (`invoke` and `query`) and the operation handlers they route
//! to. Handlers validate their string arguments, then issue get/put/
//! delete calls against the injected host state and return raw bytes.

use crate::config::ContractConfig;
use crate::error::ContractError;
use crate::record::PackageRecord;
use pkgtrace_state_exports::StateController;
use tracing::debug;

/// The package tracking contract.
///
/// Stateless apart from its configuration: all durable state lives
/// behind the `StateController` passed into every operation, and the
/// host executes each invocation within its own transaction boundary.
#[derive(Debug, Clone, Default)]
pub struct PackageContract {
    /// contract configuration
    config: ContractConfig,
}

impl PackageContract {
    /// Creates a new contract with the given configuration.
    pub fn new(config: ContractConfig) -> Self {
        PackageContract { config }
    }

    /// Deployment entry point, invoked once by the host with exactly
    /// one argument: an opaque seed value stored verbatim under the
    /// reserved seed key.
    ///
    /// # Returns
    /// An empty payload on success
    pub fn init(
        &self,
        state: &mut dyn StateController,
        args: &[String],
    ) -> Result<Vec<u8>, ContractError> {
        if args.len() != 1 {
            return Err(ContractError::WrongArgumentCount {
                expected: 1,
                got: args.len(),
            });
        }
        state
            .put(&self.config.seed_key, args[0].clone().into_bytes())
            .map_err(|err| ContractError::StateWriteError(self.config.seed_key.clone(), err))?;
        Ok(Vec::new())
    }

    /// Mutating entry point.
    ///
    /// Routes `init` (re-invoking the deployment handler), `write`,
    /// `delete`, `init_package` and `update_package`. Any other name
    /// fails with `UnknownFunction` and touches no state.
    pub fn invoke(
        &self,
        state: &mut dyn StateController,
        function: &str,
        args: &[String],
    ) -> Result<Vec<u8>, ContractError> {
        debug!("invoke is running {}", function);
        match function {
            "init" => self.init(state, args),
            "write" => self.write(state, args),
            "delete" => self.delete(state, args),
            "init_package" => self.init_package(state, args),
            "update_package" => self.update_package(state, args),
            _ => {
                debug!("invoke did not find function: {}", function);
                Err(ContractError::UnknownFunction(function.to_string()))
            }
        }
    }

    /// Read-only entry point.
    ///
    /// Routes `read` only. Any other name fails with `UnknownFunction`
    /// and touches no state.
    pub fn query(
        &self,
        state: &mut dyn StateController,
        function: &str,
        args: &[String],
    ) -> Result<Vec<u8>, ContractError> {
        debug!("query is running {}", function);
        match function {
            "read" => self.read(state, args),
            _ => {
                debug!("query did not find function: {}", function);
                Err(ContractError::UnknownFunction(function.to_string()))
            }
        }
    }

    /// Stores an arbitrary key-value pair, overwriting unconditionally.
    ///
    /// Expects exactly 2 arguments: the key and the value. The value
    /// is stored as raw bytes; the state does not distinguish it from
    /// an encoded package record.
    fn write(
        &self,
        state: &mut dyn StateController,
        args: &[String],
    ) -> Result<Vec<u8>, ContractError> {
        if args.len() != 2 {
            return Err(ContractError::WrongArgumentCount {
                expected: 2,
                got: args.len(),
            });
        }
        let key = &args[0];
        state
            .put(key, args[1].clone().into_bytes())
            .map_err(|err| ContractError::StateWriteError(key.clone(), err))?;
        Ok(Vec::new())
    }

    /// Reads the raw bytes stored under a key, without decoding.
    ///
    /// Expects exactly 1 argument: the key. Absence of the key follows
    /// the host backend's semantics (empty bytes or a backend error).
    fn read(
        &self,
        state: &mut dyn StateController,
        args: &[String],
    ) -> Result<Vec<u8>, ContractError> {
        if args.len() != 1 {
            return Err(ContractError::WrongArgumentCount {
                expected: 1,
                got: args.len(),
            });
        }
        let key = &args[0];
        state
            .get(key)
            .map_err(|err| ContractError::StateReadError(key.clone(), err))
    }

    /// Removes a key and its value from the state.
    ///
    /// Expects exactly 1 argument: the key.
    fn delete(
        &self,
        state: &mut dyn StateController,
        args: &[String],
    ) -> Result<Vec<u8>, ContractError> {
        if args.len() != 1 {
            return Err(ContractError::WrongArgumentCount {
                expected: 1,
                got: args.len(),
            });
        }
        let key = &args[0];
        state
            .delete(key)
            .map_err(|err| ContractError::StateDeleteError(key.clone(), err))?;
        Ok(Vec::new())
    }

    /// Creates a package record under its asset id, with create-once
    /// semantics.
    ///
    /// Expects exactly 5 non-empty arguments:
    /// `(id, carrier, temperature, location, datetime)`.
    ///
    /// The existence check decodes whatever bytes are already stored
    /// under the id and fails with `PackageAlreadyExists` only when
    /// the decoded record carries the same id. Bytes that do not
    /// decode to a matching record do not count as existing and are
    /// overwritten: creation against an empty state entry must work,
    /// at the cost of a corrupt record not blocking re-creation.
    fn init_package(
        &self,
        state: &mut dyn StateController,
        args: &[String],
    ) -> Result<Vec<u8>, ContractError> {
        let record = PackageRecord::from_args(args)?;

        let stored = state
            .get(&record.asset_id)
            .map_err(|err| ContractError::PackageLookupError(record.asset_id.clone(), err))?;
        let existing = PackageRecord::decode(&stored);
        if existing.asset_id == record.asset_id {
            debug!("package already exists: {}", record.asset_id);
            return Err(ContractError::PackageAlreadyExists(record.asset_id));
        }

        let encoded = record.encode()?;
        state
            .put(&record.asset_id, encoded)
            .map_err(|err| ContractError::StateWriteError(record.asset_id.clone(), err))?;
        Ok(Vec::new())
    }

    /// Overwrites the package record under its asset id, last writer
    /// wins.
    ///
    /// Same argument contract as `init_package`, but performs no
    /// existence check: updating is allowed whether or not a record is
    /// already stored, intentionally bypassing the create-once
    /// invariant.
    fn update_package(
        &self,
        state: &mut dyn StateController,
        args: &[String],
    ) -> Result<Vec<u8>, ContractError> {
        let record = PackageRecord::from_args(args)?;

        let encoded = record.encode()?;
        state
            .put(&record.asset_id, encoded)
            .map_err(|err| ContractError::StateWriteError(record.asset_id.clone(), err))?;
        Ok(Vec::new())
    }
}
