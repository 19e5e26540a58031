// Copyright (c) 2022 MASSA LABS <info@massa.net>

//! This file defines the package record managed by the contract and
//! its JSON wire format.

use crate::constants::PACKAGE_ARG_COUNT;
use crate::error::ContractError;
use serde::{Deserialize, Serialize};

/// A tracked package, keyed in the host state by its asset id.
///
/// The wire format is a flat JSON object whose keys follow the field
/// declaration order: `assetId`, `carrier`, `temperature`, `location`,
/// `datetime`. Values stored by older deployments used the same field
/// set, so round-trip decoding recovers identical field values.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PackageRecord {
    /// unique package identifier, immutable once created
    #[serde(rename = "assetId", default)]
    pub asset_id: String,
    /// carrier currently transporting the package
    #[serde(default)]
    pub carrier: String,
    /// last reported temperature reading
    #[serde(default)]
    pub temperature: String,
    /// last reported location
    #[serde(default)]
    pub location: String,
    /// timestamp of the last report
    #[serde(default)]
    pub datetime: String,
}

impl PackageRecord {
    /// Builds a record from the positional handler arguments
    /// `(id, carrier, temperature, location, datetime)`.
    ///
    /// Checks the argument count first, then each argument's
    /// non-emptiness in positional order, failing on the first blank
    /// one with its 1-based ordinal.
    pub fn from_args(args: &[String]) -> Result<Self, ContractError> {
        if args.len() != PACKAGE_ARG_COUNT {
            return Err(ContractError::WrongArgumentCount {
                expected: PACKAGE_ARG_COUNT,
                got: args.len(),
            });
        }
        for (position, arg) in args.iter().enumerate() {
            if arg.is_empty() {
                return Err(ContractError::EmptyArgument(position + 1));
            }
        }
        Ok(PackageRecord {
            asset_id: args[0].clone(),
            carrier: args[1].clone(),
            temperature: args[2].clone(),
            location: args[3].clone(),
            datetime: args[4].clone(),
        })
    }

    /// Encodes the record to its JSON wire format.
    pub fn encode(&self) -> Result<Vec<u8>, ContractError> {
        serde_json::to_vec(self).map_err(|err| ContractError::RecordEncodeError(err.to_string()))
    }

    /// Decodes raw state bytes into a record.
    ///
    /// Decoding is tolerant: bytes that do not parse as a record yield
    /// the default (all-empty) record instead of an error, so that
    /// creation against an empty or foreign state entry can proceed.
    pub fn decode(bytes: &[u8]) -> Self {
        serde_json::from_slice(bytes).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn args(values: [&str; 5]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn from_args_builds_record() {
        let record = PackageRecord::from_args(&args([
            "A1",
            "CarrierX",
            "20C",
            "Warehouse1",
            "2024-01-01T00:00:00Z",
        ]))
        .unwrap();
        assert_eq!(record.asset_id, "A1");
        assert_eq!(record.carrier, "CarrierX");
        assert_eq!(record.temperature, "20C");
        assert_eq!(record.location, "Warehouse1");
        assert_eq!(record.datetime, "2024-01-01T00:00:00Z");
    }

    #[test]
    fn from_args_checks_count_before_emptiness() {
        // both violations present: the arity error must win
        let res = PackageRecord::from_args(&args(["", "", "", "", ""])[..3]);
        assert_matches!(
            res,
            Err(ContractError::WrongArgumentCount {
                expected: 5,
                got: 3
            })
        );
    }

    #[test]
    fn from_args_reports_first_blank_position() {
        for position in 0..5 {
            let mut values = args(["A1", "c", "t", "l", "d"]);
            values[position].clear();
            let res = PackageRecord::from_args(&values);
            assert_matches!(res, Err(ContractError::EmptyArgument(p)) if p == position + 1);
        }
    }

    #[test]
    fn wire_format_uses_expected_field_names_and_order() {
        let record = PackageRecord::from_args(&args([
            "A1",
            "CarrierX",
            "20C",
            "Warehouse1",
            "2024-01-01T00:00:00Z",
        ]))
        .unwrap();
        let encoded = record.encode().unwrap();
        assert_eq!(
            String::from_utf8(encoded).unwrap(),
            r#"{"assetId":"A1","carrier":"CarrierX","temperature":"20C","location":"Warehouse1","datetime":"2024-01-01T00:00:00Z"}"#
        );
    }

    #[test]
    fn wire_format_escapes_special_characters() {
        let record = PackageRecord::from_args(&args(["A\"1", "c", "t", "l", "d"])).unwrap();
        let encoded = record.encode().unwrap();
        assert_eq!(PackageRecord::decode(&encoded), record);
    }

    #[test]
    fn decode_tolerates_garbage() {
        assert_eq!(PackageRecord::decode(b""), PackageRecord::default());
        assert_eq!(PackageRecord::decode(b"not json"), PackageRecord::default());
        assert_eq!(PackageRecord::decode(b"[1,2,3]"), PackageRecord::default());
    }

    #[test]
    fn decode_fills_missing_fields_with_defaults() {
        let record = PackageRecord::decode(br#"{"assetId":"A1"}"#);
        assert_eq!(record.asset_id, "A1");
        assert_eq!(record.carrier, "");
    }
}
