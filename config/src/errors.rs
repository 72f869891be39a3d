// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Type for configuration generation failures.
//! Every failure is a precondition violation and is fatal for the router being generated:
//! callers must discard any partial output.

use thiserror::Error;

/// The reasons why we may refuse to generate a router configuration
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Router {router}: '{object}' is not an address or network")]
    TypeMismatch { router: String, object: String },
    #[error("Unsupported construct: {0}")]
    UnsupportedConstruct(String),
    #[error("Router {router}: missing {attribute} for '{object}'")]
    MissingAttribute {
        router: String,
        attribute: &'static str,
        object: String,
    },
    #[error("Router {router}: route-map match references unregistered prefix-list '{name}'")]
    UnregisteredReference { router: String, name: String },
    #[error("Router {router}: neighbor {neighbor} already has export route-map '{route_map}'")]
    PolicyConflict {
        router: String,
        neighbor: String,
        route_map: String,
    },
    #[error("Router {router}: '{object}' already exists")]
    NameConflict { router: String, object: String },
    #[error("No node with name '{0}'")]
    NoSuchNode(String),
    #[error("Duplicate line {lineno} in route-map {name}")]
    DuplicateRouteMapLine { name: String, lineno: u32 },
    #[error("Address pool exhausted after {0} allocations")]
    AddressPoolExhausted(usize),
}

/// Result-like type for model mutations
pub type ConfigResult = Result<(), ConfigError>;

#[must_use]
pub fn stringify(conf_result: &ConfigResult) -> String {
    match conf_result {
        Ok(()) => "Ok".to_string(),
        Err(e) => format!("FAILED: {e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_context() {
        let err = ConfigError::MissingAttribute {
            router: "R1".to_string(),
            attribute: "AS number",
            object: "R2".to_string(),
        };
        assert_eq!(err.to_string(), "Router R1: missing AS number for 'R2'");
        assert_eq!(
            stringify(&Err(err)),
            "FAILED: Router R1: missing AS number for 'R2'"
        );
        assert_eq!(stringify(&Ok(())), "Ok");
    }
}
