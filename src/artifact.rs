//! The bundled `HelloHedera` build artifact.
//!
//! The contract is compiled ahead of time with `solc --combined-json abi,bin`
//! and the resulting JSON ships inside the binary. The ledger stores the hex
//! text of the bytecode verbatim, so the extracted value stays a UTF-8 hex
//! string rather than decoded bytes.

use crate::resolver::{self, ResolveError};
use serde_json::Value;
use thiserror::Error;

/// Logical name of the bundled artifact, mirroring its resource path.
pub const CONTRACT_ARTIFACT_NAME: &str = "solidity/HelloHedera.json";

/// Key path from the artifact root down to the deployable bytecode.
pub const CONTRACT_BYTECODE_PATH: [&str; 3] = [
    "contracts",
    "src/main/solidity/HelloHedera.sol:HelloHedera",
    "bin",
];

const CONTRACT_ARTIFACT_JSON: &str = include_str!("../resources/solidity/HelloHedera.json");

#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("failed to parse bundled artifact '{name}'")]
    Parse {
        name: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to resolve bytecode in '{name}'")]
    Resolve {
        name: &'static str,
        #[source]
        source: ResolveError,
    },

    #[error("bytecode in '{name}' is not a string")]
    NotAString { name: &'static str },
}

/// Extract the `HelloHedera` creation bytecode from the bundled artifact.
///
/// The artifact is parsed fresh on every call and discarded afterwards;
/// nothing is cached between invocations.
pub fn contract_bytecode() -> Result<Vec<u8>, ArtifactError> {
    let document: Value =
        serde_json::from_str(CONTRACT_ARTIFACT_JSON).map_err(|source| ArtifactError::Parse {
            name: CONTRACT_ARTIFACT_NAME,
            source,
        })?;
    let leaf =
        resolver::resolve(&document, &CONTRACT_BYTECODE_PATH).map_err(|source| {
            ArtifactError::Resolve {
                name: CONTRACT_ARTIFACT_NAME,
                source,
            }
        })?;
    let hex_text = leaf.as_str().ok_or(ArtifactError::NotAString {
        name: CONTRACT_ARTIFACT_NAME,
    })?;
    Ok(hex_text.as_bytes().to_vec())
}
