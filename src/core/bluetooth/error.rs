//! Error types for identifier validation and registry construction.

use std::fmt;

use thiserror::Error;

/// Which registry entry an identifier belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentifierRole {
    DeviceName,
    MemorySpiOpCode,
    ExtractorService,
    KeyExtract,
    BlobExtract,
    Revert,
}

impl fmt::Display for IdentifierRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            IdentifierRole::DeviceName => "device name",
            IdentifierRole::MemorySpiOpCode => "memory SPI opcode",
            IdentifierRole::ExtractorService => "extractor service",
            IdentifierRole::KeyExtract => "key extract characteristic",
            IdentifierRole::BlobExtract => "blob extract characteristic",
            IdentifierRole::Revert => "revert characteristic",
        };
        f.write_str(name)
    }
}

/// A single identifier that failed validation
#[derive(Debug, Error)]
pub enum IdentityError {
    #[error("malformed identifier {literal:?}: expected a canonical 8-4-4-4-12 UUID")]
    MalformedIdentifier {
        literal: String,
        #[source]
        source: Option<uuid::Error>,
    },

    #[error("device name must not be empty")]
    EmptyDeviceName,

    #[error("opcode {0:#x} does not fit in a single byte")]
    OpCodeOutOfRange(u64),
}

/// Registry construction failed. Every failing entry is listed, not just the first.
#[derive(Debug, Error)]
#[error("identity registry is invalid: {}", summarize(.failures))]
pub struct RegistryError {
    pub failures: Vec<(IdentifierRole, IdentityError)>,
}

impl RegistryError {
    /// Returns the error recorded for `role`, if that entry failed
    pub fn failure_for(&self, role: IdentifierRole) -> Option<&IdentityError> {
        self.failures
            .iter()
            .find(|(r, _)| *r == role)
            .map(|(_, e)| e)
    }
}

fn summarize(failures: &[(IdentifierRole, IdentityError)]) -> String {
    failures
        .iter()
        .map(|(role, err)| format!("{}: {}", role, err))
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_error_lists_every_failure() {
        let err = RegistryError {
            failures: vec![
                (IdentifierRole::DeviceName, IdentityError::EmptyDeviceName),
                (IdentifierRole::MemorySpiOpCode, IdentityError::OpCodeOutOfRange(0x1ff)),
            ],
        };
        let message = err.to_string();
        assert!(message.contains("device name: device name must not be empty"));
        assert!(message.contains("memory SPI opcode: opcode 0x1ff"));
        assert!(err.failure_for(IdentifierRole::Revert).is_none());
        assert!(matches!(
            err.failure_for(IdentifierRole::DeviceName),
            Some(IdentityError::EmptyDeviceName)
        ));
    }
}
