//! Identity registry for the PGP Key Extractor peripheral
//! Holds the validated identifiers the BLE session layer uses to find the
//! peripheral and address its characteristics. Built once, read-only afterwards.

use log::{error, info};
use serde::Serialize;

use crate::core::bluetooth::constants::{
    BLOB_EXTRACT_UUID, DEVICE_NAME, EXTRACTOR_SERVICE_UUID, KEY_EXTRACT_UUID, MEMORY_DEVICE_SPI,
    REVERT_UUID,
};
use crate::core::bluetooth::error::{IdentifierRole, IdentityError, RegistryError};
use crate::core::bluetooth::types::{CharacteristicId, DeviceName, OpCode};

/// Unvalidated registry inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistryLiterals<'a> {
    pub device_name: &'a str,
    pub memory_spi_op_code: u64,
    pub extractor_service_uuid: &'a str,
    pub key_extract_uuid: &'a str,
    pub blob_extract_uuid: &'a str,
    pub revert_uuid: &'a str,
}

impl RegistryLiterals<'static> {
    /// The literal set the peripheral firmware ships with
    pub const SHIPPED: Self = Self {
        device_name: DEVICE_NAME,
        memory_spi_op_code: MEMORY_DEVICE_SPI,
        extractor_service_uuid: EXTRACTOR_SERVICE_UUID,
        key_extract_uuid: KEY_EXTRACT_UUID,
        blob_extract_uuid: BLOB_EXTRACT_UUID,
        revert_uuid: REVERT_UUID,
    };
}

/// The validated, immutable set of identifiers for one peripheral
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IdentityRegistry {
    device_name: DeviceName,
    memory_spi_op_code: OpCode,
    extractor_service: CharacteristicId,
    key_extract_characteristic: CharacteristicId,
    blob_extract_characteristic: CharacteristicId,
    revert_characteristic: CharacteristicId,
}

impl IdentityRegistry {
    /// Builds the registry from the shipped literals
    pub fn builtin() -> Result<Self, RegistryError> {
        Self::from_literals(&RegistryLiterals::SHIPPED)
    }

    /// Validates every literal and builds the registry.
    /// All entries are checked before failing, so the error lists every bad one.
    pub fn from_literals(literals: &RegistryLiterals<'_>) -> Result<Self, RegistryError> {
        let mut failures = Vec::new();

        let device_name = record(
            &mut failures,
            IdentifierRole::DeviceName,
            DeviceName::new(literals.device_name),
        );
        let memory_spi_op_code = record(
            &mut failures,
            IdentifierRole::MemorySpiOpCode,
            OpCode::try_from(literals.memory_spi_op_code),
        );
        let extractor_service = record(
            &mut failures,
            IdentifierRole::ExtractorService,
            CharacteristicId::parse(literals.extractor_service_uuid),
        );
        let key_extract = record(
            &mut failures,
            IdentifierRole::KeyExtract,
            CharacteristicId::parse(literals.key_extract_uuid),
        );
        let blob_extract = record(
            &mut failures,
            IdentifierRole::BlobExtract,
            CharacteristicId::parse(literals.blob_extract_uuid),
        );
        let revert = record(
            &mut failures,
            IdentifierRole::Revert,
            CharacteristicId::parse(literals.revert_uuid),
        );

        match (
            device_name,
            memory_spi_op_code,
            extractor_service,
            key_extract,
            blob_extract,
            revert,
        ) {
            (
                Some(device_name),
                Some(memory_spi_op_code),
                Some(extractor_service),
                Some(key_extract_characteristic),
                Some(blob_extract_characteristic),
                Some(revert_characteristic),
            ) if failures.is_empty() => {
                let registry = Self {
                    device_name,
                    memory_spi_op_code,
                    extractor_service,
                    key_extract_characteristic,
                    blob_extract_characteristic,
                    revert_characteristic,
                };
                info!(
                    "Identity registry ready for {:?} (service {})",
                    registry.device_name.as_str(),
                    registry.extractor_service
                );
                Ok(registry)
            }
            _ => Err(RegistryError { failures }),
        }
    }

    /// Name used to filter advertisement scan results
    pub fn device_name(&self) -> &DeviceName {
        &self.device_name
    }

    /// Opcode selecting SPI flash as the memory device
    pub fn memory_spi_op_code(&self) -> OpCode {
        self.memory_spi_op_code
    }

    /// GATT service grouping the extractor characteristics
    pub fn extractor_service(&self) -> CharacteristicId {
        self.extractor_service
    }

    pub fn key_extract_characteristic(&self) -> CharacteristicId {
        self.key_extract_characteristic
    }

    pub fn blob_extract_characteristic(&self) -> CharacteristicId {
        self.blob_extract_characteristic
    }

    /// Characteristic written to restore the original firmware
    pub fn revert_characteristic(&self) -> CharacteristicId {
        self.revert_characteristic
    }
}

fn record<T>(
    failures: &mut Vec<(IdentifierRole, IdentityError)>,
    role: IdentifierRole,
    result: Result<T, IdentityError>,
) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            error!("Invalid {}: {}", role, e);
            failures.push((role, e));
            None
        }
    }
}
