use serde::{Deserialize, Serialize};

use crate::core::bluetooth::{
    RegistryLiterals, BLOB_EXTRACT_UUID, DEVICE_NAME, EXTRACTOR_SERVICE_UUID, KEY_EXTRACT_UUID,
    MEMORY_DEVICE_SPI, REVERT_UUID,
};

/// Identifier literals for the identity registry, as written in the config file.
/// Nothing here is validated; see `IdentityRegistry::from_literals`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Advertised name of the extractor peripheral
    pub device_name: String,
    /// Memory device opcode for SPI flash
    pub memory_spi_op_code: u64,
    /// Extractor GATT service UUID
    pub extractor_service_uuid: String,
    /// Key extraction characteristic UUID
    pub key_extract_uuid: String,
    /// Blob extraction characteristic UUID
    pub blob_extract_uuid: String,
    /// Revert characteristic UUID
    pub revert_uuid: String,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        RegistryConfig {
            device_name: DEVICE_NAME.to_string(),
            memory_spi_op_code: MEMORY_DEVICE_SPI,
            extractor_service_uuid: EXTRACTOR_SERVICE_UUID.to_string(),
            key_extract_uuid: KEY_EXTRACT_UUID.to_string(),
            blob_extract_uuid: BLOB_EXTRACT_UUID.to_string(),
            revert_uuid: REVERT_UUID.to_string(),
        }
    }
}

impl RegistryConfig {
    /// Borrows the configured values as registry inputs
    pub fn literals(&self) -> RegistryLiterals<'_> {
        RegistryLiterals {
            device_name: &self.device_name,
            memory_spi_op_code: self.memory_spi_op_code,
            extractor_service_uuid: &self.extractor_service_uuid,
            key_extract_uuid: &self.key_extract_uuid,
            blob_extract_uuid: &self.blob_extract_uuid,
            revert_uuid: &self.revert_uuid,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_shipped_literals() {
        let config = RegistryConfig::default();
        assert_eq!(config.literals(), RegistryLiterals::SHIPPED);
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let config: RegistryConfig =
            serde_json::from_str(r#"{ "revert_uuid": "5d3a7f10-2c4b-4e8a-9f61-0b7c2d9e4a13" }"#).unwrap();
        assert_eq!(config.device_name, DEVICE_NAME);
        assert_eq!(config.memory_spi_op_code, 0x13);
        assert_eq!(config.revert_uuid, "5d3a7f10-2c4b-4e8a-9f61-0b7c2d9e4a13");
    }
}
