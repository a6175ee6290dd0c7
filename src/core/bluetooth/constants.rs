//! Constants used throughout the application
//! This module contains the literal identifiers shipped for the PGP Key Extractor
//! peripheral. They are raw inputs: nothing here is trusted until the identity
//! registry has validated it.

use uuid::Uuid;

/// The advertised name of the extractor peripheral
pub const DEVICE_NAME: &str = "PGP Key Extractor";

/// Memory device selector for SPI flash
pub const MEMORY_DEVICE_SPI: u64 = 0x13;

/// The UUID of the extractor GATT service
pub const EXTRACTOR_SERVICE_UUID: &str = "edfec62e-9910-0bac-5241-d8bda6932a2f";

/// The UUID of the key extraction characteristic
pub const KEY_EXTRACT_UUID: &str = "ce62c734-3592-a882-d849-f129a2ec6ce1";

/// The UUID of the blob extraction characteristic
pub const BLOB_EXTRACT_UUID: &str = "b58b010d-6de0-7f92-3c47-4f36c70f3632";

/// The UUID of the revert (restore original firmware) characteristic.
/// Not assigned yet, so building the registry from the shipped literals fails.
pub const REVERT_UUID: &str = "N/A";

/// Standard Client Characteristic User Description descriptor
pub const UUID_USER_DESCRIPTION: Uuid = Uuid::from_u128(0x00002901_0000_1000_8000_00805f9b34fb);

/// Length of the key characteristic value in bytes
pub const KEY_CHAR_LEN: usize = 16;

/// Length of the blob characteristic value in bytes
pub const BLOB_CHAR_LEN: usize = 256;

/// Length of the restore characteristic value in bytes
pub const RESTORE_CHAR_LEN: usize = 1;

/// Value written to the revert characteristic to restore the original firmware
pub const RESTORE_COMMAND: u8 = 0x01;

/// User descriptions exposed by the peripheral for each characteristic
pub const KEY_USER_DESC: &str = "Go+ Encryption Key";
pub const BLOB_USER_DESC: &str = "Go+ Plus Blob";
pub const RESTORE_USER_DESC: &str = "Restore Original Firmware";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_description_is_standard_descriptor() {
        assert_eq!(
            UUID_USER_DESCRIPTION.to_string(),
            "00002901-0000-1000-8000-00805f9b34fb"
        );
    }

    #[test]
    fn test_value_lengths() {
        assert_eq!(KEY_CHAR_LEN, 16);
        assert_eq!(BLOB_CHAR_LEN, 256);
        assert_eq!([RESTORE_COMMAND].len(), RESTORE_CHAR_LEN);
    }

    #[test]
    fn test_user_descriptions_are_distinct() {
        let descriptions = [KEY_USER_DESC, BLOB_USER_DESC, RESTORE_USER_DESC];
        for (i, a) in descriptions.iter().enumerate() {
            for b in &descriptions[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
