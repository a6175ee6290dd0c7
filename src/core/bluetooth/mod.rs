//! Bluetooth identifiers for the PGP Key Extractor
//! This module holds everything the BLE session layer needs to find the
//! extractor peripheral and address its characteristics.

mod constants;
mod device;
mod error;
mod identity;
mod types;

// Re-export types that should be publicly accessible
pub use constants::*; // Re-export all constants
pub use device::BluetoothDevice;
pub use error::{IdentifierRole, IdentityError, RegistryError};
pub use identity::{IdentityRegistry, RegistryLiterals};
pub use types::{CharacteristicId, DeviceName, OpCode};
