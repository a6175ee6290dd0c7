//! Bluetooth device representation and related functionality

use std::sync::OnceLock;

use regex::Regex;

use crate::core::bluetooth::types::DeviceName;

/// Represents a discovered Bluetooth device
#[derive(Debug, Clone, serde::Serialize)]
pub struct BluetoothDevice {
    /// The name of the device, if available
    pub name: Option<String>,
    /// The address of the device (MAC address on most platforms, may be absent on macOS)
    pub address: Option<String>,
    /// Platform-specific unique identifier for the device (especially important on macOS)
    pub id: String,
    /// The signal strength (RSSI) of the device
    pub rssi: Option<i16>,
}

impl BluetoothDevice {
    /// Creates a new BluetoothDevice instance
    pub fn new(name: Option<String>, address: Option<String>, id: String, rssi: Option<i16>) -> Self {
        Self {
            name,
            address,
            id,
            rssi,
        }
    }

    /// Creates a device from a platform identifier, pulling the MAC address out of it when present
    pub fn from_platform_id(id: impl Into<String>, name: Option<String>, rssi: Option<i16>) -> Self {
        let id = id.into();
        let address = extract_mac_address(&id);
        Self::new(name, address, id, rssi)
    }

    /// Returns true if this device advertises exactly the extractor's name
    pub fn is_key_extractor(&self, device_name: &DeviceName) -> bool {
        self.name
            .as_deref()
            .map(|name| name == device_name.as_str())
            .unwrap_or(false)
    }
}

fn mac_address_regex() -> &'static Regex {
    static MAC_RE: OnceLock<Regex> = OnceLock::new();
    MAC_RE.get_or_init(|| {
        Regex::new(r"([0-9A-Fa-f]{2}[:-]){5}([0-9A-Fa-f]{2})").expect("MAC address pattern is valid")
    })
}

/// Last MAC-shaped substring of a platform id, normalized to upper case
fn extract_mac_address(device_id_str: &str) -> Option<String> {
    mac_address_regex()
        .find_iter(device_id_str)
        .last()
        .map(|m| m.as_str().to_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::bluetooth::constants::DEVICE_NAME;

    #[test]
    fn test_extracts_mac_from_windows_style_id() {
        let device = BluetoothDevice::from_platform_id(
            "BluetoothLE#BluetoothLE00:1a:7d:da:71:13-80:e1:26:0a:bc:de",
            Some(DEVICE_NAME.to_string()),
            Some(-60),
        );
        assert_eq!(device.address.as_deref(), Some("80:E1:26:0A:BC:DE"));
    }

    #[test]
    fn test_uuid_style_id_has_no_address() {
        let device = BluetoothDevice::from_platform_id(
            "5D3A7F10-2C4B-4E8A-9F61-0B7C2D9E4A13",
            None,
            None,
        );
        assert!(device.address.is_none());
    }

    #[test]
    fn test_name_filter_is_exact() {
        let name = DeviceName::new(DEVICE_NAME).unwrap();
        let matching = BluetoothDevice::new(Some(DEVICE_NAME.to_string()), None, "a".into(), None);
        let prefixed = BluetoothDevice::new(Some(format!("{} 2", DEVICE_NAME)), None, "b".into(), None);
        let unnamed = BluetoothDevice::new(None, None, "c".into(), None);

        assert!(matching.is_key_extractor(&name));
        assert!(!prefixed.is_key_extractor(&name));
        assert!(!unnamed.is_key_extractor(&name));
    }
}
