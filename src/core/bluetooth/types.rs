//! Defines the validated identifier types shared by the Bluetooth module.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use uuid::Uuid;

use crate::core::bluetooth::error::IdentityError;

/// Length of the canonical hyphenated UUID form (8-4-4-4-12)
const CANONICAL_UUID_LEN: usize = 36;

/// Name the peripheral advertises. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct DeviceName(String);

impl DeviceName {
    pub fn new(name: impl Into<String>) -> Result<Self, IdentityError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(IdentityError::EmptyDeviceName);
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DeviceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Single-byte opcode understood by the peripheral
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct OpCode(u8);

impl OpCode {
    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    pub const fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u64> for OpCode {
    type Error = IdentityError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .map(Self)
            .map_err(|_| IdentityError::OpCodeOutOfRange(value))
    }
}

impl fmt::Display for OpCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#04x}", self.0)
    }
}

/// A GATT service or characteristic UUID that has passed canonical-form validation.
///
/// The only way to obtain one from text is [`CharacteristicId::parse`], so holding a
/// `CharacteristicId` means the literal it came from was a UUID written in the
/// hyphenated 8-4-4-4-12 form. Hex digits may be either case on input; `Display`
/// always prints the canonical lowercase form, so a lowercase literal round-trips
/// unchanged and an uppercase one comes back lowercased.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct CharacteristicId(Uuid);

impl CharacteristicId {
    /// Parses a canonical hyphenated UUID literal
    pub fn parse(literal: &str) -> Result<Self, IdentityError> {
        let malformed = |source: Option<uuid::Error>| IdentityError::MalformedIdentifier {
            literal: literal.to_string(),
            source,
        };

        // uuid also accepts simple, braced and urn forms; only the hyphenated one is canonical
        if literal.len() != CANONICAL_UUID_LEN {
            return Err(malformed(Uuid::try_parse(literal).err()));
        }
        let uuid = Uuid::try_parse(literal).map_err(|e| malformed(Some(e)))?;
        Ok(Self(uuid))
    }

    pub const fn uuid(&self) -> Uuid {
        self.0
    }
}

impl FromStr for CharacteristicId {
    type Err = IdentityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<CharacteristicId> for Uuid {
    fn from(id: CharacteristicId) -> Self {
        id.0
    }
}

impl fmt::Display for CharacteristicId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::bluetooth::constants::{BLOB_EXTRACT_UUID, KEY_EXTRACT_UUID, REVERT_UUID};

    #[test]
    fn test_valid_literals_round_trip() {
        for literal in [KEY_EXTRACT_UUID, BLOB_EXTRACT_UUID] {
            let id = CharacteristicId::parse(literal).unwrap();
            assert_eq!(id.to_string(), literal);
        }
    }

    #[test]
    fn test_placeholder_literal_is_rejected() {
        let err = CharacteristicId::parse(REVERT_UUID).unwrap_err();
        match err {
            IdentityError::MalformedIdentifier { literal, .. } => assert_eq!(literal, "N/A"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_non_canonical_forms_are_rejected() {
        let rejected = [
            "",
            "ce62c7343592a882d849f129a2ec6ce1",
            "{ce62c734-3592-a882-d849-f129a2ec6ce1}",
            "urn:uuid:ce62c734-3592-a882-d849-f129a2ec6ce1",
            "ce62c734-3592-a882-d849-f129a2ec6cez",
            "ce62c734-3592-a882-d849f-129a2ec6ce1",
        ];
        for literal in rejected {
            assert!(
                matches!(
                    CharacteristicId::parse(literal),
                    Err(IdentityError::MalformedIdentifier { .. })
                ),
                "{literal:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_nil_literal_is_a_valid_uuid() {
        let literal = "00000000-0000-0000-0000-000000000000";
        let id = CharacteristicId::parse(literal).unwrap();
        assert!(id.uuid().is_nil());
        assert_eq!(id.to_string(), literal);
    }

    #[test]
    fn test_uppercase_canonical_literal_is_accepted() {
        let id: CharacteristicId = "CE62C734-3592-A882-D849-F129A2EC6CE1".parse().unwrap();
        assert_eq!(id.to_string(), KEY_EXTRACT_UUID);
    }

    #[test]
    fn test_opcode_range() {
        assert_eq!(OpCode::try_from(0x13u64).unwrap().value(), 0x13);
        assert_eq!(OpCode::try_from(255u64).unwrap().value(), 255);
        assert!(matches!(
            OpCode::try_from(256u64),
            Err(IdentityError::OpCodeOutOfRange(256))
        ));
        assert_eq!(OpCode::new(0x13).to_string(), "0x13");
    }

    #[test]
    fn test_device_name_must_not_be_blank() {
        assert!(matches!(DeviceName::new(""), Err(IdentityError::EmptyDeviceName)));
        assert!(matches!(DeviceName::new("   "), Err(IdentityError::EmptyDeviceName)));
        assert_eq!(DeviceName::new("PGP Key Extractor").unwrap().as_str(), "PGP Key Extractor");
    }

    #[test]
    fn test_serializes_as_plain_values() {
        let id = CharacteristicId::parse(KEY_EXTRACT_UUID).unwrap();
        assert_eq!(
            serde_json::to_string(&id).unwrap(),
            format!("\"{}\"", KEY_EXTRACT_UUID)
        );
        assert_eq!(serde_json::to_string(&OpCode::new(0x13)).unwrap(), "19");
    }
}
