//! Key and blob values read from the extractor characteristics.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::bluetooth::{BLOB_CHAR_LEN, KEY_CHAR_LEN};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtractionError {
    #[error("{field} value is {actual} bytes, expected {expected}")]
    LengthMismatch {
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("bluetooth address must not be empty")]
    MissingAddress,
}

/// The secrets pulled from one peripheral.
/// Deserializing goes through [`KeyBlobPair::from_reads`], so an imported pair is checked too.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawKeyBlobPair")]
pub struct KeyBlobPair {
    bt_address: String,
    /// 16 byte device key
    #[serde(serialize_with = "hex::serialize")]
    key: Vec<u8>,
    /// 256 byte device blob
    #[serde(serialize_with = "hex::serialize")]
    blob: Vec<u8>,
}

/// Unchecked wire form of a `KeyBlobPair`
#[derive(Deserialize)]
struct RawKeyBlobPair {
    bt_address: String,
    #[serde(with = "hex")]
    key: Vec<u8>,
    #[serde(with = "hex")]
    blob: Vec<u8>,
}

impl TryFrom<RawKeyBlobPair> for KeyBlobPair {
    type Error = ExtractionError;

    fn try_from(raw: RawKeyBlobPair) -> Result<Self, Self::Error> {
        Self::from_reads(raw.bt_address, &raw.key, &raw.blob)
    }
}

impl KeyBlobPair {
    /// Builds a pair from raw characteristic reads, checking each value's length
    pub fn from_reads(
        bt_address: impl Into<String>,
        key: &[u8],
        blob: &[u8],
    ) -> Result<Self, ExtractionError> {
        let bt_address = bt_address.into();
        if bt_address.trim().is_empty() {
            return Err(ExtractionError::MissingAddress);
        }
        check_len("key", key, KEY_CHAR_LEN)?;
        check_len("blob", blob, BLOB_CHAR_LEN)?;

        Ok(Self {
            bt_address,
            key: key.to_vec(),
            blob: blob.to_vec(),
        })
    }

    pub fn bt_address(&self) -> &str {
        &self.bt_address
    }

    pub fn key(&self) -> &[u8] {
        &self.key
    }

    pub fn blob(&self) -> &[u8] {
        &self.blob
    }

    pub fn key_hex(&self) -> String {
        hex::encode(&self.key)
    }

    pub fn blob_hex(&self) -> String {
        hex::encode(&self.blob)
    }

    pub fn is_complete(&self) -> bool {
        !self.bt_address.is_empty() && !self.key.is_empty() && !self.blob.is_empty()
    }
}

fn check_len(field: &'static str, value: &[u8], expected: usize) -> Result<(), ExtractionError> {
    if value.len() != expected {
        return Err(ExtractionError::LengthMismatch {
            field,
            expected,
            actual: value.len(),
        });
    }
    Ok(())
}
