//! Core functionality for the PGP Key Extractor Bridge
//! This module contains the identity registry and the extraction data model.

pub mod bluetooth;
pub mod extraction;

// Re-export commonly used types
pub use bluetooth::{IdentityRegistry, RegistryError};
pub use extraction::{ExtractionError, KeyBlobPair};
