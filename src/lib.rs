//! PGP Key Extractor Bridge library
//! Validated BLE identifiers for the PGP Key Extractor peripheral, plus the
//! configuration, logging and state plumbing the command line front end uses.

// Module declarations
pub mod commands;
pub mod config;
pub mod core;
pub mod logging;
pub mod state;
pub mod utils;
