//! Mock platform implementation for testing
//!
//! This module provides an in-memory EEPROM double for unit testing the
//! configuration system without hardware.
//!
//! # Feature Gate
//!
//! This module is available in two contexts:
//! - During test builds (`#[cfg(test)]`)
//! - When the `mock` feature is enabled

#![cfg(any(test, feature = "mock"))]

mod eeprom;

pub use eeprom::{MockEeprom, MOCK_EEPROM_CAPACITY};
