//! Platform abstraction traits
//!
//! This module defines the traits that platform implementations must provide.

pub mod eeprom;

// Re-export trait interfaces
pub use eeprom::EepromInterface;
