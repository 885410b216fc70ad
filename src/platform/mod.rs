//! Platform abstraction layer
//!
//! This module provides hardware abstraction for the microcontroller's data
//! EEPROM. All platform-specific code is isolated to this module.

pub mod traits;

// Platform implementations (feature-gated)
#[cfg(feature = "stm32l0")]
pub mod stm32l0;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

// Re-export commonly used types
pub use traits::EepromInterface;
