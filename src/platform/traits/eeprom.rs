//! Data EEPROM interface trait
//!
//! This module defines the byte-level non-volatile storage interface that
//! platform implementations must provide. The configuration system uses it
//! for persistence; nothing else in the firmware touches storage directly.
//!
//! # EEPROM Characteristics
//!
//! - The device is byte-programmable: no page erase is required before a
//!   write, unlike NOR flash.
//! - Writes go through a hardware write-enable latch. The latch is a shared
//!   resource and must never be left engaged after an operation.
//! - Programming a byte stalls the bus for the hardware programming time
//!   (milliseconds per byte). Callers tolerate this synchronously.
//! - Reads are plain memory reads: free, unlimited, no wear.
//! - Writes are the only operation with wear cost. Callers are expected to
//!   avoid redundant writes; see `config::storage`.
//!
//! # Addressing
//!
//! Addresses are offsets into the device's data EEPROM region, starting at
//! zero. Implementations add their hardware base address internally.
//!
//! # Fault Model
//!
//! No failure mode is exposed. A read always yields a byte; a write either
//! succeeds or is handled by the hardware's own fault machinery. The
//! configuration layer recovers from bad content by validation, not from
//! bad operations by error codes.
pub trait EepromInterface {
    /// Read a single byte at `address`.
    fn read_byte(&self, address: u32) -> u8;

    /// Program `data` at consecutive addresses starting at `base_address`.
    ///
    /// Implementations must engage the write-enable latch if it is not
    /// already engaged, program each byte in order, and release the latch
    /// on every path out of this function.
    fn write_bytes(&mut self, base_address: u32, data: &[u8]);
}
