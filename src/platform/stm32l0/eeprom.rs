//! STM32L0 data EEPROM driver
//!
//! The STM32L0 carries a true byte-programmable data EEPROM, separate from
//! program flash. Writes require releasing the PELOCK write-protection
//! latch in FLASH_PECR with the two-key sequence on FLASH_PEKEYR; the
//! hardware erases and programs a byte in one operation, signalling
//! completion through FLASH_SR BSY.
//!
//! The latch is re-engaged after the last programmed byte on the single
//! exit path of `write_bytes`.

use core::ptr;

use crate::platform::traits::EepromInterface;

/// Data EEPROM region base address
const DATA_EEPROM_BASE: u32 = 0x0808_0000;

/// Data EEPROM region size (category 5 parts; smaller parts carry less)
const DATA_EEPROM_SIZE: u32 = 6 * 1024;

/// FLASH program/erase control register
const FLASH_PECR: *mut u32 = 0x4002_2004 as *mut u32;

/// FLASH PECR unlock key register
const FLASH_PEKEYR: *mut u32 = 0x4002_200C as *mut u32;

/// FLASH status register
const FLASH_SR: *const u32 = 0x4002_2018 as *const u32;

/// PECR: PELOCK bit, write-protects PECR and the data EEPROM
const PECR_PELOCK: u32 = 1 << 0;

/// SR: BSY bit, a program/erase operation is in progress
const SR_BSY: u32 = 1 << 0;

/// First PELOCK unlock key
const PEKEY1: u32 = 0x89AB_CDEF;

/// Second PELOCK unlock key
const PEKEY2: u32 = 0x0203_0405;

/// STM32L0 data EEPROM
///
/// Addresses passed through [`EepromInterface`] are offsets into the data
/// EEPROM region; the region base is added here.
pub struct DataEeprom {
    _private: (),
}

impl DataEeprom {
    /// Create the data EEPROM handle.
    ///
    /// # Safety
    ///
    /// At most one instance may exist, and no other code may touch
    /// FLASH_PECR, FLASH_PEKEYR or the data EEPROM region while it lives.
    pub unsafe fn new() -> Self {
        Self { _private: () }
    }

    fn wait_not_busy() {
        // Spins for the per-byte programming time (worst case a few ms)
        while unsafe { ptr::read_volatile(FLASH_SR) } & SR_BSY != 0 {}
    }
}

impl EepromInterface for DataEeprom {
    fn read_byte(&self, address: u32) -> u8 {
        debug_assert!(address < DATA_EEPROM_SIZE);
        unsafe { ptr::read_volatile((DATA_EEPROM_BASE + address) as *const u8) }
    }

    fn write_bytes(&mut self, base_address: u32, data: &[u8]) {
        debug_assert!(base_address as usize + data.len() <= DATA_EEPROM_SIZE as usize);

        unsafe {
            // Release the latch unless a previous context left it open
            if ptr::read_volatile(FLASH_PECR) & PECR_PELOCK != 0 {
                ptr::write_volatile(FLASH_PEKEYR, PEKEY1);
                ptr::write_volatile(FLASH_PEKEYR, PEKEY2);
            }

            for (i, &byte) in data.iter().enumerate() {
                Self::wait_not_busy();
                let addr = DATA_EEPROM_BASE + base_address + i as u32;
                ptr::write_volatile(addr as *mut u8, byte);
            }
            Self::wait_not_busy();

            // Re-engage the latch; no path may return before this point
            let pecr = ptr::read_volatile(FLASH_PECR);
            ptr::write_volatile(FLASH_PECR, pecr | PECR_PELOCK);
        }
    }
}
