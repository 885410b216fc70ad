//! EEPROM-backed configuration store
//!
//! Owns the EEPROM handle and implements the persistence protocol:
//! sentinel-keyed first-boot initialization, validated loading with
//! default recovery, and change-suppressed rewriting.
//!
//! The store surfaces no errors. Blank or corrupt storage is silently
//! replaced by the factory default table, so the record handed to the
//! rest of the firmware is always within validated limits.

use super::layout::{decode, encode, ADDRESS_KEY, DEFAULT_TABLE, EEPROM_BASE, EEPROM_BYTES_STORED, KEY};
use super::variables::Config;
use crate::platform::traits::EepromInterface;

/// Storage activity counters
///
/// Tracks how often the block was actually rewritten versus how often a
/// rewrite was suppressed, which is the wear profile of the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StorageStats {
    /// Full block writes issued (first boot, recovery, persisted changes)
    pub writes: u32,
    /// Persist calls that found storage already up to date
    pub suppressed_writes: u32,
    /// Default recoveries after a failed validation
    pub recoveries: u32,
}

/// Configuration store over a data EEPROM
pub struct ConfigStore<E: EepromInterface> {
    /// EEPROM handle
    eeprom: E,
    /// Storage activity counters
    stats: StorageStats,
}

impl<E: EepromInterface> ConfigStore<E> {
    /// Create a store over `eeprom`
    pub fn new(eeprom: E) -> Self {
        Self {
            eeprom,
            stats: StorageStats::default(),
        }
    }

    /// Populate storage on first boot.
    ///
    /// Reads the sentinel byte; anything other than the key means the
    /// region has never been written by this firmware (erased device,
    /// reflashed controller) and the full default table is written. This
    /// is the only path that runs against genuinely blank storage.
    pub fn init(&mut self) {
        let key = self.eeprom.read_byte(EEPROM_BASE + ADDRESS_KEY as u32);
        if key != KEY {
            crate::log_info!("eeprom key missing, writing factory defaults");
            self.write_all(&DEFAULT_TABLE);
        }
    }

    /// Load storage into `config`, recovering to defaults if any field is
    /// out of range.
    ///
    /// After this returns, `config` always passes validation. Defaults are
    /// valid by construction; there is no second fallback.
    pub fn load_and_validate(&mut self, config: &mut Config) {
        *config = decode(&self.read_all());

        if !config.is_valid() {
            crate::log_warn!("stored configuration out of range, restoring factory defaults");
            self.write_all(&DEFAULT_TABLE);
            *config = decode(&self.read_all());
            self.stats.recoveries += 1;
        }
    }

    /// Rewrite storage only when `config` differs from what is stored.
    ///
    /// Compares the fresh encoding byte by byte from offset 1 upward; the
    /// sentinel byte is only ever written as part of a full rewrite and is
    /// never compared. The first difference triggers one whole-block
    /// write. A matching block costs no wear at all, so calls may be
    /// issued freely after any settings mutation.
    pub fn persist_if_changed(&mut self, config: &Config) {
        let bytes = encode(config);

        for offset in 1..EEPROM_BYTES_STORED {
            if self.eeprom.read_byte(EEPROM_BASE + offset as u32) != bytes[offset] {
                crate::log_debug!("configuration changed, rewriting eeprom block");
                self.write_all(&bytes);
                return;
            }
        }

        self.stats.suppressed_writes += 1;
    }

    /// Storage activity counters
    pub fn stats(&self) -> StorageStats {
        self.stats
    }

    /// Borrow the underlying EEPROM (inspection and tests)
    pub fn eeprom(&self) -> &E {
        &self.eeprom
    }

    fn read_all(&self) -> [u8; EEPROM_BYTES_STORED] {
        let mut bytes = [0u8; EEPROM_BYTES_STORED];
        for (offset, byte) in bytes.iter_mut().enumerate() {
            *byte = self.eeprom.read_byte(EEPROM_BASE + offset as u32);
        }
        bytes
    }

    fn write_all(&mut self, bytes: &[u8; EEPROM_BYTES_STORED]) {
        self.eeprom.write_bytes(EEPROM_BASE, bytes);
        self.stats.writes += 1;
    }
}
