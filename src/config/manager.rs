//! Process-wide configuration manager
//!
//! Packages the single [`Config`] record with its [`ConfigStore`] and
//! exposes the two contracts the rest of the firmware programs against:
//!
//! - **Startup**: call [`ConfigManager::startup`] once, before any task
//!   reads the record.
//! - **On change**: call [`ConfigManager::persist_if_changed`] after any
//!   mutation worth keeping across power cycles.
//!
//! Every collaborator reaches the record through [`ConfigManager::config`]
//! or [`ConfigManager::config_mut`]; there is no hidden global. The
//! firmware is single-threaded and cooperative, so no locking is provided;
//! callers must not persist concurrently with a mutation.

use super::storage::{ConfigStore, StorageStats};
use super::variables::Config;
use crate::platform::traits::EepromInterface;

/// Owner of the process-wide configuration record
pub struct ConfigManager<E: EepromInterface> {
    /// The one configuration record, shared with every firmware task
    config: Config,
    /// Persistence backend
    store: ConfigStore<E>,
}

impl<E: EepromInterface> ConfigManager<E> {
    /// Create a manager over `eeprom`.
    ///
    /// The record starts at factory defaults until [`startup`] replaces it
    /// with the persisted values.
    ///
    /// [`startup`]: ConfigManager::startup
    pub fn new(eeprom: E) -> Self {
        Self {
            config: Config::default(),
            store: ConfigStore::new(eeprom),
        }
    }

    /// Run the boot sequence: populate blank storage, then load and
    /// validate into the record.
    ///
    /// Afterwards the record always passes validation, whatever state
    /// storage was in.
    pub fn startup(&mut self) {
        self.store.init();
        self.store.load_and_validate(&mut self.config);
    }

    /// Shared access to the configuration record
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Mutable access to the configuration record
    pub fn config_mut(&mut self) -> &mut Config {
        &mut self.config
    }

    /// Persist the record if it differs from storage
    pub fn persist_if_changed(&mut self) {
        self.store.persist_if_changed(&self.config);
    }

    /// Storage activity counters
    pub fn stats(&self) -> StorageStats {
        self.store.stats()
    }

    /// Borrow the persistence backend (inspection and tests)
    pub fn store(&self) -> &ConfigStore<E> {
        &self.store
    }
}
