//! Persistent motor controller configuration
//!
//! This module provides the configuration record shared by every firmware
//! task and its persistence in the data EEPROM.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │  Firmware tasks (motor control, PAS, display) │
//! └──────────────┬───────────────────────────────┘
//!                │ &mut Config via ConfigManager
//!                ▼
//! ┌──────────────────────────────────────────────┐
//! │        ConfigManager                          │
//! │  - owns the one Config record                 │
//! │  - startup and persist-on-change entry points │
//! └──────────────┬───────────────────────────────┘
//!                │
//!                ▼
//! ┌──────────────────────────────────────────────┐
//! │        ConfigStore                            │
//! │  - sentinel check and first-boot defaults     │
//! │  - decode / validate / recover                │
//! │  - change-suppressed rewrite                  │
//! └──────────────┬───────────────────────────────┘
//!                │
//!                ▼
//! ┌──────────────────────────────────────────────┐
//! │        EepromInterface                        │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! # Storage Layout
//!
//! Twelve bytes at the start of the data EEPROM region: a sentinel key
//! byte followed by the encoded fields (see [`layout`]). The key byte is
//! how the firmware recognizes storage it has populated before; anything
//! else is treated as blank and rewritten with factory defaults.
//!
//! # Startup Contract
//!
//! Call [`ConfigManager::startup`] once before any task reads the record.
//! After it returns, the record is always within validated limits.
//!
//! # On-change Contract
//!
//! Call [`ConfigManager::persist_if_changed`] after any mutation worth
//! keeping (a display-driven settings change). Nothing is persisted
//! automatically; unchanged records cost no EEPROM wear.

pub mod layout;
pub mod limits;
pub mod manager;
pub mod storage;
pub mod variables;

// Re-export commonly used types
pub use layout::{decode, encode, Flags0, Flags1, DEFAULT_TABLE, EEPROM_BYTES_STORED, KEY};
pub use manager::ConfigManager;
pub use storage::{ConfigStore, StorageStats};
pub use variables::Config;
