//! Core firmware infrastructure
//!
//! This module contains cross-cutting components shared by the rest of the
//! firmware, currently the logging abstraction.

pub mod logging;
