//! Configuration management
//!
//! Handles the launcher settings: the in-memory record, the key and
//! resolution catalogs it is validated against, and the fixed-size binary
//! file the game reads at startup.

pub mod codec;
pub mod key_binding;
pub mod key_catalog;
pub mod record;
pub mod resolution;
pub mod storage;

pub use key_binding::Action;
pub use record::{ConfigRecord, ControlScheme};
pub use storage::{LoadOutcome, SettingsStore};
