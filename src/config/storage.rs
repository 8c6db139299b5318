//! Settings file persistence
//!
//! Reads the record file into a buffer for the codec and writes encoded
//! records back. Any failure to produce a valid record on load falls back to
//! factory defaults; the launcher never refuses to start over a bad file.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::common::display::DisplayEnvironment;
use crate::config::codec::ConfigCodec;
use crate::config::record::{ConfigRecord, DisplayContext};
use crate::constants::{config, defaults};

/// How a record was obtained
#[derive(Debug)]
pub enum LoadOutcome {
    /// Decoded from the settings file
    Loaded,
    /// File missing, unreadable or rejected; defaults were used
    Defaulted(anyhow::Error),
}

impl LoadOutcome {
    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadOutcome::Loaded)
    }
}

/// Location of the settings file
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<config dir>/launcher-config/settings.dat`
    pub fn default_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push(config::APP_DIR);
        path.push(config::FILENAME);
        path
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and decode the settings file.
    ///
    /// Resolutions are matched against the modes of the display the record
    /// was saved for.
    pub fn load(&self, displays: &impl DisplayEnvironment) -> Result<ConfigRecord> {
        let bytes = fs::read(&self.path)
            .with_context(|| format!("Failed to read settings from {:?}", self.path))?;

        let stored =
            ConfigCodec::stored_display(&bytes).unwrap_or(defaults::display::DISPLAY_INDEX);
        let index = if stored < displays.screen_count() {
            stored
        } else {
            defaults::display::DISPLAY_INDEX
        };
        let context = DisplayContext::from_environment(displays, index);

        let record = ConfigCodec::decode(&bytes, &context)
            .with_context(|| format!("Rejected settings file {:?}", self.path))?;

        info!(path = %self.path.display(), display = record.display(), "Loaded settings");
        Ok(record)
    }

    /// Load the settings file, or fall back to defaults for the primary display
    pub fn load_or_default(
        &self,
        displays: &impl DisplayEnvironment,
    ) -> (ConfigRecord, LoadOutcome) {
        match self.load(displays) {
            Ok(record) => (record, LoadOutcome::Loaded),
            Err(e) => {
                let reason = format!("{:#}", e);
                warn!(path = %self.path.display(), error = %reason, "Using default settings");
                let context =
                    DisplayContext::from_environment(displays, defaults::display::DISPLAY_INDEX);
                (ConfigRecord::with_defaults(context), LoadOutcome::Defaulted(e))
            }
        }
    }

    /// Encode and write a record, creating the parent directory if needed
    pub fn save(&self, record: &ConfigRecord) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create settings directory {:?}", parent))?;
        }

        fs::write(&self.path, ConfigCodec::encode(record))
            .with_context(|| format!("Failed to write settings to {:?}", self.path))?;

        info!(path = %self.path.display(), "Saved settings");
        Ok(())
    }

    /// Load for an unattended start: a bad file is replaced by defaults on disk
    pub fn quick_boot(&self, displays: &impl DisplayEnvironment) -> Result<ConfigRecord> {
        let (record, outcome) = self.load_or_default(displays);
        if !outcome.is_loaded() {
            self.save(&record)
                .context("Failed to persist default settings")?;
        }
        Ok(record)
    }
}

impl Default for SettingsStore {
    fn default() -> Self {
        Self::new(Self::default_path())
    }
}
