//! Command-line front end
//!
//! Stands in for the settings window: every command loads the current
//! settings (or defaults), applies one change through the same record API
//! the window uses, and writes the result back.

mod report;

use anyhow::{Context, Result, bail};
use clap::{Subcommand, ValueEnum};
use std::io::Write;
use tracing::{debug, info};

use crate::common::display::DisplayEnvironment;
use crate::config::key_catalog;
use crate::config::{Action, ConfigRecord, ControlScheme, LoadOutcome, SettingsStore};

/// On/off switch for boolean settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Switch {
    On,
    Off,
    Toggle,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Print the current settings
    Show {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the resolutions offered for the selected display
    Resolutions,
    /// Select a resolution by its index in the list
    SetResolution { index: usize },
    /// Select the display the game starts on
    SetDisplay { display: u8 },
    /// Select the UI language by index
    SetLanguage { language: u8 },
    /// Select keyboard or gamepad controls
    SetControls { scheme: ControlScheme },
    /// Run fullscreen or windowed
    Fullscreen {
        #[arg(value_enum)]
        state: Switch,
    },
    /// Gamepad vibration
    Vibration {
        #[arg(value_enum)]
        state: Switch,
    },
    /// Bind a key to an action (key by name, 0x-hex or decimal DirectInput code)
    Bind {
        action: Action,
        key: String,
        /// Only report whether the key is free for this action
        #[arg(long)]
        check: bool,
    },
    /// Restore the default key bindings
    ResetKeys,
    /// Restore all settings to their defaults
    Defaults,
    /// Load settings for an unattended start, repairing a bad file with defaults
    QuickBoot,
}

/// Owns the live settings for one command
pub struct Launcher<E: DisplayEnvironment> {
    store: SettingsStore,
    displays: E,
}

impl<E: DisplayEnvironment> Launcher<E> {
    pub fn new(store: SettingsStore, displays: E) -> Self {
        Self { store, displays }
    }

    /// Current settings with the catalog of their selected display
    fn load(&self) -> (ConfigRecord, LoadOutcome) {
        self.store.load_or_default(&self.displays)
    }

    /// Load, apply one change, save
    fn edit<F>(&self, change: F) -> Result<ConfigRecord>
    where
        F: FnOnce(&mut ConfigRecord) -> Result<()>,
    {
        let (mut record, _) = self.load();
        change(&mut record)?;
        self.store.save(&record)?;
        Ok(record)
    }

    pub fn execute(&self, command: Command, out: &mut impl Write) -> Result<()> {
        debug!(?command, path = %self.store.path().display(), "Executing command");

        match command {
            Command::Show { json } => {
                let (record, outcome) = self.load();
                if json {
                    let text = serde_json::to_string_pretty(&record)
                        .context("Failed to serialize settings")?;
                    writeln!(out, "{}", text)?;
                } else {
                    report::write_summary(out, self.store.path(), &record, &outcome)?;
                }
            }
            Command::Resolutions => {
                let (record, _) = self.load();
                report::write_resolutions(out, &record)?;
            }
            Command::SetResolution { index } => {
                let record = self.edit(|record| {
                    record.set_resolution_index(index);
                    Ok(())
                })?;
                writeln!(
                    out,
                    "Resolution: {}",
                    record.catalog().label(record.resolution_index())
                )?;
            }
            Command::SetDisplay { display } => {
                let record = self.edit(|record| {
                    if display >= record.screen_count() {
                        bail!(
                            "Display {} does not exist ({} attached)",
                            display,
                            record.screen_count()
                        );
                    }
                    record.set_display(display);
                    record.rebuild_catalog(self.displays.display_modes(display));
                    Ok(())
                })?;
                writeln!(
                    out,
                    "Display: {} ({})",
                    record.display(),
                    record.resolution()
                )?;
            }
            Command::SetLanguage { language } => {
                self.edit(|record| {
                    record.set_language(language);
                    Ok(())
                })?;
                writeln!(out, "Language: {}", language)?;
            }
            Command::SetControls { scheme } => {
                self.edit(|record| {
                    record.set_controls(scheme);
                    Ok(())
                })?;
                writeln!(out, "Controls: {:?}", scheme)?;
            }
            Command::Fullscreen { state } => {
                let record = self.edit(|record| {
                    match state {
                        Switch::On => record.set_fullscreen(true),
                        Switch::Off => record.set_fullscreen(false),
                        Switch::Toggle => record.toggle_fullscreen(),
                    }
                    Ok(())
                })?;
                writeln!(out, "Fullscreen: {}", report::on_off(record.fullscreen()))?;
            }
            Command::Vibration { state } => {
                let record = self.edit(|record| {
                    match state {
                        Switch::On => record.set_vibration(true),
                        Switch::Off => record.set_vibration(false),
                        Switch::Toggle => record.toggle_vibration(),
                    }
                    Ok(())
                })?;
                writeln!(out, "Vibration: {}", report::on_off(record.vibration()))?;
            }
            Command::Bind {
                action,
                key,
                check: true,
            } => {
                let code = key_catalog::parse_key(&key)?;
                let (record, _) = self.load();
                if record.would_conflict(action, code) {
                    bail!(
                        "{} can't be bound to '{}'",
                        key_catalog::key_name(code),
                        action
                    );
                }
                writeln!(out, "{}: {} is free", action, key_catalog::key_name(code))?;
            }
            Command::Bind { action, key, .. } => {
                let code = key_catalog::parse_key(&key)?;
                self.edit(|record| {
                    let previous = record.key_binding(action);
                    record.try_rebind(action, code).with_context(|| {
                        format!(
                            "Keeping {} for '{}'",
                            key_catalog::key_name(previous),
                            action
                        )
                    })?;
                    info!(action = %action, code, "Key bound");
                    Ok(())
                })?;
                writeln!(out, "{}: {}", action, key_catalog::key_name(code))?;
            }
            Command::ResetKeys => {
                let record = self.edit(|record| {
                    record.reset_keys_to_default();
                    Ok(())
                })?;
                report::write_bindings(out, &record)?;
            }
            Command::Defaults => {
                let record = self.edit(|record| {
                    record.load_defaults();
                    Ok(())
                })?;
                let outcome = LoadOutcome::Loaded;
                report::write_summary(out, self.store.path(), &record, &outcome)?;
            }
            Command::QuickBoot => {
                let record = self.store.quick_boot(&self.displays)?;
                let outcome = LoadOutcome::Loaded;
                report::write_summary(out, self.store.path(), &record, &outcome)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::display::FixedDisplays;
    use crate::common::types::Dimensions;
    use crate::config::codec::ConfigCodec;
    use crate::config::record::DisplayContext;
    use crate::constants::keys;
    use std::fs;

    fn launcher(dir: &tempfile::TempDir, screens: u8) -> Launcher<FixedDisplays> {
        Launcher::new(
            SettingsStore::new(dir.path().join("settings.dat")),
            FixedDisplays::new(screens, Vec::new()),
        )
    }

    fn run<E: DisplayEnvironment>(launcher: &Launcher<E>, command: Command) -> Result<String> {
        let mut out = Vec::new();
        launcher.execute(command, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    fn saved<E: DisplayEnvironment>(launcher: &Launcher<E>) -> ConfigRecord {
        launcher.store.load(&launcher.displays).unwrap()
    }

    #[test]
    fn test_show_without_file_uses_defaults() {
        let temp_dir = tempfile::tempdir().unwrap();
        let launcher = launcher(&temp_dir, 1);

        let text = run(&launcher, Command::Show { json: false }).unwrap();
        assert!(text.contains("defaults"));
        assert!(text.contains("640x480"));
        // Showing never writes
        assert!(!launcher.store.path().exists());
    }

    #[test]
    fn test_show_json() {
        let temp_dir = tempfile::tempdir().unwrap();
        let launcher = launcher(&temp_dir, 1);

        let text = run(&launcher, Command::Show { json: true }).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["keys"]["a"], "Space");
    }

    #[test]
    fn test_set_resolution_clamps_and_saves() {
        let temp_dir = tempfile::tempdir().unwrap();
        let launcher = launcher(&temp_dir, 1);

        let text = run(&launcher, Command::SetResolution { index: 40 }).unwrap();
        assert_eq!(text, "Resolution: 1920x1080\n");
        assert_eq!(saved(&launcher).resolution_index(), 11);
    }

    #[test]
    fn test_bind_conflict_keeps_previous_key() {
        let temp_dir = tempfile::tempdir().unwrap();
        let launcher = launcher(&temp_dir, 1);

        run(
            &launcher,
            Command::Bind {
                action: Action::ActionA,
                key: "J".to_string(),
                check: false,
            },
        )
        .unwrap();
        assert_eq!(saved(&launcher).key_binding(Action::ActionA), keys::J);

        let err = run(
            &launcher,
            Command::Bind {
                action: Action::ActionA,
                key: "D".to_string(),
                check: false,
            },
        )
        .unwrap_err();
        assert!(format!("{:#}", err).contains("already bound to 'b'"));
        assert_eq!(saved(&launcher).key_binding(Action::ActionA), keys::J);
    }

    #[test]
    fn test_bind_rejects_reserved_key() {
        let temp_dir = tempfile::tempdir().unwrap();
        let launcher = launcher(&temp_dir, 1);

        let result = run(
            &launcher,
            Command::Bind {
                action: Action::Start,
                key: "Escape".to_string(),
                check: false,
            },
        );
        assert!(result.is_err());
        assert!(!launcher.store.path().exists());
    }

    #[test]
    fn test_set_display_validates_range() {
        let temp_dir = tempfile::tempdir().unwrap();
        let launcher = launcher(&temp_dir, 2);

        run(&launcher, Command::SetDisplay { display: 1 }).unwrap();
        assert_eq!(saved(&launcher).display(), 1);

        assert!(run(&launcher, Command::SetDisplay { display: 2 }).is_err());
        assert_eq!(saved(&launcher).display(), 1);
    }

    #[test]
    fn test_toggles() {
        let temp_dir = tempfile::tempdir().unwrap();
        let launcher = launcher(&temp_dir, 1);

        run(&launcher, Command::Fullscreen { state: Switch::Toggle }).unwrap();
        assert!(saved(&launcher).fullscreen());
        run(&launcher, Command::Fullscreen { state: Switch::Off }).unwrap();
        assert!(!saved(&launcher).fullscreen());

        run(&launcher, Command::Vibration { state: Switch::On }).unwrap();
        assert!(saved(&launcher).vibration());
    }

    #[test]
    fn test_reset_keys_and_defaults() {
        let temp_dir = tempfile::tempdir().unwrap();
        let launcher = launcher(&temp_dir, 1);

        run(&launcher, Command::SetLanguage { language: 2 }).unwrap();
        run(
            &launcher,
            Command::Bind {
                action: Action::Up,
                key: "W".to_string(),
                check: false,
            },
        )
        .unwrap();

        run(&launcher, Command::ResetKeys).unwrap();
        let record = saved(&launcher);
        assert_eq!(record.key_binding(Action::Up), keys::UP);
        assert_eq!(record.language(), 2);

        run(&launcher, Command::Defaults).unwrap();
        assert_eq!(saved(&launcher).language(), 0);
    }

    #[test]
    fn test_quick_boot_writes_defaults_over_bad_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let launcher = launcher(&temp_dir, 1);
        fs::write(launcher.store.path(), [0xFFu8; 53]).unwrap();

        run(&launcher, Command::QuickBoot).unwrap();
        let bytes = fs::read(launcher.store.path()).unwrap();
        assert_eq!(
            bytes,
            ConfigCodec::encode(&ConfigRecord::with_defaults(DisplayContext::default()))
        );
    }

    #[test]
    fn test_platform_modes_drive_resolution_list() {
        let temp_dir = tempfile::tempdir().unwrap();
        let launcher = Launcher::new(
            SettingsStore::new(temp_dir.path().join("settings.dat")),
            FixedDisplays::new(
                1,
                vec![Dimensions::new(1280, 720), Dimensions::new(2560, 1440)],
            ),
        );

        let text = run(&launcher, Command::Resolutions).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("2560x1440"));
        assert!(lines[1].contains("1280x720"));
    }

    /// Primary offers 1080p and 720p, the second display 1440p and 1080p
    struct TwoScreens;

    impl DisplayEnvironment for TwoScreens {
        fn screen_count(&self) -> u8 {
            2
        }

        fn display_modes(&self, display: u8) -> Vec<Dimensions> {
            match display {
                0 => vec![Dimensions::new(1920, 1080), Dimensions::new(1280, 720)],
                1 => vec![Dimensions::new(2560, 1440), Dimensions::new(1920, 1080)],
                _ => Vec::new(),
            }
        }
    }

    #[test]
    fn test_second_display_resolution_survives_later_edits() {
        let temp_dir = tempfile::tempdir().unwrap();
        let launcher = Launcher::new(
            SettingsStore::new(temp_dir.path().join("settings.dat")),
            TwoScreens,
        );

        let text = run(&launcher, Command::SetDisplay { display: 1 }).unwrap();
        assert_eq!(text, "Display: 1 (1920x1080)\n");

        let text = run(&launcher, Command::SetResolution { index: 0 }).unwrap();
        assert_eq!(text, "Resolution: 2560x1440\n");
        assert_eq!(saved(&launcher).resolution(), Dimensions::new(2560, 1440));

        // An unrelated edit reloads the file and must keep the selection
        run(&launcher, Command::Fullscreen { state: Switch::On }).unwrap();
        let record = saved(&launcher);
        assert_eq!(record.display(), 1);
        assert_eq!(record.resolution_index(), 0);
        assert_eq!(record.resolution(), Dimensions::new(2560, 1440));

        let text = run(&launcher, Command::Resolutions).unwrap();
        assert!(text.starts_with("*  0  2560x1440"));
    }

    #[test]
    fn test_bind_check_reports_without_saving() {
        let temp_dir = tempfile::tempdir().unwrap();
        let launcher = launcher(&temp_dir, 1);

        let text = run(
            &launcher,
            Command::Bind {
                action: Action::ActionA,
                key: "J".to_string(),
                check: true,
            },
        )
        .unwrap();
        assert_eq!(text, "a: J is free\n");
        assert!(!launcher.store.path().exists());

        // D belongs to 'b'; the action's own key is not a conflict
        for (key, free) in [("D", false), ("Space", true), ("Escape", false)] {
            let result = run(
                &launcher,
                Command::Bind {
                    action: Action::ActionA,
                    key: key.to_string(),
                    check: true,
                },
            );
            assert_eq!(result.is_ok(), free, "{}", key);
        }
        assert!(!launcher.store.path().exists());
    }
}
