//! In-memory launcher settings
//!
//! `ConfigRecord` is the single source of truth while the launcher runs.
//! The front end mutates it through setters and hands it to the codec when
//! saving.

use serde::Serialize;
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

use crate::common::display::DisplayEnvironment;
use crate::common::types::Dimensions;
use crate::config::key_binding::{Action, KeyBindings};
use crate::config::key_catalog;
use crate::config::resolution::ResolutionCatalog;
use crate::constants::{defaults, record};

/// Input device the game listens to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ControlScheme {
    #[default]
    Keyboard,
    Gamepad,
}

impl ControlScheme {
    /// Anything but the gamepad sentinel means keyboard
    pub fn from_byte(byte: u8) -> Self {
        if byte == record::GAMEPAD_SENTINEL {
            ControlScheme::Gamepad
        } else {
            ControlScheme::Keyboard
        }
    }

    pub fn to_byte(self) -> u8 {
        match self {
            ControlScheme::Keyboard => 0,
            ControlScheme::Gamepad => record::GAMEPAD_SENTINEL,
        }
    }
}

impl FromStr for ControlScheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "keyboard" | "kb" => Ok(ControlScheme::Keyboard),
            "gamepad" | "pad" | "controller" => Ok(ControlScheme::Gamepad),
            other => Err(format!(
                "Unknown control scheme '{}' (expected keyboard or gamepad)",
                other
            )),
        }
    }
}

/// Why a key capture was refused
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RebindError {
    #[error("{} can't be bound", key_label(.code))]
    Ignored { code: u8 },
    #[error("{} is already bound to '{holder}'", key_label(.code))]
    Duplicate { code: u8, holder: Action },
}

fn key_label(code: &u8) -> String {
    key_catalog::key_name(*code)
}

/// What the environment told us about the attached displays
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayContext {
    catalog: ResolutionCatalog,
    screen_count: u8,
}

impl DisplayContext {
    pub fn new(catalog: ResolutionCatalog, screen_count: u8) -> Self {
        Self {
            catalog,
            screen_count: screen_count.max(defaults::display::MIN_SCREEN_COUNT),
        }
    }

    /// Query screen count and the modes of `display`
    pub fn from_environment(env: &impl DisplayEnvironment, display: u8) -> Self {
        Self::new(
            ResolutionCatalog::build(env.display_modes(display)),
            env.screen_count(),
        )
    }

    pub fn catalog(&self) -> &ResolutionCatalog {
        &self.catalog
    }

    pub fn screen_count(&self) -> u8 {
        self.screen_count
    }

    /// Out-of-range displays collapse to the primary display
    pub fn clamp_display(&self, index: u8) -> u8 {
        if index < self.screen_count {
            index
        } else {
            debug!(display = index, screen_count = self.screen_count, "Display index out of range, using 0");
            defaults::display::DISPLAY_INDEX
        }
    }
}

impl Default for DisplayContext {
    fn default() -> Self {
        Self::new(
            ResolutionCatalog::builtin(),
            defaults::display::MIN_SCREEN_COUNT,
        )
    }
}

/// Persisted settings snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(into = "ConfigRecordView")]
pub struct ConfigRecord {
    context: DisplayContext,
    resolution_index: usize,
    /// Always the catalog entry at `resolution_index`
    resolution: Dimensions,
    fullscreen: bool,
    /// Index into the UI language table; the consumer clamps it
    language: u8,
    controls: ControlScheme,
    vibration: bool,
    display: u8,
    keys: KeyBindings,
}

impl ConfigRecord {
    /// A record holding factory defaults for the given displays
    pub fn with_defaults(context: DisplayContext) -> Self {
        let resolution = context
            .catalog()
            .at(defaults::display::RESOLUTION_INDEX)
            .dimensions;
        Self {
            context,
            resolution_index: defaults::display::RESOLUTION_INDEX,
            resolution,
            fullscreen: defaults::display::FULLSCREEN,
            language: defaults::input::LANGUAGE,
            controls: ControlScheme::Keyboard,
            vibration: defaults::input::VIBRATION,
            display: defaults::display::DISPLAY_INDEX,
            keys: KeyBindings::defaults(),
        }
    }

    /// Reset every setting to its factory value
    pub fn load_defaults(&mut self) {
        self.set_resolution_index(defaults::display::RESOLUTION_INDEX);
        self.fullscreen = defaults::display::FULLSCREEN;
        self.language = defaults::input::LANGUAGE;
        self.controls = ControlScheme::Keyboard;
        self.vibration = defaults::input::VIBRATION;
        self.display = defaults::display::DISPLAY_INDEX;
        self.reset_keys_to_default();
    }

    /// Restore all nine default bindings at once
    pub fn reset_keys_to_default(&mut self) {
        self.keys = KeyBindings::defaults();
    }

    pub fn catalog(&self) -> &ResolutionCatalog {
        self.context.catalog()
    }

    pub fn screen_count(&self) -> u8 {
        self.context.screen_count()
    }

    // -- Resolution --

    pub fn resolution_index(&self) -> usize {
        self.resolution_index
    }

    pub fn resolution(&self) -> Dimensions {
        self.resolution
    }

    pub fn resolution_width(&self) -> u16 {
        self.resolution.width
    }

    pub fn resolution_height(&self) -> u16 {
        self.resolution.height
    }

    /// Select a catalog entry; out-of-range indices saturate to the last entry
    pub fn set_resolution_index(&mut self, n: usize) {
        let index = self.context.catalog().clamp_index(n);
        if index != n {
            debug!(requested = n, clamped = index, "Resolution index out of range");
        }
        self.resolution_index = index;
        self.resolution = self.context.catalog().at(index).dimensions;
    }

    /// Select the entry matching `dimensions`, or entry 0 if there is none.
    ///
    /// Returns whether an exact match was found.
    pub fn select_resolution(&mut self, dimensions: Dimensions) -> bool {
        match self.context.catalog().find(dimensions) {
            Some(index) => {
                self.set_resolution_index(index);
                true
            }
            None => {
                self.set_resolution_index(0);
                false
            }
        }
    }

    /// Swap in the modes of a newly selected display.
    ///
    /// The current resolution is kept when the new catalog offers it.
    pub fn rebuild_catalog<I>(&mut self, modes: I)
    where
        I: IntoIterator<Item = Dimensions>,
    {
        let previous = self.resolution;
        self.context.catalog = ResolutionCatalog::build(modes);
        if !self.select_resolution(previous) {
            debug!(resolution = %previous, "Resolution not offered by new display, using first entry");
        }
    }

    // -- Display flags --

    pub fn fullscreen(&self) -> bool {
        self.fullscreen
    }

    pub fn set_fullscreen(&mut self, fullscreen: bool) {
        self.fullscreen = fullscreen;
    }

    pub fn toggle_fullscreen(&mut self) {
        self.fullscreen = !self.fullscreen;
    }

    pub fn display(&self) -> u8 {
        self.display
    }

    /// Stored as-is; range checks happen on load and on defaulting
    pub fn set_display(&mut self, display: u8) {
        self.display = display;
    }

    // -- Language / controller --

    pub fn language(&self) -> u8 {
        self.language
    }

    pub fn set_language(&mut self, language: u8) {
        self.language = language;
    }

    pub fn controls(&self) -> ControlScheme {
        self.controls
    }

    pub fn set_controls(&mut self, controls: ControlScheme) {
        self.controls = controls;
    }

    pub fn vibration(&self) -> bool {
        self.vibration
    }

    pub fn set_vibration(&mut self, vibration: bool) {
        self.vibration = vibration;
    }

    pub fn toggle_vibration(&mut self) {
        self.vibration = !self.vibration;
    }

    // -- Key bindings --

    pub fn key_bindings(&self) -> &KeyBindings {
        &self.keys
    }

    pub fn key_binding(&self, action: Action) -> u8 {
        self.keys.get(action)
    }

    /// Store a binding without validation; see [`ConfigRecord::would_conflict`]
    pub fn set_key_binding(&mut self, action: Action, code: u8) {
        self.keys.set(action, code);
    }

    pub(crate) fn set_key_bindings(&mut self, keys: KeyBindings) {
        self.keys = keys;
    }

    /// True if binding `code` to `action` would break the binding invariants.
    ///
    /// Replacing an action's key with the key it already has is not a conflict.
    pub fn would_conflict(&self, action: Action, code: u8) -> bool {
        self.check_rebind(action, code).is_err()
    }

    fn check_rebind(&self, action: Action, code: u8) -> Result<(), RebindError> {
        if key_catalog::is_ignored(code) {
            return Err(RebindError::Ignored { code });
        }
        if let Some(holder) = self.keys.holder_of(code, action) {
            return Err(RebindError::Duplicate { code, holder });
        }
        Ok(())
    }

    /// Commit a captured key, or keep the previous one and say why not
    pub fn try_rebind(&mut self, action: Action, code: u8) -> Result<(), RebindError> {
        self.check_rebind(action, code)?;
        self.set_key_binding(action, code);
        Ok(())
    }
}

impl Default for ConfigRecord {
    fn default() -> Self {
        Self::with_defaults(DisplayContext::default())
    }
}

/// Flat, human-readable shape used for `show --json`
#[derive(Serialize)]
struct ConfigRecordView {
    resolution_index: usize,
    resolution: String,
    width: u16,
    height: u16,
    fullscreen: bool,
    language: u8,
    controls: ControlScheme,
    vibration: bool,
    display: u8,
    screen_count: u8,
    keys: KeyBindings,
}

impl From<ConfigRecord> for ConfigRecordView {
    fn from(record: ConfigRecord) -> Self {
        Self {
            resolution_index: record.resolution_index,
            resolution: record.resolution.to_string(),
            width: record.resolution.width,
            height: record.resolution.height,
            fullscreen: record.fullscreen,
            language: record.language,
            controls: record.controls,
            vibration: record.vibration,
            display: record.display,
            screen_count: record.context.screen_count(),
            keys: record.keys,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::display::FixedDisplays;
    use crate::constants::keys;

    #[test]
    fn test_defaults() {
        let record = ConfigRecord::default();
        assert_eq!(record.resolution_index(), 0);
        assert_eq!(record.resolution(), Dimensions::new(640, 480));
        assert!(!record.fullscreen());
        assert_eq!(record.language(), 0);
        assert_eq!(record.controls(), ControlScheme::Keyboard);
        assert!(!record.vibration());
        assert_eq!(record.display(), 0);
        assert_eq!(*record.key_bindings(), KeyBindings::defaults());
    }

    #[test]
    fn test_load_defaults_resets_everything() {
        let mut record = ConfigRecord::default();
        record.set_resolution_index(5);
        record.set_fullscreen(true);
        record.set_language(3);
        record.set_controls(ControlScheme::Gamepad);
        record.set_vibration(true);
        record.set_display(1);
        record.set_key_binding(Action::Up, keys::W);

        record.load_defaults();
        assert_eq!(record, ConfigRecord::default());
    }

    #[test]
    fn test_set_resolution_index_keeps_dimensions_in_sync() {
        let mut record = ConfigRecord::default();
        record.set_resolution_index(4);
        assert_eq!(record.resolution_index(), 4);
        assert_eq!(record.resolution_width(), 1280);
        assert_eq!(record.resolution_height(), 720);

        record.set_resolution_index(99);
        assert_eq!(record.resolution_index(), 11);
        assert_eq!(record.resolution(), Dimensions::new(1920, 1080));
    }

    #[test]
    fn test_would_conflict() {
        let record = ConfigRecord::default();
        let b_key = record.key_binding(Action::ActionB);
        let a_key = record.key_binding(Action::ActionA);

        assert!(record.would_conflict(Action::ActionA, b_key));
        assert!(!record.would_conflict(Action::ActionA, a_key));
        assert!(record.would_conflict(Action::ActionA, keys::ESCAPE));
        assert!(!record.would_conflict(Action::ActionA, keys::Q));
    }

    #[test]
    fn test_try_rebind() {
        let mut record = ConfigRecord::default();

        assert_eq!(record.try_rebind(Action::Up, keys::W), Ok(()));
        assert_eq!(record.key_binding(Action::Up), keys::W);

        // Rejected captures keep the previous key
        assert_eq!(
            record.try_rebind(Action::Up, keys::S),
            Err(RebindError::Duplicate {
                code: keys::S,
                holder: Action::ActionY
            })
        );
        assert_eq!(
            record.try_rebind(Action::Up, keys::CAPITAL),
            Err(RebindError::Ignored {
                code: keys::CAPITAL
            })
        );
        assert_eq!(record.key_binding(Action::Up), keys::W);
    }

    #[test]
    fn test_rebind_error_messages() {
        let err = RebindError::Duplicate {
            code: keys::D,
            holder: Action::ActionB,
        };
        assert_eq!(err.to_string(), "D is already bound to 'b'");

        let err = RebindError::Ignored { code: keys::ESCAPE };
        assert_eq!(err.to_string(), "Escape can't be bound");
    }

    #[test]
    fn test_reset_keys_only_touches_keys() {
        let mut record = ConfigRecord::default();
        record.set_fullscreen(true);
        record.set_key_binding(Action::Start, keys::P);

        record.reset_keys_to_default();
        assert_eq!(record.key_binding(Action::Start), keys::RETURN);
        assert!(record.fullscreen());
    }

    #[test]
    fn test_rebuild_catalog_keeps_offered_resolution() {
        let mut record = ConfigRecord::default();
        record.set_resolution_index(1); // 800x600

        record.rebuild_catalog([Dimensions::new(1920, 1080), Dimensions::new(800, 600)]);
        assert_eq!(record.resolution_index(), 1);
        assert_eq!(record.resolution(), Dimensions::new(800, 600));

        record.rebuild_catalog([Dimensions::new(2560, 1440)]);
        assert_eq!(record.resolution_index(), 0);
        assert_eq!(record.resolution(), Dimensions::new(2560, 1440));
    }

    #[test]
    fn test_display_context_from_environment() {
        let env = FixedDisplays::new(
            2,
            vec![Dimensions::new(1024, 768), Dimensions::new(1920, 1080)],
        );
        let context = DisplayContext::from_environment(&env, 0);
        assert_eq!(context.screen_count(), 2);
        assert_eq!(context.catalog().label(0), "1920x1080");
        assert_eq!(context.clamp_display(1), 1);
        assert_eq!(context.clamp_display(2), 0);
    }

    #[test]
    fn test_control_scheme_bytes() {
        assert_eq!(ControlScheme::from_byte(0), ControlScheme::Keyboard);
        assert_eq!(ControlScheme::from_byte(1), ControlScheme::Gamepad);
        assert_eq!(ControlScheme::from_byte(7), ControlScheme::Keyboard);
        assert_eq!(ControlScheme::Gamepad.to_byte(), 1);
        assert_eq!("Gamepad".parse(), Ok(ControlScheme::Gamepad));
        assert!("joystick".parse::<ControlScheme>().is_err());
    }

    #[test]
    fn test_json_view() {
        let json = serde_json::to_value(ConfigRecord::default()).unwrap();
        assert_eq!(json["resolution"], "640x480");
        assert_eq!(json["controls"], "keyboard");
        assert_eq!(json["keys"]["start"], "Enter");
    }
}
