//! Display environment abstraction
//!
//! The settings core never talks to a display server. Whoever owns the
//! window system hands it the number of attached screens and, per screen,
//! the list of modes the platform reports.

use crate::common::types::Dimensions;
use crate::constants::defaults;

/// Source of attached-display information
pub trait DisplayEnvironment {
    /// Number of attached displays, at least 1
    fn screen_count(&self) -> u8;

    /// Modes reported for the given display, in platform order (may contain duplicates)
    fn display_modes(&self, display: u8) -> Vec<Dimensions>;
}

/// Display information fixed at startup
///
/// Every screen reports the same mode list. An empty list means the
/// platform gave us nothing and the builtin resolution table applies.
#[derive(Debug, Clone, Default)]
pub struct FixedDisplays {
    screen_count: u8,
    modes: Vec<Dimensions>,
}

impl FixedDisplays {
    pub fn new(screen_count: u8, modes: Vec<Dimensions>) -> Self {
        Self {
            screen_count: screen_count.max(defaults::display::MIN_SCREEN_COUNT),
            modes,
        }
    }
}

impl DisplayEnvironment for FixedDisplays {
    fn screen_count(&self) -> u8 {
        self.screen_count.max(defaults::display::MIN_SCREEN_COUNT)
    }

    fn display_modes(&self, display: u8) -> Vec<Dimensions> {
        if display < self.screen_count() {
            self.modes.clone()
        } else {
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_screens_promoted_to_one() {
        let env = FixedDisplays::new(0, Vec::new());
        assert_eq!(env.screen_count(), 1);

        let env = FixedDisplays::default();
        assert_eq!(env.screen_count(), 1);
    }

    #[test]
    fn test_modes_only_for_attached_displays() {
        let env = FixedDisplays::new(2, vec![Dimensions::new(800, 600)]);
        assert_eq!(env.display_modes(1), vec![Dimensions::new(800, 600)]);
        assert!(env.display_modes(2).is_empty());
    }
}
