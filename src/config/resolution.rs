//! Resolution catalog
//!
//! The ordered list of resolutions offered in the picker. The position of an
//! entry is the persisted selection key, so the list is built once per display
//! and never reordered afterwards.

use tracing::debug;

use crate::common::types::Dimensions;

/// Resolutions offered when the platform reports no display modes
pub const BUILTIN_RESOLUTIONS: [Dimensions; 12] = [
    Dimensions::new(640, 480),
    Dimensions::new(800, 600),
    Dimensions::new(1024, 768),
    Dimensions::new(1152, 864),
    Dimensions::new(1280, 720),
    Dimensions::new(1280, 800),
    Dimensions::new(1280, 960),
    Dimensions::new(1600, 900),
    Dimensions::new(1680, 1050),
    Dimensions::new(1400, 1050),
    Dimensions::new(1440, 900),
    Dimensions::new(1920, 1080),
];

/// A single picker entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub dimensions: Dimensions,
    pub label: String,
}

impl Resolution {
    fn new(dimensions: Dimensions) -> Self {
        Self {
            label: dimensions.to_string(),
            dimensions,
        }
    }
}

/// Non-empty, deduplicated list of candidate resolutions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionCatalog {
    entries: Vec<Resolution>,
}

impl ResolutionCatalog {
    /// The fixed twelve-entry table, in its historical order
    pub fn builtin() -> Self {
        Self {
            entries: BUILTIN_RESOLUTIONS
                .iter()
                .copied()
                .map(Resolution::new)
                .collect(),
        }
    }

    /// Build from platform-reported modes: dedup, then largest area first.
    ///
    /// Ties keep first-seen order. An empty input yields the builtin table.
    pub fn build<I>(modes: I) -> Self
    where
        I: IntoIterator<Item = Dimensions>,
    {
        let mut unique: Vec<Dimensions> = Vec::new();
        for mode in modes {
            if !unique.contains(&mode) {
                unique.push(mode);
            }
        }

        if unique.is_empty() {
            debug!("No display modes reported, using builtin resolution list");
            return Self::builtin();
        }

        // sort_by_key is stable
        unique.sort_by_key(|dims| std::cmp::Reverse(dims.area()));

        debug!(count = unique.len(), "Built resolution catalog from display modes");
        Self {
            entries: unique.into_iter().map(Resolution::new).collect(),
        }
    }

    /// Clamp an index into `[0, len - 1]`
    pub fn clamp_index(&self, n: usize) -> usize {
        n.min(self.entries.len().saturating_sub(1))
    }

    /// Entry at `n`, saturating to the last entry
    pub fn at(&self, n: usize) -> &Resolution {
        &self.entries[self.clamp_index(n)]
    }

    /// Picker label for entry `n`, saturating like [`ResolutionCatalog::at`]
    pub fn label(&self, n: usize) -> &str {
        &self.at(n).label
    }

    /// Index of the exact `width x height` entry
    pub fn find(&self, dimensions: Dimensions) -> Option<usize> {
        self.entries.iter().position(|r| r.dimensions == dimensions)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Resolution> {
        self.entries.iter()
    }
}

impl Default for ResolutionCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dims(w: u16, h: u16) -> Dimensions {
        Dimensions::new(w, h)
    }

    #[test]
    fn test_build_dedups_and_sorts() {
        let catalog = ResolutionCatalog::build([dims(800, 600), dims(800, 600), dims(1920, 1080)]);

        let entries: Vec<_> = catalog
            .iter()
            .map(|r| (r.dimensions.width, r.dimensions.height, r.label.as_str()))
            .collect();
        assert_eq!(
            entries,
            vec![(1920, 1080, "1920x1080"), (800, 600, "800x600")]
        );
    }

    #[test]
    fn test_build_ties_keep_first_seen_order() {
        // 1600x900 and 1440x1000 both have 1_440_000 pixels
        let catalog = ResolutionCatalog::build([dims(1440, 1000), dims(640, 480), dims(1600, 900)]);
        assert_eq!(catalog.at(0).dimensions, dims(1440, 1000));
        assert_eq!(catalog.at(1).dimensions, dims(1600, 900));
        assert_eq!(catalog.at(2).dimensions, dims(640, 480));
    }

    #[test]
    fn test_empty_input_falls_back_to_builtin() {
        let catalog = ResolutionCatalog::build(Vec::new());
        assert_eq!(catalog, ResolutionCatalog::builtin());
        assert_eq!(catalog.iter().count(), 12);
    }

    #[test]
    fn test_builtin_order() {
        let catalog = ResolutionCatalog::builtin();
        assert_eq!(catalog.label(0), "640x480");
        assert_eq!(catalog.label(9), "1400x1050");
        assert_eq!(catalog.label(11), "1920x1080");
    }

    #[test]
    fn test_at_clamps() {
        let catalog = ResolutionCatalog::builtin();
        assert_eq!(catalog.clamp_index(11), 11);
        assert_eq!(catalog.clamp_index(12), 11);
        assert_eq!(catalog.at(usize::MAX).label, "1920x1080");
        assert_eq!(catalog.label(500), "1920x1080");
    }

    #[test]
    fn test_find() {
        let catalog = ResolutionCatalog::builtin();
        assert_eq!(catalog.find(dims(1280, 720)), Some(4));
        assert_eq!(catalog.find(dims(1281, 720)), None);
    }
}
