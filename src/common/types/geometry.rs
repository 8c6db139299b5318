//! Geometric types for display modes
//!
//! Provides a type-safe wrapper for screen sizes to avoid
//! common integer confusion (e.g., swapping width and height).

use std::fmt;
use std::str::FromStr;

/// Display mode dimensions (width × height)
/// Using a newtype prevents accidentally swapping width and height
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Dimensions {
    pub width: u16,
    pub height: u16,
}

impl Dimensions {
    /// Create new dimensions
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Calculate total area in pixels
    pub fn area(&self) -> u32 {
        self.width as u32 * self.height as u32
    }
}

/// Formats as `WIDTHxHEIGHT`, the label shown in the resolution picker
impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Parses `WIDTHxHEIGHT` (also accepts `X` and `*` as separator)
impl FromStr for Dimensions {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (w, h) = s
            .trim()
            .split_once(['x', 'X', '*'])
            .ok_or_else(|| format!("Expected WIDTHxHEIGHT, got '{}'", s))?;

        let width = w
            .trim()
            .parse::<u16>()
            .map_err(|e| format!("Invalid width '{}': {}", w, e))?;
        let height = h
            .trim()
            .parse::<u16>()
            .map_err(|e| format!("Invalid height '{}': {}", h, e))?;

        if width == 0 || height == 0 {
            return Err(format!("Display mode '{}' has a zero dimension", s));
        }

        Ok(Self::new(width, height))
    }
}
