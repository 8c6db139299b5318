//! Shared building blocks used by both the settings core and the front end

pub mod display;
pub mod types;
