//! Plain-text rendering of the settings for the terminal

use std::io::{self, Write};
use std::path::Path;

use crate::config::key_catalog;
use crate::config::{ConfigRecord, ControlScheme, LoadOutcome};

pub fn on_off(value: bool) -> &'static str {
    if value { "on" } else { "off" }
}

fn controls_label(controls: ControlScheme) -> &'static str {
    match controls {
        ControlScheme::Keyboard => "keyboard",
        ControlScheme::Gamepad => "gamepad",
    }
}

pub fn write_summary(
    out: &mut impl Write,
    path: &Path,
    record: &ConfigRecord,
    outcome: &LoadOutcome,
) -> io::Result<()> {
    match outcome {
        LoadOutcome::Loaded => writeln!(out, "Settings file: {}", path.display())?,
        LoadOutcome::Defaulted(reason) => writeln!(
            out,
            "Settings file: {} (using defaults: {:#})",
            path.display(),
            reason
        )?,
    }

    writeln!(
        out,
        "Resolution:    {} [{}]",
        record.resolution(),
        record.resolution_index()
    )?;
    writeln!(out, "Fullscreen:    {}", on_off(record.fullscreen()))?;
    writeln!(
        out,
        "Display:       {} of {}",
        record.display(),
        record.screen_count()
    )?;
    writeln!(out, "Language:      {}", record.language())?;
    writeln!(out, "Controls:      {}", controls_label(record.controls()))?;
    writeln!(out, "Vibration:     {}", on_off(record.vibration()))?;
    write_bindings(out, record)
}

pub fn write_bindings(out: &mut impl Write, record: &ConfigRecord) -> io::Result<()> {
    writeln!(out, "Keys:")?;
    for (action, code) in record.key_bindings().iter() {
        writeln!(out, "  {:<6} {}", action, key_catalog::key_name(code))?;
    }
    Ok(())
}

/// One line per entry, the selected one marked with `*`
pub fn write_resolutions(out: &mut impl Write, record: &ConfigRecord) -> io::Result<()> {
    for (index, entry) in record.catalog().iter().enumerate() {
        let marker = if index == record.resolution_index() { '*' } else { ' ' };
        writeln!(out, "{} {:>2}  {}", marker, index, entry.label)?;
    }
    Ok(())
}
