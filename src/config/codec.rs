//! Binary settings record
//!
//! The game reads a fixed 53-byte little-endian record:
//!
//! | Offset | Size | Field                                   |
//! |--------|------|-----------------------------------------|
//! | 0      | 4    | magic number `20111005`                 |
//! | 4      | 2    | resolution width                        |
//! | 6      | 2    | resolution height                       |
//! | 8      | 1    | fullscreen                              |
//! | 9      | 1    | language index                          |
//! | 10     | 1    | control scheme                          |
//! | 11     | 1    | vibration                               |
//! | 12     | 1    | display index                           |
//! | 13     | 36   | nine key codes, 4 bytes each            |
//! | 49     | 4    | end marker `1701`                       |
//!
//! Keys are stored Left, Right, Up, Down, A, B, X, Y, Start with the code in
//! the low byte. The table below is the only place offsets are spelled out.

use thiserror::Error;
use tracing::{debug, warn};

use crate::common::types::Dimensions;
use crate::config::key_binding::{Action, KeyBindings};
use crate::config::key_catalog;
use crate::config::record::{ConfigRecord, ControlScheme, DisplayContext};
use crate::constants::record;

/// Raw encoded settings
pub type RecordBytes = [u8; record::SIZE];

/// Why a buffer was rejected as a whole
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("settings record is {actual} bytes, expected {expected}")]
    WrongLength { expected: usize, actual: usize },
    #[error("bad magic number {found} (expected {expected})", expected = record::MAGIC)]
    BadMagic { found: u32 },
    #[error("'{first}' and '{second}' are both bound to {}", key_label(.code))]
    DuplicateKeys {
        first: Action,
        second: Action,
        code: u8,
    },
    #[error("bad end marker {found} (expected {expected})", expected = record::END_SENTINEL)]
    BadEndSentinel { found: u32 },
}

fn key_label(code: &u8) -> String {
    key_catalog::key_name(*code)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Magic,
    Width,
    Height,
    Fullscreen,
    Language,
    Controls,
    Vibration,
    Display,
    Key(Action),
    EndSentinel,
}

impl Field {
    /// Position of this field in [`LAYOUT`]
    const fn index(self) -> usize {
        match self {
            Field::Magic => 0,
            Field::Width => 1,
            Field::Height => 2,
            Field::Fullscreen => 3,
            Field::Language => 4,
            Field::Controls => 5,
            Field::Vibration => 6,
            Field::Display => 7,
            Field::Key(action) => 8 + action.slot(),
            Field::EndSentinel => 17,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct FieldSpec {
    field: Field,
    offset: usize,
    size: usize,
}

/// Fields in file order with their byte widths
const FIELDS: [(Field, usize); 18] = [
    (Field::Magic, 4),
    (Field::Width, 2),
    (Field::Height, 2),
    (Field::Fullscreen, 1),
    (Field::Language, 1),
    (Field::Controls, 1),
    (Field::Vibration, 1),
    (Field::Display, 1),
    (Field::Key(Action::Left), 4),
    (Field::Key(Action::Right), 4),
    (Field::Key(Action::Up), 4),
    (Field::Key(Action::Down), 4),
    (Field::Key(Action::ActionA), 4),
    (Field::Key(Action::ActionB), 4),
    (Field::Key(Action::ActionX), 4),
    (Field::Key(Action::ActionY), 4),
    (Field::Key(Action::Start), 4),
    (Field::EndSentinel, 4),
];

static LAYOUT: [FieldSpec; 18] = build_layout();

const fn build_layout() -> [FieldSpec; 18] {
    let mut layout = [FieldSpec {
        field: Field::Magic,
        offset: 0,
        size: 0,
    }; 18];
    let mut offset = 0;
    let mut i = 0;
    while i < FIELDS.len() {
        let (field, size) = FIELDS[i];
        assert!(field.index() == i, "field table out of order");
        assert!(size <= 4, "fields are at most 32 bits wide");
        layout[i] = FieldSpec {
            field,
            offset,
            size,
        };
        offset += size;
        i += 1;
    }
    assert!(offset == record::SIZE, "field table must cover the whole record");
    layout
}

fn spec_of(field: Field) -> &'static FieldSpec {
    &LAYOUT[field.index()]
}

fn read_field(buf: &RecordBytes, spec: &FieldSpec) -> u32 {
    buf[spec.offset..spec.offset + spec.size]
        .iter()
        .rev()
        .fold(0u32, |acc, byte| (acc << 8) | u32::from(*byte))
}

fn write_field(buf: &mut RecordBytes, spec: &FieldSpec, value: u32) {
    for (i, byte) in buf[spec.offset..spec.offset + spec.size]
        .iter_mut()
        .enumerate()
    {
        *byte = (value >> (8 * i)) as u8;
    }
}

fn field_value(config: &ConfigRecord, field: Field) -> u32 {
    match field {
        Field::Magic => record::MAGIC,
        Field::Width => u32::from(config.resolution_width()),
        Field::Height => u32::from(config.resolution_height()),
        Field::Fullscreen => u32::from(config.fullscreen()),
        Field::Language => u32::from(config.language()),
        Field::Controls => u32::from(config.controls().to_byte()),
        Field::Vibration => u32::from(config.vibration()),
        Field::Display => u32::from(config.display()),
        Field::Key(action) => u32::from(config.key_binding(action)),
        Field::EndSentinel => record::END_SENTINEL,
    }
}

/// Encoder/decoder for the binary settings record
pub struct ConfigCodec;

impl ConfigCodec {
    /// Serialize a record. Always succeeds; the record is trusted to be valid.
    pub fn encode(config: &ConfigRecord) -> RecordBytes {
        let mut buf = [0u8; record::SIZE];
        for spec in &LAYOUT {
            write_field(&mut buf, spec, field_value(config, spec.field));
        }
        buf
    }

    /// Display index stored in a record of the right length, unvalidated.
    ///
    /// Resolutions are matched against the modes of the stored display, so
    /// the caller needs this before it can build the context for [`decode`].
    ///
    /// [`decode`]: ConfigCodec::decode
    pub fn stored_display(bytes: &[u8]) -> Option<u8> {
        let buf: &RecordBytes = bytes.try_into().ok()?;
        Some(read_field(buf, spec_of(Field::Display)) as u8)
    }

    /// Parse a record against the current displays.
    ///
    /// Bad framing and duplicate bindings reject the whole buffer. An unknown
    /// resolution, an out-of-range display, or a reserved key code is healed
    /// to its default instead.
    pub fn decode(bytes: &[u8], context: &DisplayContext) -> Result<ConfigRecord, DecodeError> {
        let buf: &RecordBytes = bytes.try_into().map_err(|_| DecodeError::WrongLength {
            expected: record::SIZE,
            actual: bytes.len(),
        })?;
        let read = |field: Field| read_field(buf, spec_of(field));

        let magic = read(Field::Magic);
        if magic != record::MAGIC {
            return Err(DecodeError::BadMagic { found: magic });
        }

        let mut config = ConfigRecord::with_defaults(context.clone());

        let resolution = Dimensions::new(read(Field::Width) as u16, read(Field::Height) as u16);
        if !config.select_resolution(resolution) {
            warn!(
                resolution = %resolution,
                fallback = %config.resolution(),
                "Saved resolution not available, using first entry"
            );
        }

        config.set_fullscreen(read(Field::Fullscreen) != 0);
        config.set_language(read(Field::Language) as u8);
        config.set_controls(ControlScheme::from_byte(read(Field::Controls) as u8));
        config.set_vibration(read(Field::Vibration) != 0);
        config.set_display(context.clamp_display(read(Field::Display) as u8));

        let mut keys = KeyBindings::defaults();
        for action in Action::ORDER {
            // Only the low byte carries the code
            let code = (read(Field::Key(action)) & 0xFF) as u8;
            if key_catalog::is_ignored(code) {
                warn!(
                    action = %action,
                    code,
                    default = action.default_code(),
                    "Reserved key in settings, using default"
                );
            } else {
                keys.set(action, code);
            }
        }

        if let Some((first, second, code)) = keys.find_duplicate() {
            return Err(DecodeError::DuplicateKeys {
                first,
                second,
                code,
            });
        }

        let end = read(Field::EndSentinel);
        if end != record::END_SENTINEL {
            return Err(DecodeError::BadEndSentinel { found: end });
        }

        config.set_key_bindings(keys);
        debug!(resolution = %config.resolution(), display = config.display(), "Decoded settings record");
        Ok(config)
    }
}
