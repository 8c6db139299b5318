//! Application-wide constants
//!
//! This module contains all magic numbers and string literals used throughout
//! the application, providing a single source of truth for constant values.

/// DirectInput keyboard scan codes (DIK_* from dinput.h)
///
/// The game reads its bindings as raw DirectInput codes, so these are stored
/// verbatim in the settings record.
pub mod keys {
    pub const NONE: u8 = 0x00;
    pub const ESCAPE: u8 = 0x01;
    pub const KEY_1: u8 = 0x02;
    pub const KEY_2: u8 = 0x03;
    pub const KEY_3: u8 = 0x04;
    pub const KEY_4: u8 = 0x05;
    pub const KEY_5: u8 = 0x06;
    pub const KEY_6: u8 = 0x07;
    pub const KEY_7: u8 = 0x08;
    pub const KEY_8: u8 = 0x09;
    pub const KEY_9: u8 = 0x0A;
    pub const KEY_0: u8 = 0x0B;
    pub const MINUS: u8 = 0x0C;
    pub const EQUALS: u8 = 0x0D;
    pub const BACK: u8 = 0x0E;
    pub const TAB: u8 = 0x0F;
    pub const Q: u8 = 0x10;
    pub const W: u8 = 0x11;
    pub const E: u8 = 0x12;
    pub const R: u8 = 0x13;
    pub const T: u8 = 0x14;
    pub const Y: u8 = 0x15;
    pub const U: u8 = 0x16;
    pub const I: u8 = 0x17;
    pub const O: u8 = 0x18;
    pub const P: u8 = 0x19;
    pub const LBRACKET: u8 = 0x1A;
    pub const RBRACKET: u8 = 0x1B;
    pub const RETURN: u8 = 0x1C;
    pub const LCONTROL: u8 = 0x1D;
    pub const A: u8 = 0x1E;
    pub const S: u8 = 0x1F;
    pub const D: u8 = 0x20;
    pub const F: u8 = 0x21;
    pub const G: u8 = 0x22;
    pub const H: u8 = 0x23;
    pub const J: u8 = 0x24;
    pub const K: u8 = 0x25;
    pub const L: u8 = 0x26;
    pub const SEMICOLON: u8 = 0x27;
    pub const APOSTROPHE: u8 = 0x28;
    pub const GRAVE: u8 = 0x29;
    pub const LSHIFT: u8 = 0x2A;
    pub const BACKSLASH: u8 = 0x2B;
    pub const Z: u8 = 0x2C;
    pub const X: u8 = 0x2D;
    pub const C: u8 = 0x2E;
    pub const V: u8 = 0x2F;
    pub const B: u8 = 0x30;
    pub const N: u8 = 0x31;
    pub const M: u8 = 0x32;
    pub const COMMA: u8 = 0x33;
    pub const PERIOD: u8 = 0x34;
    pub const SLASH: u8 = 0x35;
    pub const RSHIFT: u8 = 0x36;
    pub const MULTIPLY: u8 = 0x37;
    pub const LMENU: u8 = 0x38;
    pub const SPACE: u8 = 0x39;
    pub const CAPITAL: u8 = 0x3A;
    pub const F1: u8 = 0x3B;
    pub const F2: u8 = 0x3C;
    pub const F3: u8 = 0x3D;
    pub const F4: u8 = 0x3E;
    pub const F5: u8 = 0x3F;
    pub const F6: u8 = 0x40;
    pub const F7: u8 = 0x41;
    pub const F8: u8 = 0x42;
    pub const F9: u8 = 0x43;
    pub const F10: u8 = 0x44;
    pub const NUMLOCK: u8 = 0x45;
    pub const SCROLL: u8 = 0x46;
    pub const NUMPAD7: u8 = 0x47;
    pub const NUMPAD8: u8 = 0x48;
    pub const NUMPAD9: u8 = 0x49;
    pub const SUBTRACT: u8 = 0x4A;
    pub const NUMPAD4: u8 = 0x4B;
    pub const NUMPAD5: u8 = 0x4C;
    pub const NUMPAD6: u8 = 0x4D;
    pub const ADD: u8 = 0x4E;
    pub const NUMPAD1: u8 = 0x4F;
    pub const NUMPAD2: u8 = 0x50;
    pub const NUMPAD3: u8 = 0x51;
    pub const NUMPAD0: u8 = 0x52;
    pub const DECIMAL: u8 = 0x53;
    pub const OEM_102: u8 = 0x56;
    pub const F11: u8 = 0x57;
    pub const F12: u8 = 0x58;
    pub const F13: u8 = 0x64;
    pub const F14: u8 = 0x65;
    pub const F15: u8 = 0x66;
    pub const KANA: u8 = 0x70;
    pub const ABNT_C1: u8 = 0x73;
    pub const CONVERT: u8 = 0x79;
    pub const NOCONVERT: u8 = 0x7B;
    pub const YEN: u8 = 0x7D;
    pub const ABNT_C2: u8 = 0x7E;
    pub const NUMPADEQUALS: u8 = 0x8D;
    /// Shares its code with DIK_CIRCUMFLEX on Japanese layouts
    pub const PREVTRACK: u8 = 0x90;
    pub const AT: u8 = 0x91;
    pub const COLON: u8 = 0x92;
    pub const UNDERLINE: u8 = 0x93;
    pub const KANJI: u8 = 0x94;
    pub const STOP: u8 = 0x95;
    pub const AX: u8 = 0x96;
    pub const UNLABELED: u8 = 0x97;
    pub const NEXTTRACK: u8 = 0x99;
    pub const NUMPADENTER: u8 = 0x9C;
    pub const RCONTROL: u8 = 0x9D;
    pub const MUTE: u8 = 0xA0;
    pub const CALCULATOR: u8 = 0xA1;
    pub const PLAYPAUSE: u8 = 0xA2;
    pub const MEDIASTOP: u8 = 0xA4;
    pub const VOLUMEDOWN: u8 = 0xAE;
    pub const VOLUMEUP: u8 = 0xB0;
    pub const WEBHOME: u8 = 0xB2;
    pub const NUMPADCOMMA: u8 = 0xB3;
    pub const DIVIDE: u8 = 0xB5;
    pub const SYSRQ: u8 = 0xB7;
    pub const RMENU: u8 = 0xB8;
    pub const PAUSE: u8 = 0xC5;
    pub const HOME: u8 = 0xC7;
    pub const UP: u8 = 0xC8;
    pub const PRIOR: u8 = 0xC9;
    pub const LEFT: u8 = 0xCB;
    pub const RIGHT: u8 = 0xCD;
    pub const END: u8 = 0xCF;
    pub const DOWN: u8 = 0xD0;
    pub const NEXT: u8 = 0xD1;
    pub const INSERT: u8 = 0xD2;
    pub const DELETE: u8 = 0xD3;
    pub const LWIN: u8 = 0xDB;
    pub const RWIN: u8 = 0xDC;
    pub const APPS: u8 = 0xDD;
    pub const POWER: u8 = 0xDE;
    pub const SLEEP: u8 = 0xDF;
    pub const WAKE: u8 = 0xE3;
    pub const WEBSEARCH: u8 = 0xE5;
    pub const WEBFAVORITES: u8 = 0xE6;
    pub const WEBREFRESH: u8 = 0xE7;
    pub const WEBSTOP: u8 = 0xE8;
    pub const WEBFORWARD: u8 = 0xE9;
    pub const WEBBACK: u8 = 0xEA;
    pub const MYCOMPUTER: u8 = 0xEB;
    pub const MAIL: u8 = 0xEC;
    pub const MEDIASELECT: u8 = 0xED;
}

/// Binary settings record framing
pub mod record {
    /// Total size of the record in bytes
    pub const SIZE: usize = 53;

    /// Leading magic number (a date: 2011-10-05)
    pub const MAGIC: u32 = 20_111_005;

    /// Trailing end marker
    pub const END_SENTINEL: u32 = 1701;

    /// Control scheme byte value that selects the gamepad
    pub const GAMEPAD_SENTINEL: u8 = 1;
}

/// Configuration paths and filenames
pub mod config {
    /// Application directory name under XDG config
    pub const APP_DIR: &str = "launcher-config";

    /// Settings filename
    pub const FILENAME: &str = "settings.dat";
}

/// Default configuration values
/// These are used when no settings file exists or it fails to decode
pub mod defaults {
    /// Display settings
    pub mod display {
        /// Default resolution catalog index
        pub const RESOLUTION_INDEX: usize = 0;

        /// Windowed by default
        pub const FULLSCREEN: bool = false;

        /// Primary display
        pub const DISPLAY_INDEX: u8 = 0;

        /// Fallback when the environment reports no screens
        pub const MIN_SCREEN_COUNT: u8 = 1;
    }

    /// Language and controller settings
    pub mod input {
        /// English
        pub const LANGUAGE: u8 = 0;

        /// Gamepad rumble off by default
        pub const VIBRATION: bool = false;
    }

    /// Default key for every logical action
    pub mod bindings {
        use crate::constants::keys;

        pub const UP: u8 = keys::UP;
        pub const DOWN: u8 = keys::DOWN;
        pub const LEFT: u8 = keys::LEFT;
        pub const RIGHT: u8 = keys::RIGHT;
        pub const ACTION_A: u8 = keys::SPACE;
        pub const ACTION_B: u8 = keys::D;
        pub const ACTION_X: u8 = keys::A;
        pub const ACTION_Y: u8 = keys::S;
        pub const START: u8 = keys::RETURN;
    }
}
