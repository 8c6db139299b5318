//! Logical actions and their key bindings

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::config::key_catalog;
use crate::constants::defaults::bindings;

/// One of the nine control functions a key can be bound to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Up,
    Down,
    Left,
    Right,
    ActionA,
    ActionB,
    ActionX,
    ActionY,
    Start,
}

impl Action {
    /// Canonical order: settings record layout and duplicate scan
    pub const ORDER: [Action; 9] = [
        Action::Left,
        Action::Right,
        Action::Up,
        Action::Down,
        Action::ActionA,
        Action::ActionB,
        Action::ActionX,
        Action::ActionY,
        Action::Start,
    ];

    /// Position of this action in [`Action::ORDER`]
    pub const fn slot(self) -> usize {
        match self {
            Action::Left => 0,
            Action::Right => 1,
            Action::Up => 2,
            Action::Down => 3,
            Action::ActionA => 4,
            Action::ActionB => 5,
            Action::ActionX => 6,
            Action::ActionY => 7,
            Action::Start => 8,
        }
    }

    /// Factory default key for this action
    pub const fn default_code(self) -> u8 {
        match self {
            Action::Up => bindings::UP,
            Action::Down => bindings::DOWN,
            Action::Left => bindings::LEFT,
            Action::Right => bindings::RIGHT,
            Action::ActionA => bindings::ACTION_A,
            Action::ActionB => bindings::ACTION_B,
            Action::ActionX => bindings::ACTION_X,
            Action::ActionY => bindings::ACTION_Y,
            Action::Start => bindings::START,
        }
    }

    /// Stable identifier used on the command line and in JSON output
    pub const fn name(self) -> &'static str {
        match self {
            Action::Up => "up",
            Action::Down => "down",
            Action::Left => "left",
            Action::Right => "right",
            Action::ActionA => "a",
            Action::ActionB => "b",
            Action::ActionX => "x",
            Action::ActionY => "y",
            Action::Start => "start",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Action {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        let wanted = wanted.strip_prefix("action").unwrap_or(&wanted);
        Action::ORDER
            .into_iter()
            .find(|action| action.name() == wanted)
            .ok_or_else(|| {
                let names: Vec<_> = Action::ORDER.iter().map(|a| a.name()).collect();
                format!("Unknown action '{}' (expected one of: {})", s, names.join(", "))
            })
    }
}

/// Key code for every action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBindings {
    codes: [u8; 9],
}

impl KeyBindings {
    /// Factory bindings: arrows, Space, D, A, S, Enter
    pub fn defaults() -> Self {
        Self {
            codes: Action::ORDER.map(Action::default_code),
        }
    }

    pub fn get(&self, action: Action) -> u8 {
        self.codes[action.slot()]
    }

    pub fn set(&mut self, action: Action, code: u8) {
        self.codes[action.slot()] = code;
    }

    /// Iterate `(action, code)` in canonical order
    pub fn iter(&self) -> impl Iterator<Item = (Action, u8)> + '_ {
        Action::ORDER.into_iter().map(|action| (action, self.get(action)))
    }

    /// Another action already using `code`, if any
    pub fn holder_of(&self, code: u8, except: Action) -> Option<Action> {
        self.iter()
            .find(|(action, c)| *action != except && *c == code)
            .map(|(action, _)| action)
    }

    /// First pair of actions sharing a key, in canonical order
    pub fn find_duplicate(&self) -> Option<(Action, Action, u8)> {
        self.iter().find_map(|(action, code)| {
            Action::ORDER[action.slot() + 1..]
                .iter()
                .find(|other| self.get(**other) == code)
                .map(|other| (action, *other, code))
        })
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self::defaults()
    }
}

// Serializes as {"left": "Left", "a": "Space", ...} for human consumption
impl Serialize for KeyBindings {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(Action::ORDER.len()))?;
        for (action, code) in self.iter() {
            map.serialize_entry(action.name(), &key_catalog::key_name(code))?;
        }
        map.end()
    }
}
