//! User interface plumbing shared by every screen - keypad input,
//! list navigation and the display sink.
//!
//! ## Components
//!
//! - **Input**: one polled keypad snapshot per tick
//! - **Display**: drawing primitives (labels, lists) the screens call into
//! - **Input logic**: wrap-around list selection and text entry
//! - **Keypad**: matrix key codes, debouncing and key decoding

pub mod display;
pub mod input_logic;
pub mod keypad;

use crate::config::{CHAR_BACKSPACE, CHAR_ENTER, KEY_HOME, KEY_NEXT, KEY_PREVIOUS, KEY_SELECT};

/// Keypad state for one tick.
///
/// `key` is the physical key code (1-11) selected this tick, `character`
/// the decoded character and `digit` the decoded digit, each `None` when
/// nothing was produced.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Input {
    pub key: Option<u8>,
    pub character: Option<u8>,
    pub digit: Option<u8>,
}

impl Input {
    /// No key pressed this tick.
    pub const fn idle() -> Self {
        Self {
            key: None,
            character: None,
            digit: None,
        }
    }

    /// Only a physical key selected.
    pub const fn key(code: u8) -> Self {
        Self {
            key: Some(code),
            character: None,
            digit: None,
        }
    }

    /// Only a decoded character.
    pub const fn character(c: u8) -> Self {
        Self {
            key: None,
            character: Some(c),
            digit: None,
        }
    }

    /// A key that also decoded to a digit.
    pub const fn digit(code: u8, digit: u8) -> Self {
        Self {
            key: Some(code),
            character: None,
            digit: Some(digit),
        }
    }

    /// `true` if any physical key was selected this tick.
    pub fn any_key(&self) -> bool {
        self.key.is_some()
    }

    /// Navigation meaning of the selected key, if it has one.
    pub fn nav(&self) -> Option<NavKey> {
        self.key.and_then(NavKey::from_code)
    }

    /// Decoded character classified into text-entry actions.
    pub fn letter(&self) -> Option<Letter> {
        self.character.map(Letter::from_raw)
    }
}

/// Something that can be polled once per tick for keypad state.
pub trait InputSource {
    fn poll(&mut self) -> Input;
}

/// The four key codes with a navigation meaning.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum NavKey {
    Previous,
    Next,
    Home,
    Select,
}

impl NavKey {
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            KEY_PREVIOUS => Some(NavKey::Previous),
            KEY_NEXT => Some(NavKey::Next),
            KEY_HOME => Some(NavKey::Home),
            KEY_SELECT => Some(NavKey::Select),
            _ => None,
        }
    }

    pub const fn code(self) -> u8 {
        match self {
            NavKey::Previous => KEY_PREVIOUS,
            NavKey::Next => KEY_NEXT,
            NavKey::Home => KEY_HOME,
            NavKey::Select => KEY_SELECT,
        }
    }
}

/// A decoded character as seen by text entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Letter {
    Backspace,
    Enter,
    Char(char),
    /// Anything outside printable ASCII.
    Ignored,
}

impl Letter {
    pub fn from_raw(raw: u8) -> Self {
        match raw {
            CHAR_BACKSPACE => Letter::Backspace,
            CHAR_ENTER => Letter::Enter,
            0x20..=0x7D => Letter::Char(raw as char),
            _ => Letter::Ignored,
        }
    }
}
