//! 4×3 keypad matrix: key codes, debouncing and decoding into [`Input`].
//!
//! Key codes follow the phone layout, numbered row-major from 1:
//!
//! ```text
//!   1  2  3
//!   4  5  6
//!   7  8  9
//!  10 11 12        (* 0 #)
//! ```
//!
//! Scanning the GPIO matrix is the binary's job; this module only turns
//! raw scan results into one [`Input`] per press.

use crate::config::{CHAR_BACKSPACE, CHAR_ENTER, KEYPAD_COLS, KEYPAD_DEBOUNCE_SCANS, KEYPAD_ROWS};
use crate::ui::Input;

/// Key code at a matrix position, `None` outside the matrix.
pub fn key_code(row: usize, col: usize) -> Option<u8> {
    if row >= KEYPAD_ROWS || col >= KEYPAD_COLS {
        return None;
    }
    u8::try_from(row * KEYPAD_COLS + col + 1).ok()
}

/// Everything a single key press means.
///
/// Digit keys type their digit. `*` is backspace in text fields and 0 in
/// number fields, `#` confirms text fields. `0` sits on the select key,
/// so it only reaches text fields.
pub fn decode(code: u8) -> Input {
    match code {
        1..=9 => Input {
            key: Some(code),
            character: Some(b'0' + code),
            digit: Some(code),
        },
        10 => Input {
            key: Some(code),
            character: Some(CHAR_BACKSPACE),
            digit: Some(0),
        },
        11 => Input {
            key: Some(code),
            character: Some(b'0'),
            digit: None,
        },
        12 => Input {
            key: Some(code),
            character: Some(CHAR_ENTER),
            digit: None,
        },
        _ => Input::idle(),
    }
}

/// Reports a held key once, after it has been seen on
/// [`KEYPAD_DEBOUNCE_SCANS`] consecutive scans.
#[derive(Default)]
pub struct KeyLatch {
    candidate: Option<u8>,
    count: u8,
    reported: bool,
}

impl KeyLatch {
    pub const fn new() -> Self {
        Self {
            candidate: None,
            count: 0,
            reported: false,
        }
    }

    /// Feed one scan result; returns the key code on the scan where the
    /// press becomes stable.
    pub fn update(&mut self, raw: Option<u8>) -> Option<u8> {
        if raw != self.candidate {
            self.candidate = raw;
            self.count = 0;
            self.reported = false;
        }

        let code = raw?;
        if self.reported {
            return None;
        }
        self.count = self.count.saturating_add(1);
        if self.count >= KEYPAD_DEBOUNCE_SCANS {
            self.reported = true;
            Some(code)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::{Letter, NavKey};

    #[test]
    fn codes_are_row_major_from_one() {
        assert_eq!(key_code(0, 0), Some(1));
        assert_eq!(key_code(0, 2), Some(3));
        assert_eq!(key_code(2, 0), Some(7));
        assert_eq!(key_code(3, 1), Some(11));
        assert_eq!(key_code(3, 2), Some(12));
        assert_eq!(key_code(4, 0), None);
        assert_eq!(key_code(0, 3), None);
    }

    #[test]
    fn navigation_keys_keep_their_codes() {
        assert_eq!(decode(1).nav(), Some(NavKey::Previous));
        assert_eq!(decode(7).nav(), Some(NavKey::Next));
        assert_eq!(decode(9).nav(), Some(NavKey::Home));
        assert_eq!(decode(11).nav(), Some(NavKey::Select));
    }

    #[test]
    fn digit_keys_type_digits() {
        let input = decode(5);
        assert_eq!(input.digit, Some(5));
        assert_eq!(input.letter(), Some(Letter::Char('5')));
    }

    #[test]
    fn star_and_hash_edit_text() {
        assert_eq!(decode(10).letter(), Some(Letter::Backspace));
        assert_eq!(decode(10).digit, Some(0));
        assert_eq!(decode(12).letter(), Some(Letter::Enter));
        assert_eq!(decode(11).letter(), Some(Letter::Char('0')));
    }

    #[test]
    fn unknown_code_is_idle() {
        assert_eq!(decode(0), Input::idle());
        assert_eq!(decode(13), Input::idle());
    }

    #[test]
    fn latch_reports_once_per_press() {
        let mut latch = KeyLatch::new();
        assert_eq!(latch.update(Some(4)), None);
        assert_eq!(latch.update(Some(4)), Some(4));
        assert_eq!(latch.update(Some(4)), None);
        assert_eq!(latch.update(Some(4)), None);
        assert_eq!(latch.update(None), None);
        assert_eq!(latch.update(Some(4)), None);
        assert_eq!(latch.update(Some(4)), Some(4));
    }

    #[test]
    fn latch_ignores_bounce() {
        let mut latch = KeyLatch::new();
        assert_eq!(latch.update(Some(2)), None);
        assert_eq!(latch.update(None), None);
        assert_eq!(latch.update(Some(2)), None);
        assert_eq!(latch.update(Some(3)), None);
        assert_eq!(latch.update(Some(3)), Some(3));
    }
}
