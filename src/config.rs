//! Application-wide constants and compile-time configuration.
//!
//! Key codes, dwell times, buffer capacities and display geometry live
//! here so they can be tuned in one place.

use crate::Millis;

// Keypad

/// Key code that moves a list selection up (wraps to the last item).
pub const KEY_PREVIOUS: u8 = 1;
/// Key code that moves a list selection down (wraps to the first item).
pub const KEY_NEXT: u8 = 7;
/// Key code for home / back.
pub const KEY_HOME: u8 = 9;
/// Key code for select / confirm.
pub const KEY_SELECT: u8 = 11;

/// Decoded character reserved for "backspace".
pub const CHAR_BACKSPACE: u8 = 127;
/// Decoded character reserved for "enter / confirm".
pub const CHAR_ENTER: u8 = 126;

/// Keypad matrix geometry (phone layout, codes numbered row-major from 1).
pub const KEYPAD_ROWS: usize = 4;
pub const KEYPAD_COLS: usize = 3;

/// Consecutive identical scans before a key press is reported.
pub const KEYPAD_DEBOUNCE_SCANS: u8 = 2;

// Timing

/// How long the logo splash stays up after boot (ms).
pub const LOGO_DWELL_MS: Millis = 5_000;

/// Default dwell of the message box (ms).
pub const MESSAGE_DWELL_MS: Millis = 3_000;

/// Dwell of the message shown when a screen fails to initialise (ms).
pub const INIT_FAILURE_DWELL_MS: Millis = 10_000;

/// Dwell of the message shown for screens that are not built yet (ms).
pub const UNAVAILABLE_DWELL_MS: Millis = 2_000;

/// Driver loop frame rate.
pub const FRAMES_PER_SECOND: u64 = 25;

// Display (SSD1306 128×64)

pub const DISPLAY_WIDTH: i32 = 128;
pub const DISPLAY_HEIGHT: i32 = 64;

/// Logo ticker wraps back to x = 0 once it scrolls past this column.
pub const LOGO_SCROLL_LIMIT: i32 = DISPLAY_WIDTH - 1;

/// Glyph size of the UI font (FONT_6X10).
pub const GLYPH_WIDTH: i32 = 6;
pub const GLYPH_HEIGHT: i32 = 10;

// Buffers

/// Capacity of the message box text (bytes).
pub const MESSAGE_CAPACITY: usize = 64;

/// Capacity of the settings text-entry buffer (bytes).
pub const INPUT_CAPACITY: usize = 12;

/// Maximum agent name length stored per contact (bytes).
pub const AGENT_NAME_CAPACITY: usize = 12;

/// Maximum number of contacts held by the RAM contact store.
pub const MAX_CONTACTS: usize = 16;

/// Contacts shown by the address book.
pub const ADDRESS_BOOK_CAPACITY: usize = 4;

/// Capacity of one badge info line (bytes).
pub const INFO_LINE_CAPACITY: usize = 24;

// Identity

/// Firmware version shown on the badge info screen.
pub const SW_VERSION: &str = "1.0.0";

/// Text scrolled across the logo splash.
pub const LOGO_TEXT: &str = "HI FROM STM32";
