//! List selection and text entry shared by the menu-style screens.

use heapless::String;

use super::NavKey;

/// Move selection cursor one item up, wrapping from the first item to
/// the last.
pub fn select_prev(selected: usize, item_count: usize) -> usize {
    if item_count == 0 {
        0
    } else if selected == 0 {
        item_count - 1
    } else {
        selected - 1
    }
}

/// Move selection cursor one item down, wrapping from the last item to
/// the first.
pub fn select_next(selected: usize, item_count: usize) -> usize {
    if item_count == 0 || selected >= item_count - 1 {
        0
    } else {
        selected + 1
    }
}

/// Cyclic selector over a fixed-size ordered list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ListSelector {
    selected: usize,
    len: usize,
}

impl ListSelector {
    pub const fn new(len: usize) -> Self {
        Self { selected: 0, len }
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Change the number of items; the selection restarts at the top.
    pub fn set_len(&mut self, len: usize) {
        self.len = len;
        self.selected = 0;
    }

    pub fn previous(&mut self) {
        self.selected = select_prev(self.selected, self.len);
    }

    pub fn next(&mut self) {
        self.selected = select_next(self.selected, self.len);
    }

    pub fn home(&mut self) {
        self.selected = 0;
    }

    /// Apply previous/next/home. Returns `true` when the key was consumed,
    /// `Select` never is - the owning screen dispatches on it.
    pub fn navigate(&mut self, key: NavKey) -> bool {
        match key {
            NavKey::Previous => self.previous(),
            NavKey::Next => self.next(),
            NavKey::Home => self.home(),
            NavKey::Select => return false,
        }
        true
    }
}

/// Fixed-capacity text entry buffer. The cursor always sits at the end.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TextInput<const N: usize> {
    buf: String<N>,
}

impl<const N: usize> TextInput<N> {
    pub const fn new() -> Self {
        Self { buf: String::new() }
    }

    /// Append at the cursor. Returns `false` when the buffer is full.
    pub fn push(&mut self, c: char) -> bool {
        self.buf.push(c).is_ok()
    }

    /// Step the cursor back one character. No-op at position 0.
    pub fn backspace(&mut self) {
        let _ = self.buf.pop();
    }

    pub fn clear(&mut self) {
        self.buf.clear();
    }

    pub fn cursor(&self) -> usize {
        self.buf.len()
    }

    pub fn as_str(&self) -> &str {
        self.buf.as_str()
    }

    /// Leading decimal digits as a number, 0 when there are none.
    /// Saturates instead of overflowing.
    pub fn parse_number(&self) -> u32 {
        self.buf
            .bytes()
            .take_while(u8::is_ascii_digit)
            .fold(0u32, |acc, b| {
                acc.saturating_mul(10).saturating_add(u32::from(b - b'0'))
            })
    }
}
