//! Keypad matrix scanning.
//!
//! One full scan per frame. A row is pulled low, the columns are sampled,
//! and the first closed switch wins; the latch in the library turns the
//! raw scans into single presses.

use badge::config::{KEYPAD_COLS, KEYPAD_ROWS};
use badge::ui::keypad::{decode, key_code, KeyLatch};
use badge::ui::{Input, InputSource};
use defmt::debug;
use embassy_stm32::gpio::{Input as Pin, Output};

/// Core cycles to wait after driving a row before sampling the columns.
const ROW_SETTLE_CYCLES: u32 = 100;

pub struct MatrixKeypad<'d> {
    rows: [Output<'d>; KEYPAD_ROWS],
    cols: [Pin<'d>; KEYPAD_COLS],
    latch: KeyLatch,
}

impl<'d> MatrixKeypad<'d> {
    /// Rows must start high, columns must have pull-ups.
    pub fn new(rows: [Output<'d>; KEYPAD_ROWS], cols: [Pin<'d>; KEYPAD_COLS]) -> Self {
        Self {
            rows,
            cols,
            latch: KeyLatch::new(),
        }
    }

    fn scan(&mut self) -> Option<u8> {
        let mut found = None;
        for (r, row) in self.rows.iter_mut().enumerate() {
            row.set_low();
            cortex_m::asm::delay(ROW_SETTLE_CYCLES);
            if found.is_none() {
                found = self
                    .cols
                    .iter()
                    .position(|col| col.is_low())
                    .and_then(|c| key_code(r, c));
            }
            row.set_high();
        }
        found
    }
}

impl InputSource for MatrixKeypad<'_> {
    fn poll(&mut self) -> Input {
        let raw = self.scan();
        match self.latch.update(raw) {
            Some(code) => {
                debug!("Keypad: key {}", code);
                decode(code)
            }
            None => Input::idle(),
        }
    }
}
