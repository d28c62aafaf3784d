//! Badge hardware behind the library's traits.
//!
//! ## Components
//!
//! - **OLED**: SSD1306 128×64 over I²C1 (PB6 = SCL, PB7 = SDA)
//! - **Keypad**: 4×3 matrix, rows PC0..PC3 driven low one at a time,
//!   columns PC4..PC6 with pull-ups
//! - **Board**: TIM2 CH2 (PA1) drives the 38 kHz IR carrier, DBGMCU and
//!   the factory UID identify the chip

pub mod board;
pub mod keypad;
pub mod oled;
