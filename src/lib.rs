//! Screen/menu state machine for the badge.
//!
//! Everything in this library is pure logic that runs on the host as well
//! as on the target: the screen lifecycle, the singleton registry, the
//! concrete screens and the list navigation they share. Hardware sits
//! behind the [`ui::display::Display`], [`contacts::ContactStore`] and
//! [`board::Board`] traits.
//!
//! Usage: `cargo test --lib` on the host, `cargo run --release --features
//! embedded` for the badge.
//!
//! Note: The embedded binary uses main.rs with #![no_std] and #![no_main].

#![cfg_attr(not(test), no_std)]

pub mod board;
pub mod config;
pub mod contacts;
pub mod error;
pub mod screens;
pub mod state;
pub mod ui;

#[cfg(test)]
mod test_support;

pub use error::Error;

/// Milliseconds since boot, as read from the system tick (wraps).
pub type Millis = u32;
