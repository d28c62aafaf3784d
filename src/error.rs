//! Unified error type for the badge.
//!
//! We avoid `alloc` - all error variants carry only fixed-size data.
//! Implements `defmt::Format` for efficient on-target logging.

use core::fmt;

/// Top-level error type returned by screen init/shutdown hooks and by
/// the contact store.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// A peripheral (timer, output channel) failed to start or stop.
    /// Carries an optional human-readable explanation.
    HardwareFault(Option<&'static str>),

    /// The contact store rejected a write.
    Storage,
}

impl Error {
    /// Human-readable text, suitable for the message box.
    pub fn message(&self) -> &'static str {
        match self {
            Error::HardwareFault(Some(msg)) => msg,
            Error::HardwareFault(None) => "Hardware fault",
            Error::Storage => "Save failed",
        }
    }

    /// Shorthand for a hardware fault with an explanation.
    pub const fn hardware(msg: &'static str) -> Self {
        Error::HardwareFault(Some(msg))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}
