//! Screen state machine.
//!
//! Exactly one screen is active at a time. Every tick the driver hands the
//! active screen a [`Context`]; the screen answers with a [`NextState`]
//! and the [`StateRegistry`] turns that into the handle of the screen to
//! run on the following tick.
//!
//! Lifecycle per activation (enforced by [`StateCell`]):
//!
//! ```text
//! tick 0        on_init          -> Stay (nothing drawn)
//! tick 1..n     on_run           -> Stay | Goto | Message
//! last tick     on_run, on_shutdown   (only when leaving)
//! ```

mod lifecycle;
mod machine;
mod registry;

pub use lifecycle::StateCell;
pub use machine::StateMachine;
pub use registry::{StateHandle, StateRegistry, UNAVAILABLE_TEXT};

use crate::board::Board;
use crate::config::{INIT_FAILURE_DWELL_MS, MESSAGE_DWELL_MS};
use crate::contacts::ContactStore;
use crate::ui::display::Display;
use crate::ui::Input;
use crate::{Error, Millis};

/// Every screen identifier the registry knows about, implemented or not.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ScreenId {
    Logo,
    Message,
    Menu,
    Settings,
    Pairing,
    AddressBook,
    SendMessage,
    Enigma,
    BadgeInfo,
    RadioInfo,
}

/// Parameters for the message box.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MessageRequest {
    pub text: &'static str,
    pub dwell: Millis,
    /// Screen to go to once the message is dismissed.
    pub then: ScreenId,
}

/// Result of one tick of the active screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum NextState {
    /// Keep running the current screen.
    Stay,
    /// Switch to another registry entry.
    Goto(ScreenId),
    /// Switch to the message box, configured with the request.
    Message(MessageRequest),
}

impl NextState {
    /// Message box with the default dwell time.
    pub const fn message(text: &'static str, then: ScreenId) -> Self {
        NextState::Message(MessageRequest {
            text,
            dwell: MESSAGE_DWELL_MS,
            then,
        })
    }

    /// What a screen that failed to initialise turns into.
    pub fn init_failure(err: Error) -> Self {
        NextState::Message(MessageRequest {
            text: err.message(),
            dwell: INIT_FAILURE_DWELL_MS,
            then: ScreenId::Menu,
        })
    }

    /// `true` if this result hands control away from `current`.
    pub fn leaves(&self, current: ScreenId) -> bool {
        match self {
            NextState::Stay => false,
            NextState::Goto(id) => *id != current,
            NextState::Message(_) => current != ScreenId::Message,
        }
    }
}

/// Everything a screen may touch during one tick.
pub struct Context<'a> {
    /// Milliseconds since boot (wrapping).
    pub now: Millis,
    pub input: Input,
    pub display: &'a mut dyn Display,
    pub store: &'a mut dyn ContactStore,
    pub board: &'a mut dyn Board,
}

/// Behaviour of one screen variant.
///
/// Only [`StateCell`] calls these hooks; it guarantees one `on_init` and
/// one `on_shutdown` per activation.
pub trait Screen {
    const ID: ScreenId;

    /// One-time setup for this activation. An error sends the user to a
    /// timed message box instead.
    fn on_init(&mut self, _ctx: &mut Context<'_>) -> Result<(), Error> {
        Ok(())
    }

    /// One tick. `elapsed` is the time since `on_init` succeeded.
    fn on_run(&mut self, ctx: &mut Context<'_>, elapsed: Millis) -> NextState;

    /// Teardown, runs right before control moves to another screen.
    fn on_shutdown(&mut self, _ctx: &mut Context<'_>) -> Result<(), Error> {
        Ok(())
    }
}
