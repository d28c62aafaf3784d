//! Timed message box. Configured by the registry before every use.

use embedded_graphics::prelude::{Point, Size};
use embedded_graphics::primitives::Rectangle;
use heapless::String;

use crate::config::MESSAGE_CAPACITY;
use crate::state::{Context, NextState, Screen, ScreenId};
use crate::Millis;

pub struct MessageState {
    text: String<MESSAGE_CAPACITY>,
    dwell: Millis,
    next: ScreenId,
}

impl MessageState {
    pub const fn new(dwell: Millis, next: ScreenId) -> Self {
        Self {
            text: String::new(),
            dwell,
            next,
        }
    }

    /// Copy `msg` in, truncated to the buffer at a char boundary.
    pub fn set_message(&mut self, msg: &str) {
        self.text.clear();
        for c in msg.chars() {
            if self.text.push(c).is_err() {
                break;
            }
        }
    }

    pub fn set_next(&mut self, next: ScreenId) {
        self.next = next;
    }

    pub fn set_dwell(&mut self, dwell: Millis) {
        self.dwell = dwell;
    }

    pub fn text(&self) -> &str {
        self.text.as_str()
    }

    pub fn dwell(&self) -> Millis {
        self.dwell
    }

    pub fn next(&self) -> ScreenId {
        self.next
    }
}

impl Screen for MessageState {
    const ID: ScreenId = ScreenId::Message;

    fn on_run(&mut self, ctx: &mut Context<'_>, elapsed: Millis) -> NextState {
        ctx.display.label_multiline(
            self.text.as_str(),
            Rectangle::new(Point::new(0, 10), Size::new(120, 50)),
        );

        if elapsed > self.dwell || ctx.input.any_key() {
            NextState::Goto(self.next)
        } else {
            NextState::Stay
        }
    }
}
