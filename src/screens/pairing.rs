//! IR pairing. Only drives the carrier for now; the exchange itself is
//! not implemented, so the screen just waits for a key.

use embedded_graphics::prelude::{Point, Size};
use embedded_graphics::primitives::Rectangle;

use crate::state::{Context, NextState, Screen, ScreenId};
use crate::{Error, Millis};

#[derive(Default)]
pub struct PairingState {
    carrier_on: bool,
}

impl PairingState {
    pub const fn new() -> Self {
        Self { carrier_on: false }
    }

    pub fn carrier_on(&self) -> bool {
        self.carrier_on
    }
}

impl Screen for PairingState {
    const ID: ScreenId = ScreenId::Pairing;

    fn on_init(&mut self, ctx: &mut Context<'_>) -> Result<(), Error> {
        ctx.board.start_ir_carrier()?;
        self.carrier_on = true;
        Ok(())
    }

    fn on_run(&mut self, ctx: &mut Context<'_>, _elapsed: Millis) -> NextState {
        ctx.display.label_multiline(
            "not implemented yet",
            Rectangle::new(Point::new(0, 20), Size::new(120, 10)),
        );
        ctx.display.label_multiline(
            "press a key to return",
            Rectangle::new(Point::new(0, 30), Size::new(120, 30)),
        );

        if ctx.input.any_key() {
            NextState::Goto(ScreenId::Menu)
        } else {
            NextState::Stay
        }
    }

    fn on_shutdown(&mut self, ctx: &mut Context<'_>) -> Result<(), Error> {
        self.carrier_on = false;
        ctx.board.stop_ir_carrier()
    }
}
