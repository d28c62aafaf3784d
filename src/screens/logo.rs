//! Boot splash: scrolls a banner, then hands over to the main menu.

use crate::config::{DISPLAY_HEIGHT, GLYPH_HEIGHT, LOGO_DWELL_MS, LOGO_SCROLL_LIMIT, LOGO_TEXT};
use crate::state::{Context, NextState, Screen, ScreenId};
use crate::{Error, Millis};

pub struct LogoState {
    dwell: Millis,
    /// Horizontal offset of the banner. Cosmetic only.
    x: i32,
}

impl Default for LogoState {
    fn default() -> Self {
        Self::new()
    }
}

impl LogoState {
    pub const fn new() -> Self {
        Self {
            dwell: LOGO_DWELL_MS,
            x: 0,
        }
    }

    pub fn set_dwell(&mut self, dwell: Millis) {
        self.dwell = dwell;
    }

    pub fn dwell(&self) -> Millis {
        self.dwell
    }

    pub fn scroll_x(&self) -> i32 {
        self.x
    }
}

impl Screen for LogoState {
    const ID: ScreenId = ScreenId::Logo;

    fn on_init(&mut self, _ctx: &mut Context<'_>) -> Result<(), Error> {
        self.x = 0;
        Ok(())
    }

    fn on_run(&mut self, ctx: &mut Context<'_>, elapsed: Millis) -> NextState {
        ctx.display
            .label(LOGO_TEXT, self.x, (DISPLAY_HEIGHT - GLYPH_HEIGHT) / 2);

        self.x += 1;
        if self.x > LOGO_SCROLL_LIMIT {
            self.x = 0;
        }

        if elapsed > self.dwell || ctx.input.any_key() {
            NextState::Goto(ScreenId::Menu)
        } else {
            NextState::Stay
        }
    }
}
