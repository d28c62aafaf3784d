//! Read-only list of firmware, chip and store facts.

use core::fmt::Write;

use heapless::String;

use crate::config::{INFO_LINE_CAPACITY, SW_VERSION};
use crate::state::{Context, NextState, Screen, ScreenId};
use crate::ui::display::ListView;
use crate::ui::input_logic::ListSelector;
use crate::ui::NavKey;
use crate::{Error, Millis};

pub const BADGE_INFO_TITLE: &str = "Badge Info:";

const LINE_COUNT: usize = 6;

type Line = String<INFO_LINE_CAPACITY>;

// A fragment that does not fit is dropped whole, so every line must fit its
// widest value: a full u32 after the longest numeric label.
const _: () = assert!("HAL Version: ".len() + 10 <= INFO_LINE_CAPACITY);
const _: () = assert!("SW Version: ".len() + SW_VERSION.len() <= INFO_LINE_CAPACITY);

pub struct BadgeInfoState {
    lines: [Line; LINE_COUNT],
    list: ListSelector,
}

impl Default for BadgeInfoState {
    fn default() -> Self {
        Self::new()
    }
}

impl BadgeInfoState {
    pub fn new() -> Self {
        Self {
            lines: Default::default(),
            list: ListSelector::new(LINE_COUNT),
        }
    }

    pub fn lines(&self) -> [&str; LINE_COUNT] {
        core::array::from_fn(|i| self.lines[i].as_str())
    }

    pub fn selected(&self) -> usize {
        self.list.selected()
    }
}

impl Screen for BadgeInfoState {
    const ID: ScreenId = ScreenId::BadgeInfo;

    fn on_init(&mut self, ctx: &mut Context<'_>) -> Result<(), Error> {
        ctx.display.bind_list(BADGE_INFO_TITLE);

        for line in self.lines.iter_mut() {
            line.clear();
        }
        // Cannot fail, see the capacity assertions above.
        let _ = write!(self.lines[0], "SW Version: {}", SW_VERSION);
        let _ = write!(self.lines[1], "DEVID: {}", ctx.board.dev_id());
        let _ = write!(self.lines[2], "REVID: {}", ctx.board.rev_id());
        let _ = write!(self.lines[3], "HAL Version: {}", ctx.board.hal_version());
        let _ = write!(self.lines[4], "UID: {}", ctx.store.my_unique_id());
        let _ = write!(self.lines[5], "Num contacts: {}", ctx.store.num_contacts());
        Ok(())
    }

    fn on_run(&mut self, ctx: &mut Context<'_>, _elapsed: Millis) -> NextState {
        let mut next = NextState::Stay;
        match ctx.input.nav() {
            Some(NavKey::Home) => {
                self.list.home();
                next = NextState::Goto(ScreenId::Menu);
            }
            Some(key) => {
                self.list.navigate(key);
            }
            None => {}
        }

        ctx.display.draw_list(&ListView {
            title: BADGE_INFO_TITLE,
            items: &self.lines(),
            selected: self.list.selected(),
        });
        next
    }

    fn on_shutdown(&mut self, ctx: &mut Context<'_>) -> Result<(), Error> {
        ctx.display.unbind_list();
        Ok(())
    }
}
