//! Main menu.

use crate::state::{Context, NextState, Screen, ScreenId};
use crate::ui::display::ListView;
use crate::ui::input_logic::ListSelector;
use crate::ui::NavKey;
use crate::{Error, Millis};

pub const MENU_TITLE: &str = "Main Menu";

/// Main menu entries, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MenuItem {
    Settings,
    IrPair,
    AddressBook,
    SendMessage,
    Enigma,
    BadgeInfo,
    RadioInfo,
}

impl MenuItem {
    pub const ALL: [Self; 7] = [
        Self::Settings,
        Self::IrPair,
        Self::AddressBook,
        Self::SendMessage,
        Self::Enigma,
        Self::BadgeInfo,
        Self::RadioInfo,
    ];

    pub const LABELS: [&'static str; 7] = [
        Self::Settings.label(),
        Self::IrPair.label(),
        Self::AddressBook.label(),
        Self::SendMessage.label(),
        Self::Enigma.label(),
        Self::BadgeInfo.label(),
        Self::RadioInfo.label(),
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Settings => "Settings",
            Self::IrPair => "IR Pair",
            Self::AddressBook => "Address Book",
            Self::SendMessage => "Send Message",
            Self::Enigma => "Enigma",
            Self::BadgeInfo => "Badge Info",
            Self::RadioInfo => "Radio Info",
        }
    }

    /// Screen opened when this entry is selected.
    pub const fn target(self) -> ScreenId {
        match self {
            Self::Settings => ScreenId::Settings,
            Self::IrPair => ScreenId::Pairing,
            Self::AddressBook => ScreenId::AddressBook,
            Self::SendMessage => ScreenId::SendMessage,
            Self::Enigma => ScreenId::Enigma,
            Self::BadgeInfo => ScreenId::BadgeInfo,
            Self::RadioInfo => ScreenId::RadioInfo,
        }
    }
}

pub struct MenuState {
    list: ListSelector,
}

impl Default for MenuState {
    fn default() -> Self {
        Self::new()
    }
}

impl MenuState {
    pub const fn new() -> Self {
        Self {
            list: ListSelector::new(MenuItem::ALL.len()),
        }
    }

    pub fn selected(&self) -> usize {
        self.list.selected()
    }

    pub fn selected_item(&self) -> MenuItem {
        MenuItem::ALL[self.list.selected()]
    }
}

impl Screen for MenuState {
    const ID: ScreenId = ScreenId::Menu;

    fn on_init(&mut self, ctx: &mut Context<'_>) -> Result<(), Error> {
        ctx.display.bind_list(MENU_TITLE);
        Ok(())
    }

    fn on_run(&mut self, ctx: &mut Context<'_>, _elapsed: Millis) -> NextState {
        let mut next = NextState::Stay;
        match ctx.input.nav() {
            Some(NavKey::Select) => next = NextState::Goto(self.selected_item().target()),
            Some(key) => {
                self.list.navigate(key);
            }
            None => {}
        }

        ctx.display.draw_list(&ListView {
            title: MENU_TITLE,
            items: &MenuItem::LABELS,
            selected: self.list.selected(),
        });
        next
    }

    fn on_shutdown(&mut self, ctx: &mut Context<'_>) -> Result<(), Error> {
        ctx.display.unbind_list();
        self.list.home();
        Ok(())
    }
}
