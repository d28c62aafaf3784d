//! Process-wide table of singleton screens.
//!
//! Every screen is allocated once in [`StateRegistry::new`] and lives as
//! long as the registry. Accessors hand out [`StateHandle`]s, small
//! copyable tags that never own anything. Logo and Message are configured
//! by their accessor before the handle is returned, so two in-flight
//! requests for the same parameterized screen overwrite each other.

use defmt_or_log as log;

use super::{Context, NextState, ScreenId, StateCell};
use crate::config::{MESSAGE_DWELL_MS, UNAVAILABLE_DWELL_MS};
use crate::screens::{
    AddressBookState, BadgeInfoState, LogoState, MenuState, MessageState, PairingState,
    SettingsState,
};
use crate::Millis;

/// Text of the message shown when a screen has no implementation.
pub const UNAVAILABLE_TEXT: &str = "Not available yet";

/// Registry slots that actually hold a screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
enum Slot {
    Logo,
    Message,
    Menu,
    Settings,
    Pairing,
    AddressBook,
    BadgeInfo,
}

/// Non-owning reference to a registry entry. Only the registry can make
/// one, so holding a handle means the screen exists.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StateHandle(Slot);

impl StateHandle {
    pub fn id(self) -> ScreenId {
        match self.0 {
            Slot::Logo => ScreenId::Logo,
            Slot::Message => ScreenId::Message,
            Slot::Menu => ScreenId::Menu,
            Slot::Settings => ScreenId::Settings,
            Slot::Pairing => ScreenId::Pairing,
            Slot::AddressBook => ScreenId::AddressBook,
            Slot::BadgeInfo => ScreenId::BadgeInfo,
        }
    }
}

pub struct StateRegistry {
    logo: StateCell<LogoState>,
    message: StateCell<MessageState>,
    menu: StateCell<MenuState>,
    settings: StateCell<SettingsState>,
    pairing: StateCell<PairingState>,
    address_book: StateCell<AddressBookState>,
    badge_info: StateCell<BadgeInfoState>,
}

impl Default for StateRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl StateRegistry {
    /// Allocate every screen. Call once, before the driver loop starts.
    pub fn new() -> Self {
        Self {
            logo: StateCell::new(LogoState::new()),
            message: StateCell::new(MessageState::new(MESSAGE_DWELL_MS, ScreenId::Menu)),
            menu: StateCell::new(MenuState::new()),
            settings: StateCell::new(SettingsState::new()),
            pairing: StateCell::new(PairingState::new()),
            address_book: StateCell::new(AddressBookState::new()),
            badge_info: StateCell::new(BadgeInfoState::new()),
        }
    }

    // ════════════════════════════════════════════════════════════════════
    // Accessors
    // ════════════════════════════════════════════════════════════════════

    pub fn logo_state(&mut self, dwell: Millis) -> StateHandle {
        self.logo.screen_mut().set_dwell(dwell);
        StateHandle(Slot::Logo)
    }

    /// Configure the message box, then hand it out.
    pub fn display_message_state(&mut self, then: ScreenId, text: &str, dwell: Millis) -> StateHandle {
        let msg = self.message.screen_mut();
        msg.set_message(text);
        msg.set_next(then);
        msg.set_dwell(dwell);
        StateHandle(Slot::Message)
    }

    pub fn menu_state(&self) -> StateHandle {
        StateHandle(Slot::Menu)
    }

    pub fn settings_state(&self) -> StateHandle {
        StateHandle(Slot::Settings)
    }

    pub fn pairing_state(&self) -> StateHandle {
        StateHandle(Slot::Pairing)
    }

    pub fn address_book_state(&self) -> StateHandle {
        StateHandle(Slot::AddressBook)
    }

    pub fn badge_info_state(&self) -> StateHandle {
        StateHandle(Slot::BadgeInfo)
    }

    // TODO: compose-from-address-book screen; until then the address book
    // select key lands on the "not available" message.
    pub fn send_message_state(&self) -> Option<StateHandle> {
        None
    }

    pub fn enigma_state(&self) -> Option<StateHandle> {
        None
    }

    pub fn radio_info_state(&self) -> Option<StateHandle> {
        None
    }

    /// Handle for `id`, `None` if that screen is not implemented. Logo and
    /// Message keep whatever parameters they were last given.
    pub fn handle(&self, id: ScreenId) -> Option<StateHandle> {
        match id {
            ScreenId::Logo => Some(StateHandle(Slot::Logo)),
            ScreenId::Message => Some(StateHandle(Slot::Message)),
            ScreenId::Menu => Some(self.menu_state()),
            ScreenId::Settings => Some(self.settings_state()),
            ScreenId::Pairing => Some(self.pairing_state()),
            ScreenId::AddressBook => Some(self.address_book_state()),
            ScreenId::BadgeInfo => Some(self.badge_info_state()),
            ScreenId::SendMessage => self.send_message_state(),
            ScreenId::Enigma => self.enigma_state(),
            ScreenId::RadioInfo => self.radio_info_state(),
        }
    }

    // ════════════════════════════════════════════════════════════════════
    // Inspection
    // ════════════════════════════════════════════════════════════════════

    pub fn logo(&self) -> &StateCell<LogoState> {
        &self.logo
    }

    pub fn message(&self) -> &StateCell<MessageState> {
        &self.message
    }

    pub fn menu(&self) -> &StateCell<MenuState> {
        &self.menu
    }

    pub fn settings(&self) -> &StateCell<SettingsState> {
        &self.settings
    }

    pub fn pairing(&self) -> &StateCell<PairingState> {
        &self.pairing
    }

    pub fn address_book(&self) -> &StateCell<AddressBookState> {
        &self.address_book
    }

    pub fn badge_info(&self) -> &StateCell<BadgeInfoState> {
        &self.badge_info
    }

    // ════════════════════════════════════════════════════════════════════
    // Dispatch
    // ════════════════════════════════════════════════════════════════════

    /// Run one tick of `active` and return the screen for the next tick.
    pub fn tick(&mut self, active: StateHandle, ctx: &mut Context<'_>) -> StateHandle {
        let next = match active.0 {
            Slot::Logo => self.logo.tick(ctx),
            Slot::Message => self.message.tick(ctx),
            Slot::Menu => self.menu.tick(ctx),
            Slot::Settings => self.settings.tick(ctx),
            Slot::Pairing => self.pairing.tick(ctx),
            Slot::AddressBook => self.address_book.tick(ctx),
            Slot::BadgeInfo => self.badge_info.tick(ctx),
        };
        self.resolve(active, next)
    }

    /// Turn a tick result into a handle, configuring the message box when
    /// asked for one or when the target does not exist.
    pub fn resolve(&mut self, active: StateHandle, next: NextState) -> StateHandle {
        match next {
            NextState::Stay => active,
            NextState::Goto(id) => match self.handle(id) {
                Some(handle) => handle,
                None => {
                    log::warn!("{:?} is not available", id);
                    self.display_message_state(ScreenId::Menu, UNAVAILABLE_TEXT, UNAVAILABLE_DWELL_MS)
                }
            },
            NextState::Message(req) => self.display_message_state(req.then, req.text, req.dwell),
        }
    }
}
