//! Address book: lists the first few stored contacts.

use heapless::Vec;

use crate::config::ADDRESS_BOOK_CAPACITY;
use crate::contacts::Contact;
use crate::state::{Context, NextState, Screen, ScreenId};
use crate::ui::display::ListView;
use crate::ui::input_logic::ListSelector;
use crate::ui::NavKey;
use crate::{Error, Millis};

pub const ADDRESS_BOOK_TITLE: &str = "Address Book";

pub struct AddressBookState {
    contacts: Vec<Contact, ADDRESS_BOOK_CAPACITY>,
    list: ListSelector,
}

impl Default for AddressBookState {
    fn default() -> Self {
        Self::new()
    }
}

impl AddressBookState {
    pub const fn new() -> Self {
        Self {
            contacts: Vec::new(),
            list: ListSelector::new(0),
        }
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn selected(&self) -> usize {
        self.list.selected()
    }
}

impl Screen for AddressBookState {
    const ID: ScreenId = ScreenId::AddressBook;

    fn on_init(&mut self, ctx: &mut Context<'_>) -> Result<(), Error> {
        ctx.display.bind_list(ADDRESS_BOOK_TITLE);

        self.contacts.clear();
        for i in 0..ctx.store.num_contacts() {
            if self.contacts.is_full() {
                break;
            }
            if let Some(contact) = ctx.store.contact_at(i) {
                let _ = self.contacts.push(contact);
            }
        }
        self.list.set_len(self.contacts.len());
        Ok(())
    }

    fn on_run(&mut self, ctx: &mut Context<'_>, _elapsed: Millis) -> NextState {
        let mut next = NextState::Stay;
        match ctx.input.nav() {
            Some(NavKey::Home) => next = NextState::Goto(ScreenId::Menu),
            Some(NavKey::Select) if !self.contacts.is_empty() => {
                next = NextState::Goto(ScreenId::SendMessage);
            }
            Some(key) => {
                self.list.navigate(key);
            }
            None => {}
        }

        if self.contacts.is_empty() {
            ctx.display.label(ADDRESS_BOOK_TITLE, 0, 0);
            ctx.display.label("No contacts", 0, 20);
        } else {
            let mut names: Vec<&str, ADDRESS_BOOK_CAPACITY> = Vec::new();
            for c in &self.contacts {
                let _ = names.push(c.agent_name.as_str());
            }
            ctx.display.draw_list(&ListView {
                title: ADDRESS_BOOK_TITLE,
                items: &names,
                selected: self.list.selected(),
            });
        }
        next
    }

    fn on_shutdown(&mut self, ctx: &mut Context<'_>) -> Result<(), Error> {
        ctx.display.unbind_list();
        self.contacts.clear();
        self.list.set_len(0);
        Ok(())
    }
}
