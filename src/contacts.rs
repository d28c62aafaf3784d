//! Contact store seen by the screens.
//!
//! The screens only read and write through [`ContactStore`]; how records
//! reach flash is not their concern. [`MemoryContactStore`] keeps
//! everything in RAM and is what the badge runs with today.
//!
//! Layout:
//!   - "my info": the badge's own unique id and agent name.
//!   - "record info": the contact list plus the screensaver and sleep
//!     timeout preferences.

use crate::config::{AGENT_NAME_CAPACITY, MAX_CONTACTS};
use crate::Error;
use defmt_or_log as log;
use heapless::{String, Vec};

/// Agent name as stored per contact (truncated to the capacity).
pub type AgentName = String<AGENT_NAME_CAPACITY>;

/// Copy `name` into an [`AgentName`], truncating at a char boundary.
pub fn agent_name(name: &str) -> AgentName {
    let mut n = AgentName::new();
    for c in name.chars() {
        if n.push(c).is_err() {
            break;
        }
    }
    n
}

/// One address book entry.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Contact {
    pub unique_id: u16,
    pub agent_name: AgentName,
}

impl Contact {
    pub fn new(unique_id: u16, name: &str) -> Self {
        Self {
            unique_id,
            agent_name: agent_name(name),
        }
    }
}

/// Screensaver choices offered by the settings screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Screensaver {
    #[default]
    None,
    GameOfLife,
}

impl Screensaver {
    /// Screensaver selected by a menu number, if any.
    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(Screensaver::GameOfLife),
            _ => None,
        }
    }
}

/// Accessors the screens use to read and persist badge data.
pub trait ContactStore {
    // My info

    fn my_unique_id(&self) -> u16;
    fn agent_name(&self) -> &str;
    fn set_agent_name(&mut self, name: &str) -> Result<(), Error>;

    // Record info

    fn num_contacts(&self) -> u8;
    fn contact_at(&self, index: u8) -> Option<Contact>;
    fn set_screensaver(&mut self, kind: Screensaver) -> Result<(), Error>;
    fn set_sleep_timeout(&mut self, seconds: u32) -> Result<(), Error>;
}

/// RAM-backed contact store.
pub struct MemoryContactStore {
    unique_id: u16,
    agent_name: AgentName,
    contacts: Vec<Contact, MAX_CONTACTS>,
    screensaver: Screensaver,
    sleep_timeout_secs: u32,
}

impl MemoryContactStore {
    pub const fn new(unique_id: u16) -> Self {
        Self {
            unique_id,
            agent_name: String::new(),
            contacts: Vec::new(),
            screensaver: Screensaver::None,
            sleep_timeout_secs: 0,
        }
    }

    /// Add a contact. An existing entry with the same id is updated in
    /// place; when full, the oldest entry is evicted.
    pub fn add(&mut self, contact: Contact) {
        if let Some(existing) = self
            .contacts
            .iter_mut()
            .find(|c| c.unique_id == contact.unique_id)
        {
            existing.agent_name = contact.agent_name;
            log::debug!("Contacts: renamed {}", existing.unique_id);
            return;
        }

        if self.contacts.is_full() {
            let dropped = self.contacts.remove(0);
            log::warn!("Contacts: full, dropped {}", dropped.unique_id);
        }

        log::debug!("Contacts: added {}", contact.unique_id);
        let _ = self.contacts.push(contact);
    }

    pub fn screensaver(&self) -> Screensaver {
        self.screensaver
    }

    pub fn sleep_timeout_secs(&self) -> u32 {
        self.sleep_timeout_secs
    }
}

impl ContactStore for MemoryContactStore {
    fn my_unique_id(&self) -> u16 {
        self.unique_id
    }

    fn agent_name(&self) -> &str {
        self.agent_name.as_str()
    }

    fn set_agent_name(&mut self, name: &str) -> Result<(), Error> {
        self.agent_name = agent_name(name);
        Ok(())
    }

    fn num_contacts(&self) -> u8 {
        self.contacts.len() as u8
    }

    fn contact_at(&self, index: u8) -> Option<Contact> {
        self.contacts.get(usize::from(index)).cloned()
    }

    fn set_screensaver(&mut self, kind: Screensaver) -> Result<(), Error> {
        self.screensaver = kind;
        Ok(())
    }

    fn set_sleep_timeout(&mut self, seconds: u32) -> Result<(), Error> {
        self.sleep_timeout_secs = seconds;
        Ok(())
    }
}
