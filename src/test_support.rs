//! Test doubles shared by the unit tests.

use core::ops::{Deref, DerefMut};

use crate::board::Board;
use crate::contacts::{Contact, ContactStore, MemoryContactStore, Screensaver};
use crate::state::{Context, StateMachine};
use crate::ui::display::{Display, ListView};
use crate::ui::Input;
use crate::{Error, Millis};
use embedded_graphics::primitives::Rectangle;

/// Display that remembers what was drawn.
#[derive(Default)]
pub struct RecordingDisplay {
    pub labels: Vec<String>,
    pub lists: Vec<(String, Vec<String>, usize)>,
    pub bound: Option<&'static str>,
    pub binds: u32,
    pub unbinds: u32,
}

impl RecordingDisplay {
    pub fn shows(&self, text: &str) -> bool {
        self.labels.iter().any(|l| l == text)
    }

    pub fn last_list(&self) -> Option<&(String, Vec<String>, usize)> {
        self.lists.last()
    }
}

impl Display for RecordingDisplay {
    fn label(&mut self, text: &str, _x: i32, _y: i32) {
        self.labels.push(text.to_string());
    }

    fn label_multiline(&mut self, text: &str, _area: Rectangle) {
        self.labels.push(text.to_string());
    }

    fn draw_list(&mut self, list: &ListView<'_>) {
        self.lists.push((
            list.title.to_string(),
            list.items.iter().map(|s| s.to_string()).collect(),
            list.selected,
        ));
    }

    fn bind_list(&mut self, title: &'static str) {
        self.bound = Some(title);
        self.binds += 1;
    }

    fn unbind_list(&mut self) {
        self.bound = None;
        self.unbinds += 1;
    }
}

/// Board whose carrier can be told to fail.
#[derive(Default)]
pub struct FakeBoard {
    pub fail_start: Option<Error>,
    pub fail_stop: Option<Error>,
    pub carrier: bool,
    pub starts: u32,
    pub stops: u32,
}

impl Board for FakeBoard {
    fn start_ir_carrier(&mut self) -> Result<(), Error> {
        self.starts += 1;
        if let Some(e) = self.fail_start {
            return Err(e);
        }
        self.carrier = true;
        Ok(())
    }

    fn stop_ir_carrier(&mut self) -> Result<(), Error> {
        self.stops += 1;
        if let Some(e) = self.fail_stop {
            return Err(e);
        }
        self.carrier = false;
        Ok(())
    }

    fn dev_id(&self) -> u32 {
        0x414
    }

    fn rev_id(&self) -> u32 {
        0x1001
    }

    fn hal_version(&self) -> u32 {
        0x0102_0200
    }
}

/// RAM store that counts successful writes.
pub struct CountingStore {
    inner: MemoryContactStore,
    pub writes: u32,
}

impl CountingStore {
    pub fn new(inner: MemoryContactStore) -> Self {
        Self { inner, writes: 0 }
    }

    fn count(&mut self, result: Result<(), Error>) -> Result<(), Error> {
        if result.is_ok() {
            self.writes += 1;
        }
        result
    }
}

impl Deref for CountingStore {
    type Target = MemoryContactStore;

    fn deref(&self) -> &MemoryContactStore {
        &self.inner
    }
}

impl DerefMut for CountingStore {
    fn deref_mut(&mut self) -> &mut MemoryContactStore {
        &mut self.inner
    }
}

impl ContactStore for CountingStore {
    fn my_unique_id(&self) -> u16 {
        self.inner.my_unique_id()
    }

    fn agent_name(&self) -> &str {
        self.inner.agent_name()
    }

    fn set_agent_name(&mut self, name: &str) -> Result<(), Error> {
        let result = self.inner.set_agent_name(name);
        self.count(result)
    }

    fn num_contacts(&self) -> u8 {
        self.inner.num_contacts()
    }

    fn contact_at(&self, index: u8) -> Option<Contact> {
        self.inner.contact_at(index)
    }

    fn set_screensaver(&mut self, kind: Screensaver) -> Result<(), Error> {
        let result = self.inner.set_screensaver(kind);
        self.count(result)
    }

    fn set_sleep_timeout(&mut self, seconds: u32) -> Result<(), Error> {
        let result = self.inner.set_sleep_timeout(seconds);
        self.count(result)
    }
}

/// Collaborators for one screen or state machine under test.
pub struct Rig {
    pub display: RecordingDisplay,
    pub store: CountingStore,
    pub board: FakeBoard,
}

impl Rig {
    pub fn new() -> Self {
        Self {
            display: RecordingDisplay::default(),
            store: CountingStore::new(MemoryContactStore::new(0xBEEF)),
            board: FakeBoard::default(),
        }
    }

    pub fn ctx(&mut self, now: Millis, input: Input) -> Context<'_> {
        Context {
            now,
            input,
            display: &mut self.display,
            store: &mut self.store,
            board: &mut self.board,
        }
    }

    /// One tick of `machine`; returns the id active afterwards.
    pub fn step(&mut self, machine: &mut StateMachine, now: Millis, input: Input) -> crate::state::ScreenId {
        machine.step(&mut self.ctx(now, input)).id()
    }
}
