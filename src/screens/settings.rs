//! Settings: a list of options, each opening a small edit mode.
//!
//! ```text
//! Listing ──select item i──▶ mode for item i
//!   EditingAgentName     letters, 127 = backspace, 126 = save → Menu
//!   ChoosingScreensaver  key 1 = Game of Life, home → Listing
//!   EditingSleepTimeout  digits, home = backspace, select = save → Menu
//!   Reserved             home → Listing
//! ```

use defmt_or_log as log;

use crate::config::INPUT_CAPACITY;
use crate::contacts::Screensaver;
use crate::state::{Context, NextState, Screen, ScreenId};
use crate::ui::display::ListView;
use crate::ui::input_logic::{ListSelector, TextInput};
use crate::ui::{Letter, NavKey};
use crate::{Error, Millis};

pub const SETTINGS_TITLE: &str = "Settings";

pub const SETTINGS_ITEMS: [&str; 4] = [
    "Set Agent Name",
    "Set Screen Saver",
    "Set Sleep Time",
    "UNKNOWN",
];

/// Sub-state of the settings screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SettingsMode {
    #[default]
    Listing,
    EditingAgentName,
    ChoosingScreensaver,
    EditingSleepTimeout,
    Reserved,
}

impl SettingsMode {
    /// Mode entered by selecting list item `index`.
    pub fn for_item(index: usize) -> Self {
        match index {
            0 => SettingsMode::EditingAgentName,
            1 => SettingsMode::ChoosingScreensaver,
            2 => SettingsMode::EditingSleepTimeout,
            _ => SettingsMode::Reserved,
        }
    }

    /// Numeric sub-state: 0 while listing, `100 + item` otherwise.
    pub const fn code(self) -> u8 {
        match self {
            SettingsMode::Listing => 0,
            SettingsMode::EditingAgentName => 100,
            SettingsMode::ChoosingScreensaver => 101,
            SettingsMode::EditingSleepTimeout => 102,
            SettingsMode::Reserved => 103,
        }
    }
}

/// Store write outcome as a tick result.
fn saved(result: Result<(), Error>, ctx: &mut Context<'_>) -> NextState {
    match result {
        Ok(()) => {
            ctx.display.label("Saving ...", 0, 30);
            NextState::Goto(ScreenId::Menu)
        }
        Err(e) => {
            log::warn!("Settings: save failed: {:?}", e);
            NextState::message(e.message(), ScreenId::Menu)
        }
    }
}

pub struct SettingsState {
    list: ListSelector,
    mode: SettingsMode,
    input: TextInput<INPUT_CAPACITY>,
}

impl Default for SettingsState {
    fn default() -> Self {
        Self::new()
    }
}

impl SettingsState {
    pub const fn new() -> Self {
        Self {
            list: ListSelector::new(SETTINGS_ITEMS.len()),
            mode: SettingsMode::Listing,
            input: TextInput::new(),
        }
    }

    pub fn mode(&self) -> SettingsMode {
        self.mode
    }

    pub fn selected(&self) -> usize {
        self.list.selected()
    }

    /// Text typed so far in the current edit mode.
    pub fn input(&self) -> &str {
        self.input.as_str()
    }

    pub fn cursor(&self) -> usize {
        self.input.cursor()
    }

    fn run_listing(&mut self, ctx: &mut Context<'_>) -> NextState {
        match ctx.input.nav() {
            Some(NavKey::Home) => {
                self.list.home();
                return NextState::Goto(ScreenId::Menu);
            }
            Some(NavKey::Select) => {
                self.mode = SettingsMode::for_item(self.list.selected());
                log::debug!("Settings: entering {:?}", self.mode);
                return NextState::Stay;
            }
            Some(key) => {
                self.list.navigate(key);
            }
            None => {}
        }

        ctx.display.draw_list(&ListView {
            title: SETTINGS_TITLE,
            items: &SETTINGS_ITEMS,
            selected: self.list.selected(),
        });
        NextState::Stay
    }

    fn run_agent_name(&mut self, ctx: &mut Context<'_>) -> NextState {
        ctx.display.label("Enter your agent name:", 0, 10);

        let mut next = NextState::Stay;
        match ctx.input.letter() {
            Some(Letter::Backspace) => self.input.backspace(),
            Some(Letter::Enter) => {
                log::debug!("Settings: saving agent name");
                let result = ctx.store.set_agent_name(self.input.as_str());
                next = saved(result, ctx);
            }
            Some(Letter::Char(c)) => {
                self.input.push(c);
            }
            Some(Letter::Ignored) | None => {}
        }

        ctx.display.label(self.input.as_str(), 0, 20);
        next
    }

    fn run_screensaver(&mut self, ctx: &mut Context<'_>) -> NextState {
        ctx.display.label("Choose Number of Screen Saver:", 0, 10);
        ctx.display.label("1: Game of Life", 0, 20);

        if ctx.input.nav() == Some(NavKey::Home) {
            self.mode = SettingsMode::Listing;
            return NextState::Stay;
        }

        if let Some(kind) = ctx.input.key.and_then(Screensaver::from_number) {
            log::debug!("Settings: screensaver {:?}", kind);
            if let Err(e) = ctx.store.set_screensaver(kind) {
                log::warn!("Settings: save failed: {:?}", e);
                return NextState::message(e.message(), ScreenId::Menu);
            }
        }
        NextState::Stay
    }

    fn run_sleep_timeout(&mut self, ctx: &mut Context<'_>) -> NextState {
        ctx.display.label("Time until badge goes to sleep:", 0, 10);

        let mut next = NextState::Stay;
        match ctx.input.nav() {
            Some(NavKey::Home) => self.input.backspace(),
            Some(NavKey::Select) => {
                let seconds = self.input.parse_number();
                log::debug!("Settings: saving sleep timeout {}", seconds);
                let result = ctx.store.set_sleep_timeout(seconds);
                next = saved(result, ctx);
            }
            _ => {
                if let Some(d) = ctx.input.digit.filter(|d| *d <= 9) {
                    self.input.push(char::from(b'0' + d));
                }
            }
        }

        ctx.display.label(self.input.as_str(), 0, 20);
        next
    }

    fn run_reserved(&mut self, ctx: &mut Context<'_>) -> NextState {
        if ctx.input.nav() == Some(NavKey::Home) {
            self.mode = SettingsMode::Listing;
        }
        NextState::Stay
    }
}

impl Screen for SettingsState {
    const ID: ScreenId = ScreenId::Settings;

    fn on_init(&mut self, ctx: &mut Context<'_>) -> Result<(), Error> {
        ctx.display.bind_list(SETTINGS_TITLE);
        self.mode = SettingsMode::Listing;
        Ok(())
    }

    fn on_run(&mut self, ctx: &mut Context<'_>, _elapsed: Millis) -> NextState {
        match self.mode {
            SettingsMode::Listing => self.run_listing(ctx),
            SettingsMode::EditingAgentName => self.run_agent_name(ctx),
            SettingsMode::ChoosingScreensaver => self.run_screensaver(ctx),
            SettingsMode::EditingSleepTimeout => self.run_sleep_timeout(ctx),
            SettingsMode::Reserved => self.run_reserved(ctx),
        }
    }

    fn on_shutdown(&mut self, ctx: &mut Context<'_>) -> Result<(), Error> {
        ctx.display.unbind_list();
        self.input.clear();
        self.mode = SettingsMode::Listing;
        self.list.home();
        Ok(())
    }
}
