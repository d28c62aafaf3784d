//! Concrete screens. Each one implements [`crate::state::Screen`] and
//! lives as a singleton inside the [`crate::state::StateRegistry`].

mod address_book;
mod badge_info;
mod logo;
mod menu;
mod message;
mod pairing;
mod settings;


pub use address_book::{AddressBookState, ADDRESS_BOOK_TITLE};
pub use badge_info::{BadgeInfoState, BADGE_INFO_TITLE};
pub use logo::LogoState;
pub use menu::{MenuItem, MenuState, MENU_TITLE};
pub use message::MessageState;
pub use pairing::PairingState;
pub use settings::{SettingsMode, SettingsState, SETTINGS_ITEMS, SETTINGS_TITLE};
