//! Shared building blocks used by the pages in the web crate.

mod auth_card;
pub use auth_card::AuthCard;

mod language_picker;
pub use language_picker::{LanguagePicker, LanguagePickerStyle};

mod modal_overlay;
pub use modal_overlay::ModalOverlay;

mod navbar;
pub use navbar::Navbar;

mod notice;
pub use notice::{FullPageMessage, Notice, NoticeKind};

mod search_input;
pub use search_input::SearchInput;

mod user_menu;
pub use user_menu::UserMenu;
