//! UI components for `Jokebox`.

pub mod header;
pub mod joke_card;
pub mod toast;

pub use header::Header;
pub use joke_card::{ConfigErrorPanel, JokeCard, LAUGHING_ICON_SRC};
pub use toast::{NotificationContext, NotificationProvider, ToastContainer, use_notifications};
