//! UI Components

pub mod navbar;
pub mod notification_box;
pub mod token_select;
pub mod wallet_box;

pub use navbar::Navbar;
pub use notification_box::NotificationBox;
pub use token_select::TokenSelect;
pub use wallet_box::WalletBox;
