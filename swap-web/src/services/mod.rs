//! External collaborators: wallet modal, chain client, price API.

pub mod chain;
pub mod price;
pub mod wallet;
