//! Types shared by the guestbook contract and its sandbox tests.

pub mod message;
pub mod page;

pub use message::{is_premium, PostedMessage, PREMIUM_THRESHOLD};
pub use page::PageRequest;
