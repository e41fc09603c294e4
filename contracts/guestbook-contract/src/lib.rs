//! Guestbook contract: an append-only list of signed messages.
//!
//! Callers sign with `add_message`; attaching at least
//! [`PREMIUM_THRESHOLD`](guestbook_common::PREMIUM_THRESHOLD) marks the message
//! as premium. `get_messages` lists them in insertion order.

use guestbook_common::{PageRequest, PostedMessage};
use near_sdk::json_types::U64;
use near_sdk::store::Vector;
use near_sdk::{env, log, near};

const MESSAGES_PREFIX: &[u8] = b"m";

#[near(contract_state)]
pub struct Contract {
    messages: Vector<PostedMessage>,
}

impl Default for Contract {
    fn default() -> Self {
        Self {
            messages: Vector::new(MESSAGES_PREFIX),
        }
    }
}

#[near]
impl Contract {
    /// Append a message from the calling account.
    #[payable]
    pub fn add_message(&mut self, text: String) {
        let sender = env::predecessor_account_id();
        let message = PostedMessage::new(sender, text, env::attached_deposit());

        if message.premium {
            log!("{} signed the guestbook (premium)", message.sender);
        } else {
            log!("{} signed the guestbook", message.sender);
        }

        self.messages.push(message);
    }

    /// List stored messages, oldest first. Without arguments every message is returned.
    pub fn get_messages(&self, from_index: Option<U64>, limit: Option<U64>) -> Vec<&PostedMessage> {
        let page = PageRequest::new(from_index.map(u64::from), limit.map(u64::from));
        let window = page.window(u64::from(self.messages.len()));

        self.messages
            .iter()
            .skip(window.start as usize)
            .take((window.end - window.start) as usize)
            .collect()
    }

    pub fn total_messages(&self) -> u32 {
        self.messages.len()
    }
}
