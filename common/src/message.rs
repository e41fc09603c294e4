use near_sdk::{near, AccountId, NearToken};

/// Smallest attached deposit that marks a message as premium (0.1 NEAR).
pub const PREMIUM_THRESHOLD: NearToken = NearToken::from_millinear(100);

/// Returns true if a call carrying `deposit` earns the premium flag.
pub fn is_premium(deposit: NearToken) -> bool {
    deposit >= PREMIUM_THRESHOLD
}

/// A message signed into the guestbook.
///
/// Messages are append-only: once stored they are never edited or removed.
/// The JSON form is exactly `{ "premium", "sender", "text" }`.
#[near(serializers = [borsh, json])]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostedMessage {
    pub premium: bool,
    pub sender: AccountId,
    pub text: String,
}

impl PostedMessage {
    /// Build a message, deriving `premium` from the deposit attached to the call.
    pub fn new(sender: AccountId, text: String, deposit: NearToken) -> Self {
        Self {
            premium: is_premium(deposit),
            sender,
            text,
        }
    }
}
