//! Data models for password cards

mod card;

pub use card::{CardDraft, CardField, CardId, PasswordCard, MASKED_PASSWORD};
