//! passcards-core - Core library for password cards
//!
//! This crate contains the shared models, the client-side record store and
//! the sync layer used by every password-card interface (desktop, CLI).

pub mod card_view;
pub mod clipboard;
pub mod config;
pub mod creation_form;
pub mod error;
pub mod models;
pub mod search;
pub mod store;
pub mod sync;
pub mod util;

pub use card_view::CardView;
pub use creation_form::CreationForm;
pub use error::{Error, Result};
pub use models::{CardDraft, CardField, CardId, PasswordCard};
pub use store::RecordStore;
pub use sync::{CardApi, HttpCardApi, MemoryCardApi, SyncLayer, UpdateOutcome};
