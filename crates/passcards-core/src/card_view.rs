//! Per-card view state.
//!
//! A `CardView` owns only the transient state of one rendered card: whether
//! the password is revealed and, while editing, the edit buffer. The record
//! itself stays in the [`RecordStore`](crate::store::RecordStore) and is
//! passed in by the caller.

use crate::clipboard::Clipboard;
use crate::error::Result;
use crate::models::{CardField, CardId, PasswordCard, MASKED_PASSWORD};

/// Read mode, or edit mode holding a working copy of the record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CardMode {
    #[default]
    Reading,
    Editing(PasswordCard),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardView {
    mode: CardMode,
    revealed: bool,
}

impl CardView {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn mode(&self) -> &CardMode {
        &self.mode
    }

    #[must_use]
    pub const fn is_editing(&self) -> bool {
        matches!(self.mode, CardMode::Editing(_))
    }

    #[must_use]
    pub const fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub fn reveal(&mut self) {
        self.revealed = true;
    }

    pub fn hide(&mut self) {
        self.revealed = false;
    }

    pub fn toggle_reveal(&mut self) {
        self.revealed = !self.revealed;
    }

    /// The password as it should be shown: plaintext only while revealed.
    #[must_use]
    pub fn displayed_password<'a>(&self, card: &'a PasswordCard) -> &'a str {
        if self.revealed {
            &card.password
        } else {
            MASKED_PASSWORD
        }
    }

    /// Copy the plaintext password, revealed or not.
    #[allow(clippy::unused_self)]
    pub fn copy_password(
        &self,
        card: &PasswordCard,
        clipboard: &mut impl Clipboard,
    ) -> Result<()> {
        clipboard.set_text(&card.password)?;
        tracing::debug!(card = %card.id, "Copied password to clipboard");
        Ok(())
    }

    /// Enter edit mode with a fresh copy of `card`.
    pub fn begin_edit(&mut self, card: &PasswordCard) {
        self.mode = CardMode::Editing(card.clone());
    }

    /// The working copy, if editing.
    #[must_use]
    pub const fn edit_buffer(&self) -> Option<&PasswordCard> {
        match &self.mode {
            CardMode::Editing(buffer) => Some(buffer),
            CardMode::Reading => None,
        }
    }

    /// Change one field of the working copy. Ignored in read mode.
    pub fn set_field(&mut self, field: CardField, value: impl Into<String>) -> bool {
        match &mut self.mode {
            CardMode::Editing(buffer) => {
                buffer.set_field(field, value);
                true
            }
            CardMode::Reading => false,
        }
    }

    pub fn cancel_edit(&mut self) {
        self.mode = CardMode::Reading;
    }

    /// Leave edit mode and hand back the buffer for the update request.
    ///
    /// Edit mode ends here, before the request is even sent, so the card
    /// reads as "not editing" whatever the update's outcome turns out to be.
    pub fn submit_edit(&mut self) -> Option<PasswordCard> {
        match std::mem::take(&mut self.mode) {
            CardMode::Editing(buffer) => Some(buffer),
            CardMode::Reading => None,
        }
    }

    /// ID to hand to the delete request. There is no confirmation step.
    #[must_use]
    #[allow(clippy::unused_self)]
    pub fn delete_target(&self, card: &PasswordCard) -> CardId {
        card.id.clone()
    }
}
