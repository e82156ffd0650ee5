//! New-card form state.

use crate::models::{CardDraft, CardField};

/// Collects a draft card and resets itself on submit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreationForm {
    draft: CardDraft,
}

impl CreationForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn draft(&self) -> &CardDraft {
        &self.draft
    }

    #[must_use]
    pub fn field(&self, field: CardField) -> &str {
        self.draft.field(field)
    }

    pub fn set_field(&mut self, field: CardField, value: impl Into<String>) {
        self.draft.set_field(field, value);
    }

    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.draft.is_blank()
    }

    /// Take the draft for a create request and clear the form.
    ///
    /// The form is empty again as soon as this returns, whether or not the
    /// create request later succeeds.
    pub fn submit(&mut self) -> CardDraft {
        std::mem::take(&mut self.draft)
    }
}
