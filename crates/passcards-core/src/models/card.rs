//! Password card model

use std::fmt;

use serde::{Deserialize, Serialize};

/// Placeholder shown instead of a hidden password.
pub const MASKED_PASSWORD: &str = "••••••••";

/// Opaque, server-assigned card identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(String);

impl CardId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CardId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for CardId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// One editable field of a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardField {
    Name,
    Url,
    Username,
    Password,
}

impl CardField {
    /// Fields in form order.
    pub const ALL: [Self; 4] = [Self::Name, Self::Url, Self::Username, Self::Password];

    /// Human-readable label, used as input placeholder.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Url => "URL",
            Self::Username => "Username",
            Self::Password => "Password",
        }
    }
}

/// A card that has not been saved yet and has no ID.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDraft {
    #[serde(rename = "URL", default)]
    pub url: String,
    #[serde(rename = "Name", default)]
    pub name: String,
    #[serde(rename = "Username", default)]
    pub username: String,
    #[serde(rename = "Password", default)]
    pub password: String,
}

impl CardDraft {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        url: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            url: url.into(),
            name: name.into(),
            username: username.into(),
            password: password.into(),
        }
    }

    #[must_use]
    pub fn field(&self, field: CardField) -> &str {
        match field {
            CardField::Name => &self.name,
            CardField::Url => &self.url,
            CardField::Username => &self.username,
            CardField::Password => &self.password,
        }
    }

    pub fn set_field(&mut self, field: CardField, value: impl Into<String>) {
        let value = value.into();
        match field {
            CardField::Name => self.name = value,
            CardField::Url => self.url = value,
            CardField::Username => self.username = value,
            CardField::Password => self.password = value,
        }
    }

    /// True when every field is empty.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        CardField::ALL.iter().all(|field| self.field(*field).is_empty())
    }
}

impl fmt::Debug for CardDraft {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("CardDraft")
            .field("url", &self.url)
            .field("name", &self.name)
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// A stored password card as returned by the card service.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordCard {
    #[serde(rename = "ID")]
    pub id: CardId,
    #[serde(rename = "URL", default)]
    pub url: String,
    #[serde(rename = "Name", default)]
    pub name: String,
    #[serde(rename = "Username", default)]
    pub username: String,
    #[serde(rename = "Password", default)]
    pub password: String,
}

impl PasswordCard {
    /// Attach an ID to a draft.
    #[must_use]
    pub fn from_draft(id: CardId, draft: CardDraft) -> Self {
        Self {
            id,
            url: draft.url,
            name: draft.name,
            username: draft.username,
            password: draft.password,
        }
    }

    /// The card's fields without its ID.
    #[must_use]
    pub fn to_draft(&self) -> CardDraft {
        CardDraft {
            url: self.url.clone(),
            name: self.name.clone(),
            username: self.username.clone(),
            password: self.password.clone(),
        }
    }

    #[must_use]
    pub fn field(&self, field: CardField) -> &str {
        match field {
            CardField::Name => &self.name,
            CardField::Url => &self.url,
            CardField::Username => &self.username,
            CardField::Password => &self.password,
        }
    }

    pub fn set_field(&mut self, field: CardField, value: impl Into<String>) {
        let value = value.into();
        match field {
            CardField::Name => self.name = value,
            CardField::Url => self.url = value,
            CardField::Username => self.username = value,
            CardField::Password => self.password = value,
        }
    }
}

impl fmt::Debug for PasswordCard {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("PasswordCard")
            .field("id", &self.id)
            .field("url", &self.url)
            .field("name", &self.name)
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}
