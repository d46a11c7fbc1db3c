// Publication read model and draft

use crate::validation::ValidationError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A publication as returned to clients, with the author's nick joined in.
///
/// The wire field names for title/content/author are the Portuguese ones the
/// public API has always used.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Publication {
    pub id: u64,
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "conteudo")]
    pub content: String,
    #[serde(rename = "autorId")]
    pub author_id: u64,
    /// Denormalized from the author row at read time; never stored.
    #[serde(rename = "autorNick")]
    pub author_nick: String,
    pub likes: u64,
    pub created_at: DateTime<Utc>,
}

/// User-supplied publication fields. The author comes from the caller's
/// token, never from the body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublicationDraft {
    #[serde(default, rename = "titulo")]
    pub title: String,
    #[serde(default, rename = "conteudo")]
    pub content: String,
}

impl PublicationDraft {
    /// Validate (title first, then content) and trim both fields.
    pub fn prepare(&mut self) -> Result<(), ValidationError> {
        self.validate()?;
        self.normalize();
        Ok(())
    }

    fn validate(&self) -> Result<(), ValidationError> {
        if self.title.is_empty() {
            return Err(ValidationError::Required("title"));
        }

        if self.content.is_empty() {
            return Err(ValidationError::Required("content"));
        }

        Ok(())
    }

    fn normalize(&mut self) {
        self.title = self.title.trim().to_string();
        self.content = self.content.trim().to_string();
    }
}
