use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

use super::require_non_empty;

/// A stored author. Owned independently of any article that references it.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Author {
    pub id: String,
    pub name: String,
    pub email: Option<String>,
    pub affiliation: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Draft author awaiting insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAuthor {
    pub name: String,
    pub email: Option<String>,
    pub affiliation: Option<String>,
}

impl NewAuthor {
    /// # Errors
    ///
    /// Returns `ValidationError::MissingField` if `name` is empty.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        require_non_empty("author", "name", &name)?;
        Ok(Self {
            name,
            email: None,
            affiliation: None,
        })
    }

    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    #[must_use]
    pub fn with_affiliation(mut self, affiliation: impl Into<String>) -> Self {
        self.affiliation = Some(affiliation.into());
        self
    }
}
