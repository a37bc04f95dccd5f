use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

use super::require_non_empty;

/// A stored tag/category. Owned independently of any article that references it.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Tag {
    pub id: String,
    pub name: String,
    pub color: Option<String>,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Draft tag awaiting insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTag {
    pub name: String,
    pub color: Option<String>,
    pub description: Option<String>,
}

impl NewTag {
    /// # Errors
    ///
    /// Returns `ValidationError::MissingField` if `name` is empty.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        require_non_empty("tag", "name", &name)?;
        Ok(Self {
            name,
            color: None,
            description: None,
        })
    }

    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_requires_name() {
        assert!(NewTag::new("Research").is_ok());
        assert!(NewTag::new("").is_err());
    }
}
