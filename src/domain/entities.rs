//! Domain entities. Pure data structures for the core business.
//!
//! No file-format types here: sources map their records into these.

use crate::domain::{DomainError, FollowsGraph};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Case-insensitive user identity, stored in canonical lower-case form.
///
/// The only way to build one is through [`Username::new`] (or deserialization, which
/// goes through it), so two values compare equal iff the raw names are equal under
/// case-folding: `"ERNie"` and `"ernie"` are the same user.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Username(String);

impl Username {
    pub fn new(raw: impl AsRef<str>) -> Self {
        Self(raw.as_ref().to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for Username {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}

impl From<&str> for Username {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<Username> for String {
    fn from(name: Username) -> Self {
        name.0
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single short post. Only `author` and `text` carry evidence for mentions;
/// `in_reply_to` is optional extra evidence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub author: String,
    /// Absent text is read as empty, i.e. a post with no mentions.
    #[serde(default)]
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
    /// Author of the post this one replies to, when the source knows it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub in_reply_to: Option<String>,
}

impl Post {
    pub fn new(author: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: None,
            author: author.into(),
            text: text.into(),
            timestamp: None,
            in_reply_to: None,
        }
    }

    pub fn replying_to(mut self, author: impl Into<String>) -> Self {
        self.in_reply_to = Some(author.into());
        self
    }

    /// Reject posts that cannot be attributed to anyone.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.author.trim().is_empty() {
            return Err(DomainError::InvalidInput(format!(
                "post {} has an empty author",
                self.id.as_deref().unwrap_or("<no id>")
            )));
        }
        Ok(())
    }
}

/// A ranked user together with the number of inferred followers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Influencer {
    pub username: Username,
    pub followers: usize,
}

/// Everything a report sink needs: the inferred graph and its ranking.
#[derive(Debug, Clone, Serialize)]
pub struct NetworkReport {
    pub graph: FollowsGraph,
    pub influencers: Vec<Influencer>,
    pub posts_scanned: usize,
    pub generated_at: DateTime<Utc>,
}
