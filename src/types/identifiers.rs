//! Newtype wrappers for type safety
//!
//! Conversation handles, list-type discriminators and page tokens are all
//! strings on the wire; wrapping them keeps them from being mixed up.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Handle of the conversation a session record belongs to
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConversationId(String);

impl ConversationId {
    /// Create a new conversation handle
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the conversation handle as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ConversationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for ConversationId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ConversationId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Discriminator selecting which provider serves a list
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct ListType(String);

impl ListType {
    /// Create a new list type
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the list type as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ListType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for ListType {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ListType {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Opaque cursor issued by a list provider
///
/// Only providers mint tokens. Everyone else echoes them back verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct PageToken(String);

impl PageToken {
    /// Wrap a provider-minted token
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Get the token as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PageToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for PageToken {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for PageToken {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}
