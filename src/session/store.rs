//! Host session store contract
//!
//! The host owns physical persistence of per-conversation blobs. This crate
//! only reads and overwrites whole records through [`SessionStore`].

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::Result;
use crate::types::ConversationId;

/// Per-conversation blob storage provided by the host
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Load the stored blob, `None` if the conversation has none
    async fn load_blob(&self, conversation: &ConversationId) -> Result<Option<Vec<u8>>>;

    /// Atomically replace the stored blob (last writer wins)
    async fn save_blob(&self, conversation: &ConversationId, blob: Vec<u8>) -> Result<()>;

    /// Remove the blob; removing a missing blob is not an error
    async fn delete_blob(&self, conversation: &ConversationId) -> Result<()>;
}

/// In-memory session store for testing and local development
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    blobs: RwLock<HashMap<ConversationId, Vec<u8>>>,
}

impl MemorySessionStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of conversations with a stored blob
    pub async fn len(&self) -> usize {
        self.blobs.read().await.len()
    }

    /// True if nothing is stored
    pub async fn is_empty(&self) -> bool {
        self.blobs.read().await.is_empty()
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn load_blob(&self, conversation: &ConversationId) -> Result<Option<Vec<u8>>> {
        Ok(self.blobs.read().await.get(conversation).cloned())
    }

    async fn save_blob(&self, conversation: &ConversationId, blob: Vec<u8>) -> Result<()> {
        self.blobs.write().await.insert(conversation.clone(), blob);
        Ok(())
    }

    async fn delete_blob(&self, conversation: &ConversationId) -> Result<()> {
        self.blobs.write().await.remove(conversation);
        Ok(())
    }
}
