//! Session state accessor
//!
//! Loads and saves [`SessionNavigationState`] through the host's
//! [`SessionStore`], and hands out [`SessionLease`]s that keep one
//! conversation's load/save pair from interleaving with another request.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

use crate::error::Result;
use crate::types::ConversationId;

use super::state::SessionNavigationState;
use super::store::SessionStore;

/// Version tag written with every stored record
pub const SESSION_STATE_VERSION: u32 = 1;

#[derive(Serialize, Deserialize)]
struct StoredState {
    version: u32,
    #[serde(flatten)]
    state: SessionNavigationState,
}

// Maps a conversation to the lock serializing its turns. Entries exist only
// while a lease is held or awaited.
type LockMap = HashMap<ConversationId, Arc<AsyncMutex<()>>>;

/// Reads and writes per-conversation navigation state
#[derive(Clone)]
pub struct SessionStateAccessor {
    store: Arc<dyn SessionStore>,
    locks: Arc<Mutex<LockMap>>,
}

impl SessionStateAccessor {
    /// Create an accessor over the host store
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self {
            store,
            locks: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Load the state for `conversation`
    ///
    /// A missing record, or one that cannot be decoded, yields the empty
    /// state.
    ///
    /// # Errors
    /// Returns `SessionStore` if the store itself fails
    pub async fn load(&self, conversation: &ConversationId) -> Result<SessionNavigationState> {
        let Some(blob) = self.store.load_blob(conversation).await? else {
            return Ok(SessionNavigationState::default());
        };

        match serde_json::from_slice::<StoredState>(&blob) {
            Ok(stored) if stored.version == SESSION_STATE_VERSION => Ok(stored.state),
            Ok(stored) => {
                log::warn!(
                    "Session state for {} has version {}, expected {}; starting fresh",
                    conversation,
                    stored.version,
                    SESSION_STATE_VERSION
                );
                Ok(SessionNavigationState::default())
            }
            Err(e) => {
                log::warn!(
                    "Session state for {} could not be decoded ({}); starting fresh",
                    conversation,
                    e
                );
                Ok(SessionNavigationState::default())
            }
        }
    }

    /// Overwrite the stored state for `conversation`
    ///
    /// # Errors
    /// Returns `JsonDecode` if encoding fails or `SessionStore` if the store fails
    pub async fn save(
        &self,
        conversation: &ConversationId,
        state: &SessionNavigationState,
    ) -> Result<()> {
        let blob = serde_json::to_vec(&StoredState {
            version: SESSION_STATE_VERSION,
            state: state.clone(),
        })?;
        self.store.save_blob(conversation, blob).await
    }

    /// Delete the stored state
    ///
    /// Waits for any lease on the conversation like a regular request, so
    /// an in-flight commit cannot write the state back afterwards.
    ///
    /// # Errors
    /// Returns `SessionStore` if the store fails
    pub async fn clear(&self, conversation: &ConversationId) -> Result<()> {
        self.acquire(conversation).await?.delete().await
    }

    /// Lock the conversation and load its state
    ///
    /// Waits until any other lease for the same conversation is released.
    ///
    /// # Errors
    /// Returns `SessionStore` if the store fails while loading
    pub async fn acquire(&self, conversation: &ConversationId) -> Result<SessionLease> {
        let handle = {
            let mut locks = self.locks.lock();
            LockHandle {
                locks: Arc::clone(&self.locks),
                conversation: conversation.clone(),
                lock: Arc::clone(locks.entry(conversation.clone()).or_default()),
            }
        };
        let guard = Arc::clone(&handle.lock).lock_owned().await;
        let state = self.load(conversation).await?;

        Ok(SessionLease {
            accessor: self.clone(),
            conversation: conversation.clone(),
            state,
            released: false,
            _guard: guard,
            _handle: handle,
        })
    }
}

// One holder of a conversation's lock. The last holder to go removes the
// map entry.
struct LockHandle {
    locks: Arc<Mutex<LockMap>>,
    conversation: ConversationId,
    lock: Arc<AsyncMutex<()>>,
}

impl Drop for LockHandle {
    fn drop(&mut self) {
        let mut locks = self.locks.lock();
        // The map and this handle are the only references left.
        if Arc::strong_count(&self.lock) == 2
            && locks
                .get(&self.conversation)
                .is_some_and(|held| Arc::ptr_eq(held, &self.lock))
        {
            locks.remove(&self.conversation);
        }
    }
}

/// Loaded state of one conversation, held for the span of a request
///
/// Release with [`commit`](Self::commit) to persist changes or
/// [`discard`](Self::discard) to drop them. Nothing is saved implicitly.
pub struct SessionLease {
    accessor: SessionStateAccessor,
    conversation: ConversationId,
    state: SessionNavigationState,
    released: bool,
    // Declared before the handle so the lock is released first.
    _guard: OwnedMutexGuard<()>,
    _handle: LockHandle,
}

impl SessionLease {
    /// Conversation this lease belongs to
    #[must_use]
    pub fn conversation(&self) -> &ConversationId {
        &self.conversation
    }

    /// Loaded state
    #[must_use]
    pub fn state(&self) -> &SessionNavigationState {
        &self.state
    }

    /// Loaded state, for modification
    pub fn state_mut(&mut self) -> &mut SessionNavigationState {
        &mut self.state
    }

    /// Persist the state and release the conversation
    ///
    /// # Errors
    /// Returns the store's error; the lease is released either way
    pub async fn commit(mut self) -> Result<()> {
        self.released = true;
        self.accessor.save(&self.conversation, &self.state).await
    }

    /// Release the conversation without saving
    pub fn discard(mut self) {
        self.released = true;
        log::debug!("Discarded session changes for {}", self.conversation);
    }

    async fn delete(mut self) -> Result<()> {
        self.released = true;
        self.accessor.store.delete_blob(&self.conversation).await
    }
}

impl Drop for SessionLease {
    fn drop(&mut self) {
        if !self.released {
            log::warn!(
                "Session lease for {} dropped without commit or discard; changes lost",
                self.conversation
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroU32;
    use std::time::Duration;

    use super::*;
    use crate::session::MemorySessionStore;
    use crate::types::ListReference;

    fn accessor() -> (Arc<MemorySessionStore>, SessionStateAccessor) {
        let store = Arc::new(MemorySessionStore::new());
        let accessor = SessionStateAccessor::new(store.clone());
        (store, accessor)
    }

    #[tokio::test]
    async fn missing_record_loads_empty() {
        let (_store, accessor) = accessor();
        let state = accessor.load(&ConversationId::new("c")).await.unwrap();
        assert_eq!(state, SessionNavigationState::default());
    }

    #[tokio::test]
    async fn corrupt_or_foreign_records_load_empty() {
        let (store, accessor) = accessor();
        let conv = ConversationId::new("c");

        store.save_blob(&conv, b"{not json".to_vec()).await.unwrap();
        assert_eq!(accessor.load(&conv).await.unwrap(), SessionNavigationState::default());

        store
            .save_blob(&conv, br#"{"version":99}"#.to_vec())
            .await
            .unwrap();
        assert_eq!(accessor.load(&conv).await.unwrap(), SessionNavigationState::default());
    }

    #[tokio::test]
    async fn commit_persists_and_discard_does_not() {
        let (_store, accessor) = accessor();
        let conv = ConversationId::new("c");
        let list = ListReference::new("numbers", NonZeroU32::new(3).unwrap());

        let mut lease = accessor.acquire(&conv).await.unwrap();
        lease.state_mut().open_list(list.clone());
        lease.discard();
        assert!(accessor.load(&conv).await.unwrap().active_list.is_none());

        let mut lease = accessor.acquire(&conv).await.unwrap();
        lease.state_mut().open_list(list.clone());
        lease.commit().await.unwrap();
        assert_eq!(accessor.load(&conv).await.unwrap().active_list, Some(list));
    }

    #[tokio::test]
    async fn leases_serialize_per_conversation() {
        let (_store, accessor) = accessor();
        let conv = ConversationId::new("c");

        let first = accessor.acquire(&conv).await.unwrap();

        let second = tokio::time::timeout(Duration::from_millis(50), accessor.acquire(&conv)).await;
        assert!(second.is_err(), "second lease must wait for the first");

        // Other conversations are unaffected.
        let other = accessor.acquire(&ConversationId::new("d")).await.unwrap();
        other.discard();

        first.discard();
        let second = accessor.acquire(&conv).await.unwrap();
        second.discard();
    }

    #[tokio::test]
    async fn clear_removes_the_record() {
        let (store, accessor) = accessor();
        let conv = ConversationId::new("c");
        accessor
            .save(&conv, &SessionNavigationState::default())
            .await
            .unwrap();
        assert_eq!(store.len().await, 1);

        accessor.clear(&conv).await.unwrap();
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn released_leases_leave_no_lock_behind() {
        let (_store, accessor) = accessor();

        accessor.acquire(&ConversationId::new("a")).await.unwrap().commit().await.unwrap();
        accessor.acquire(&ConversationId::new("b")).await.unwrap().discard();
        drop(accessor.acquire(&ConversationId::new("c")).await.unwrap());

        assert!(accessor.locks.lock().is_empty());
    }

    #[tokio::test]
    async fn lock_survives_while_another_request_waits() {
        let (_store, accessor) = accessor();
        let conv = ConversationId::new("c");

        let first = accessor.acquire(&conv).await.unwrap();
        let waiter = {
            let accessor = accessor.clone();
            let conv = conv.clone();
            tokio::spawn(async move { accessor.acquire(&conv).await.unwrap().discard() })
        };
        tokio::time::sleep(Duration::from_millis(20)).await;

        first.discard();
        assert_eq!(accessor.locks.lock().len(), 1);

        waiter.await.unwrap();
        assert!(accessor.locks.lock().is_empty());
    }

    #[tokio::test]
    async fn clear_waits_for_the_lease_in_flight() {
        let (store, accessor) = accessor();
        let conv = ConversationId::new("c");
        let list = ListReference::new("numbers", NonZeroU32::new(3).unwrap());

        let mut lease = accessor.acquire(&conv).await.unwrap();
        lease.state_mut().open_list(list);

        let mut clearing = {
            let accessor = accessor.clone();
            let conv = conv.clone();
            tokio::spawn(async move { accessor.clear(&conv).await })
        };
        let pending = tokio::time::timeout(Duration::from_millis(50), &mut clearing).await;
        assert!(pending.is_err(), "clear must wait for the held lease");

        let next = tokio::time::timeout(Duration::from_millis(50), accessor.acquire(&conv)).await;
        assert!(next.is_err(), "no request may run beside the held lease");

        lease.commit().await.unwrap();
        clearing.await.unwrap().unwrap();

        assert!(store.is_empty().await);
        assert_eq!(accessor.load(&conv).await.unwrap(), SessionNavigationState::default());
        assert!(accessor.locks.lock().is_empty());
    }
}
