//! Session navigation actions
//!
//! These prepare the next get page call: opening a list, queueing the
//! neighbor page, or ending the conversation.

use crate::error::{Direction, ListNavError, Result};
use crate::session::SessionNavigationState;
use crate::types::{ConversationId, ListReference, PageToken};

use super::core::PageNavigator;

impl PageNavigator {
    /// Make `list_ref` the conversation's active list
    ///
    /// The previous position is discarded; the next get page call returns
    /// the first page of the new list.
    ///
    /// # Errors
    /// Returns `InvalidPageSize`, `UnknownListType` or the factory's own error
    /// for parameters it rejects, all before touching the session
    pub async fn open_list(
        &self,
        conversation: &ConversationId,
        list_ref: ListReference,
    ) -> Result<SessionNavigationState> {
        self.check_page_size(&list_ref)?;
        self.registry.resolve(&list_ref)?;

        let mut lease = self.sessions.acquire(conversation).await?;
        log::info!("{conversation}: opened list {list_ref}");
        lease.state_mut().open_list(list_ref);
        let state = lease.state().clone();
        lease.commit().await?;
        Ok(state)
    }

    /// Queue the page after the current one
    ///
    /// # Errors
    /// Returns `NoActiveList` or `EndOfList(Forward)` if there is no next page
    pub async fn next_page(&self, conversation: &ConversationId) -> Result<PageToken> {
        self.queue(conversation, Direction::Forward).await
    }

    /// Queue the page before the current one
    ///
    /// # Errors
    /// Returns `NoActiveList` or `EndOfList(Backward)` if there is no previous page
    pub async fn previous_page(&self, conversation: &ConversationId) -> Result<PageToken> {
        self.queue(conversation, Direction::Backward).await
    }

    /// Current session state of a conversation
    ///
    /// # Errors
    /// Returns `SessionStore` if the store fails
    pub async fn session_state(
        &self,
        conversation: &ConversationId,
    ) -> Result<SessionNavigationState> {
        self.sessions.load(conversation).await
    }

    /// Forget everything stored for a conversation
    ///
    /// # Errors
    /// Returns `SessionStore` if the store fails
    pub async fn end_conversation(&self, conversation: &ConversationId) -> Result<()> {
        log::debug!("{conversation}: conversation ended, clearing navigation state");
        self.sessions.clear(conversation).await
    }

    async fn queue(&self, conversation: &ConversationId, direction: Direction) -> Result<PageToken> {
        let mut lease = self.sessions.acquire(conversation).await?;

        if lease.state().active_list.is_none() {
            lease.discard();
            return Err(ListNavError::NoActiveList(conversation.to_string()));
        }

        let token = match lease.state_mut().queue(direction) {
            Ok(token) => token.clone(),
            Err(e) => {
                lease.discard();
                return Err(e);
            }
        };

        lease.commit().await?;
        log::debug!("{conversation}: queued {direction} page {token}");
        Ok(token)
    }
}
