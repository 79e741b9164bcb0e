//! The get page operation
//!
//! Session mode fetches the page the session has queued, checks the
//! caller's arguments against the position held before the fetch, and only
//! then persists the new position. A stale caller therefore never advances
//! the session.

use serde_json::Value;

use crate::error::{ListNavError, Result};
use crate::session::SessionLease;
use crate::types::{ConversationId, GetPageRequest, Page, PageResponse};

use super::core::PageNavigator;

impl PageNavigator {
    /// Fetch a page
    ///
    /// # Errors
    /// - `MissingArgument` in direct mode without a list reference
    /// - `NoActiveList` in session mode when no list was opened
    /// - `UnknownListType`, `InvalidToken`, `InvalidPageSize` from resolution and fetch
    /// - `StaleArgument` in session mode when supplied arguments disagree with the session
    pub async fn get_page(
        &self,
        conversation: &ConversationId,
        request: GetPageRequest,
    ) -> Result<PageResponse<Value>> {
        let page = if self.options.use_session() {
            self.get_page_from_session(conversation, &request).await?
        } else {
            self.get_page_direct(conversation, request).await?
        };

        Ok(page.into())
    }

    async fn get_page_direct(
        &self,
        conversation: &ConversationId,
        request: GetPageRequest,
    ) -> Result<Page<Value>> {
        let list_ref = request
            .list_ref
            .ok_or_else(|| ListNavError::missing_argument("listRef"))?;
        self.check_page_size(&list_ref)?;

        let provider = self.registry.resolve(&list_ref)?;
        let page = provider
            .get_json_page(request.page_token.as_ref(), list_ref.page_size)
            .await?;

        log::debug!(
            "{}: direct fetch of {} returned {} item(s)",
            conversation,
            list_ref,
            page.items.len()
        );
        Ok(page)
    }

    async fn get_page_from_session(
        &self,
        conversation: &ConversationId,
        request: &GetPageRequest,
    ) -> Result<Page<Value>> {
        let mut lease = self.sessions.acquire(conversation).await?;

        match self.advance_session(&mut lease, request).await {
            Ok(page) => {
                lease.commit().await?;
                Ok(page)
            }
            Err(e) => {
                lease.discard();
                Err(e)
            }
        }
    }

    async fn advance_session(
        &self,
        lease: &mut SessionLease,
        request: &GetPageRequest,
    ) -> Result<Page<Value>> {
        let before = lease.state().clone();
        let list_ref = before
            .active_list
            .as_ref()
            .ok_or_else(|| ListNavError::NoActiveList(lease.conversation().to_string()))?;
        self.check_page_size(list_ref)?;

        let provider = self.resolve_from_session(list_ref)?;
        let page = provider
            .get_json_page(before.upcoming_page_token.as_ref(), list_ref.page_size)
            .await?;

        if let Err(e) =
            before.validate_arguments(request.list_ref.as_ref(), request.page_token.as_ref())
        {
            log::warn!(
                "{}: caller arguments are stale, page not recorded: {}",
                lease.conversation(),
                e
            );
            return Err(e);
        }

        lease.state_mut().record_page(page.tokens());

        log::debug!(
            "{}: session fetch of {} returned {} item(s), next page {}",
            lease.conversation(),
            list_ref,
            page.items.len(),
            if page.next_page_token.is_some() { "available" } else { "absent" }
        );
        Ok(page)
    }
}
