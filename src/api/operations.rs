//! The list navigation operations

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;
use crate::navigator::PageNavigator;
use crate::types::{
    ConversationId, GetPageRequest, ListReference, NavigateRequest, OpenListRequest, PageResponse,
    PageToken,
};

use super::handler::ApiOperation;
use super::name::ApiName;

/// Response of the open list operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenListResponse {
    /// Reference now active in the conversation
    pub list_ref: ListReference,
}

/// Response of the next/previous page operations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigateResponse {
    /// Token the next get page call will fetch
    pub upcoming_page_token: PageToken,
}

/// `ListNav.getPage`
#[derive(Clone)]
pub struct GetPageOperation {
    navigator: Arc<PageNavigator>,
}

impl GetPageOperation {
    /// Create the operation over a shared navigator
    #[must_use]
    pub fn new(navigator: Arc<PageNavigator>) -> Self {
        Self { navigator }
    }
}

#[async_trait]
impl ApiOperation for GetPageOperation {
    type Args = GetPageRequest;
    type Output = PageResponse<Value>;

    const API: ApiName = ApiName::GetPage;

    fn description() -> &'static str {
        "Get a page of the list being navigated. In session mode the page queued in the \
         conversation is returned and any supplied arguments are only checked for staleness."
    }

    async fn call(&self, conversation: &ConversationId, args: GetPageRequest) -> Result<Self::Output> {
        self.navigator.get_page(conversation, args).await
    }
}

/// `ListNav.openList`
#[derive(Clone)]
pub struct OpenListOperation {
    navigator: Arc<PageNavigator>,
}

impl OpenListOperation {
    /// Create the operation over a shared navigator
    #[must_use]
    pub fn new(navigator: Arc<PageNavigator>) -> Self {
        Self { navigator }
    }
}

#[async_trait]
impl ApiOperation for OpenListOperation {
    type Args = OpenListRequest;
    type Output = OpenListResponse;

    const API: ApiName = ApiName::OpenList;

    fn description() -> &'static str {
        "Make a list the conversation's active list; the next getPage returns its first page."
    }

    async fn call(&self, conversation: &ConversationId, args: OpenListRequest) -> Result<Self::Output> {
        let list_ref = args.into_list_ref(self.navigator.default_page_size());
        let state = self.navigator.open_list(conversation, list_ref.clone()).await?;
        Ok(OpenListResponse {
            list_ref: state.active_list.unwrap_or(list_ref),
        })
    }
}

/// `ListNav.nextPage`
#[derive(Clone)]
pub struct NextPageOperation {
    navigator: Arc<PageNavigator>,
}

impl NextPageOperation {
    /// Create the operation over a shared navigator
    #[must_use]
    pub fn new(navigator: Arc<PageNavigator>) -> Self {
        Self { navigator }
    }
}

#[async_trait]
impl ApiOperation for NextPageOperation {
    type Args = NavigateRequest;
    type Output = NavigateResponse;

    const API: ApiName = ApiName::NextPage;

    fn description() -> &'static str {
        "Queue the page after the current one. Fails at the end of the list."
    }

    async fn call(&self, conversation: &ConversationId, _args: NavigateRequest) -> Result<Self::Output> {
        let upcoming_page_token = self.navigator.next_page(conversation).await?;
        Ok(NavigateResponse { upcoming_page_token })
    }
}

/// `ListNav.previousPage`
#[derive(Clone)]
pub struct PreviousPageOperation {
    navigator: Arc<PageNavigator>,
}

impl PreviousPageOperation {
    /// Create the operation over a shared navigator
    #[must_use]
    pub fn new(navigator: Arc<PageNavigator>) -> Self {
        Self { navigator }
    }
}

#[async_trait]
impl ApiOperation for PreviousPageOperation {
    type Args = NavigateRequest;
    type Output = NavigateResponse;

    const API: ApiName = ApiName::PreviousPage;

    fn description() -> &'static str {
        "Queue the page before the current one. Fails at the start of the list."
    }

    async fn call(&self, conversation: &ConversationId, _args: NavigateRequest) -> Result<Self::Output> {
        let upcoming_page_token = self.navigator.previous_page(conversation).await?;
        Ok(NavigateResponse { upcoming_page_token })
    }
}
