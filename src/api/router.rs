//! API router
//!
//! Maps [`ApiName`]s to handlers. Assembled once at startup.

use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use crate::error::{ErrorDisposition, ListNavError, Result};
use crate::navigator::PageNavigator;
use crate::types::ConversationId;

use super::handler::ApiHandler;
use super::name::ApiName;
use super::operations::{
    GetPageOperation, NextPageOperation, OpenListOperation, PreviousPageOperation,
};

/// Catalog entry describing one API
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiDescription {
    /// Namespaced API name
    pub name: String,
    /// What the API does
    pub description: &'static str,
    /// JSON schema of its arguments
    pub input_schema: Value,
}

/// Error body returned to the host
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    /// Human-readable message
    pub error: String,
    /// How the host should surface it
    pub disposition: ErrorDisposition,
}

impl From<&ListNavError> for ErrorBody {
    fn from(err: &ListNavError) -> Self {
        Self {
            error: err.to_string(),
            disposition: err.disposition(),
        }
    }
}

/// Dispatch table from API name to handler
#[derive(Clone, Default)]
pub struct ApiRouter {
    handlers: HashMap<ApiName, Arc<dyn ApiHandler>>,
}

impl ApiRouter {
    /// Create an empty router
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Router with every list navigation operation wired to `navigator`
    #[must_use]
    pub fn standard(navigator: Arc<PageNavigator>) -> Self {
        Self::new()
            .handler(GetPageOperation::new(Arc::clone(&navigator)))
            .handler(OpenListOperation::new(Arc::clone(&navigator)))
            .handler(NextPageOperation::new(Arc::clone(&navigator)))
            .handler(PreviousPageOperation::new(navigator))
    }

    /// Register a handler under its own name
    #[must_use]
    pub fn handler<H>(mut self, handler: H) -> Self
    where
        H: ApiHandler + 'static,
    {
        let name = handler.name();
        if self.handlers.insert(name, Arc::new(handler)).is_some() {
            log::warn!("Handler for {name} registered twice; keeping the last one");
        }
        self
    }

    /// Dispatch a call by raw API name
    ///
    /// # Errors
    /// Returns `UnknownApi` for names with no handler, otherwise the handler's error
    pub async fn dispatch(
        &self,
        conversation: &ConversationId,
        api: &str,
        arguments: Value,
    ) -> Result<Value> {
        let name: ApiName = api.parse()?;
        let handler = self
            .handlers
            .get(&name)
            .ok_or_else(|| ListNavError::UnknownApi(api.to_string()))?;

        log::debug!("{conversation}: dispatching {name}");
        handler.handle(conversation, arguments).await
    }

    /// Catalog of registered APIs, ordered by name
    #[must_use]
    pub fn describe(&self) -> Vec<ApiDescription> {
        let mut names: Vec<&ApiName> = self.handlers.keys().collect();
        names.sort();
        names
            .into_iter()
            .filter_map(|name| self.handlers.get(name))
            .map(|handler| ApiDescription {
                name: handler.name().to_string(),
                description: handler.description(),
                input_schema: handler.input_schema(),
            })
            .collect()
    }
}
