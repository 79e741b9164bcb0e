//! Typed request arguments
//!
//! Each operation has its own argument struct, decoded and validated before
//! it reaches the navigator.

use std::num::NonZeroU32;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::identifiers::{ListType, PageToken};
use super::list_ref::ListReference;

/// Arguments of the get page operation
///
/// In session mode both fields are advisory: when present they are checked
/// against the conversation's session state, never used to fetch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct GetPageRequest {
    /// List being navigated
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list_ref: Option<ListReference>,
    /// Page to fetch (direct mode) or the page the caller believes is current (session mode)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_token: Option<PageToken>,
}

impl GetPageRequest {
    /// Request with both arguments
    #[must_use]
    pub fn new(list_ref: ListReference, page_token: Option<PageToken>) -> Self {
        Self {
            list_ref: Some(list_ref),
            page_token,
        }
    }

    /// Request without arguments, for session mode
    #[must_use]
    pub fn from_session() -> Self {
        Self::default()
    }
}

/// Arguments of the open list operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct OpenListRequest {
    /// Provider discriminator
    pub list_type: ListType,
    /// Parameters rebuilding the sequence
    #[serde(default)]
    pub params: std::collections::BTreeMap<String, String>,
    /// Items per page; the configured default when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<NonZeroU32>,
}

impl OpenListRequest {
    /// Turn the request into a list reference
    #[must_use]
    pub fn into_list_ref(self, default_page_size: NonZeroU32) -> ListReference {
        ListReference {
            list_type: self.list_type,
            params: self.params,
            page_size: self.page_size.unwrap_or(default_page_size),
        }
    }
}

/// Arguments of the next/previous page operations
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NavigateRequest {}
