//! Pages and the response shape built from them

use serde::{Deserialize, Serialize};

use super::identifiers::PageToken;

/// One page of a provider list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    /// Items on this page, in list order
    pub items: Vec<T>,
    /// Token of the preceding page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prev_page_token: Option<PageToken>,
    /// Token identifying this page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_token: Option<PageToken>,
    /// Token of the following page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_page_token: Option<PageToken>,
}

impl<T> Page<T> {
    /// A page with no items and no neighbors
    #[must_use]
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            prev_page_token: None,
            page_token: None,
            next_page_token: None,
        }
    }

    /// True when there is nothing here and nowhere to go
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.items.is_empty() && self.prev_page_token.is_none() && self.next_page_token.is_none()
    }

    /// The `{prev, current, next}` triple of this page
    #[must_use]
    pub fn tokens(&self) -> PageTokens {
        PageTokens {
            prev_page_token: self.prev_page_token.clone(),
            current_page_token: self.page_token.clone(),
            next_page_token: self.next_page_token.clone(),
        }
    }

    /// Convert the items, keeping the tokens
    pub fn map_items<U, E>(self, f: impl FnMut(T) -> Result<U, E>) -> Result<Page<U>, E> {
        Ok(Page {
            items: self.items.into_iter().map(f).collect::<Result<_, _>>()?,
            prev_page_token: self.prev_page_token,
            page_token: self.page_token,
            next_page_token: self.next_page_token,
        })
    }
}

/// Token triple of the page currently shown in a conversation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageTokens {
    /// Previous page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prev_page_token: Option<PageToken>,
    /// Current page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_page_token: Option<PageToken>,
    /// Next page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_page_token: Option<PageToken>,
}

/// Response record returned by the get page operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResponse<T> {
    /// Items on the page
    pub items: Vec<T>,
    /// Always `items.len()`
    pub item_count: usize,
    /// Previous page token, unchanged from the provider
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prev_page_token: Option<PageToken>,
    /// This page's token, unchanged from the provider
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_token: Option<PageToken>,
    /// Next page token, unchanged from the provider
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_page_token: Option<PageToken>,
}

impl<T> From<Page<T>> for PageResponse<T> {
    fn from(page: Page<T>) -> Self {
        Self {
            item_count: page.items.len(),
            items: page.items,
            prev_page_token: page.prev_page_token,
            page_token: page.page_token,
            next_page_token: page.next_page_token,
        }
    }
}
