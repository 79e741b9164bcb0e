//! In-memory list provider
//!
//! Pages over a fixed `Vec` snapshot. Tokens are bound to the provider
//! instance that minted them and encode the page's starting offset.

use std::num::NonZeroU32;

use async_trait::async_trait;
use serde::Serialize;
use uuid::Uuid;

use crate::error::{ListNavError, Result};
use crate::types::{Page, PageToken};

use super::ListProvider;

const TOKEN_SEPARATOR: char = ':';

/// Provider over an in-memory snapshot of items
#[derive(Debug, Clone)]
pub struct VecListProvider<T> {
    instance: String,
    items: Vec<T>,
}

impl<T> VecListProvider<T> {
    /// Create a provider over `items` with a fresh instance id
    #[must_use]
    pub fn new(items: Vec<T>) -> Self {
        Self {
            instance: Uuid::new_v4().simple().to_string(),
            items,
        }
    }

    /// Create a provider with a caller-chosen instance id
    ///
    /// Two providers with the same id and items accept each other's tokens.
    /// Factories that rebuild a provider per fetch derive the id from the
    /// list reference.
    #[must_use]
    pub fn with_instance_id(instance: impl Into<String>, items: Vec<T>) -> Self {
        Self {
            instance: instance.into(),
            items,
        }
    }

    /// Number of items in the snapshot
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True if the snapshot is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn token_for(&self, offset: usize) -> PageToken {
        PageToken::new(format!("{}{TOKEN_SEPARATOR}{offset}", self.instance))
    }

    fn offset_of(&self, token: &PageToken) -> Result<usize> {
        let (instance, offset) = token
            .as_str()
            .rsplit_once(TOKEN_SEPARATOR)
            .ok_or_else(|| ListNavError::invalid_token(token.as_str()))?;

        if instance != self.instance {
            return Err(ListNavError::invalid_token(format!(
                "{token} was not issued by this list"
            )));
        }

        let offset: usize = offset
            .parse()
            .map_err(|_| ListNavError::invalid_token(token.as_str()))?;

        // Offset 0 is the first page even when the snapshot is empty.
        if offset > 0 && offset >= self.items.len() {
            return Err(ListNavError::invalid_token(format!(
                "{token} is past the end of the list"
            )));
        }

        Ok(offset)
    }
}

#[async_trait]
impl<T> ListProvider for VecListProvider<T>
where
    T: Clone + Serialize + Send + Sync,
{
    type Item = T;

    async fn get_page(&self, token: Option<&PageToken>, page_size: NonZeroU32) -> Result<Page<T>> {
        let offset = match token {
            Some(token) => self.offset_of(token)?,
            None => 0,
        };
        let size = page_size.get() as usize;
        let end = offset.saturating_add(size).min(self.items.len());

        let prev_page_token = (offset > 0).then(|| self.token_for(offset.saturating_sub(size)));
        let next_page_token = (end < self.items.len()).then(|| self.token_for(end));

        Ok(Page {
            items: self.items[offset..end].to_vec(),
            prev_page_token,
            page_token: Some(self.token_for(offset)),
            next_page_token,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size(n: u32) -> NonZeroU32 {
        NonZeroU32::new(n).unwrap()
    }

    #[tokio::test]
    async fn walks_forward_to_the_end() {
        let provider = VecListProvider::new((1..=7).collect::<Vec<u32>>());

        let first = provider.get_page(None, size(3)).await.unwrap();
        assert_eq!(first.items, vec![1, 2, 3]);
        assert!(first.prev_page_token.is_none());

        let second = provider
            .get_page(first.next_page_token.as_ref(), size(3))
            .await
            .unwrap();
        assert_eq!(second.items, vec![4, 5, 6]);
        assert_eq!(second.prev_page_token, first.page_token);

        let last = provider
            .get_page(second.next_page_token.as_ref(), size(3))
            .await
            .unwrap();
        assert_eq!(last.items, vec![7]);
        assert!(last.next_page_token.is_none());
        assert_eq!(last.prev_page_token, second.page_token);
    }

    #[tokio::test]
    async fn same_token_same_page() {
        let provider = VecListProvider::new(vec!["a", "b", "c", "d"]);
        let first = provider.get_page(None, size(2)).await.unwrap();
        let again = provider
            .get_page(first.page_token.as_ref(), size(2))
            .await
            .unwrap();
        assert_eq!(first, again);
    }

    #[tokio::test]
    async fn rejects_tokens_from_other_instances() {
        let mine = VecListProvider::new(vec![1, 2, 3, 4]);
        let theirs = VecListProvider::new(vec![1, 2, 3, 4]);
        let page = theirs.get_page(None, size(2)).await.unwrap();

        let err = mine
            .get_page(page.next_page_token.as_ref(), size(2))
            .await
            .unwrap_err();
        assert!(matches!(err, ListNavError::InvalidToken(_)));
    }

    #[tokio::test]
    async fn rejects_malformed_and_out_of_range_tokens() {
        let provider = VecListProvider::with_instance_id("fixed", vec![1, 2]);

        for raw in ["garbage", "fixed:abc", "fixed:2", "fixed:99"] {
            let token = PageToken::new(raw);
            let err = provider.get_page(Some(&token), size(1)).await.unwrap_err();
            assert!(matches!(err, ListNavError::InvalidToken(_)), "{raw}");
        }
    }

    #[tokio::test]
    async fn empty_snapshot_is_exhausted() {
        let provider: VecListProvider<u8> = VecListProvider::new(Vec::new());
        let page = provider.get_page(None, size(5)).await.unwrap();
        assert!(page.is_exhausted());
        assert!(page.page_token.is_some());
    }
}
