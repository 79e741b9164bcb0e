//! List provider contract
//!
//! A provider turns a page token and a page size into a [`Page`]. Providers
//! are typed over their item; the registry stores them behind
//! [`DynListProvider`], which serializes items to JSON so that lists of
//! different item types can live in the same table.
//!
//! # Module Structure
//!
//! - `memory` - [`VecListProvider`], a provider over an in-memory snapshot

mod memory;

use std::num::NonZeroU32;
use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;

use crate::error::Result;
use crate::types::{ListReference, Page, PageToken};

pub use memory::VecListProvider;

/// Source of pages for one list type
///
/// Implementations must be deterministic for a fixed snapshot: the same
/// token and page size always produce the same page and neighbor tokens.
#[async_trait]
pub trait ListProvider: Send + Sync {
    /// Item type carried by pages
    type Item: Serialize + Send;

    /// Fetch the page identified by `token`, or the first page when `None`
    ///
    /// # Errors
    /// Returns `InvalidToken` if the token was not issued by this list
    /// instance or has expired
    async fn get_page(
        &self,
        token: Option<&PageToken>,
        page_size: NonZeroU32,
    ) -> Result<Page<Self::Item>>;
}

/// Object-safe view of a provider with items rendered as JSON
#[async_trait]
pub trait DynListProvider: Send + Sync {
    /// Fetch a page and serialize its items
    async fn get_json_page(
        &self,
        token: Option<&PageToken>,
        page_size: NonZeroU32,
    ) -> Result<Page<serde_json::Value>>;
}

#[async_trait]
impl<P> DynListProvider for P
where
    P: ListProvider,
{
    async fn get_json_page(
        &self,
        token: Option<&PageToken>,
        page_size: NonZeroU32,
    ) -> Result<Page<serde_json::Value>> {
        let page = self.get_page(token, page_size).await?;
        Ok(page.map_items(serde_json::to_value)?)
    }
}

/// Shared handle to a type-erased provider
pub type SharedProvider = Arc<dyn DynListProvider>;

/// Produces the provider serving a particular list reference
///
/// Lists whose contents depend on reference parameters (a search query, a
/// catalog id) build a provider per reference; lists that ignore them can
/// register a single shared instance.
///
/// The registry calls the factory on every fetch. Providers returned for
/// equal references must accept each other's tokens, so a factory either
/// hands out a cached instance or builds providers whose tokens are derived
/// from the reference (see [`VecListProvider::with_instance_id`]).
pub trait ProviderFactory: Send + Sync {
    /// Provider for `list_ref`
    ///
    /// # Errors
    /// Returns an error if the reference parameters cannot describe a list
    fn provider_for(&self, list_ref: &ListReference) -> Result<SharedProvider>;
}

impl<F> ProviderFactory for F
where
    F: Fn(&ListReference) -> Result<SharedProvider> + Send + Sync,
{
    fn provider_for(&self, list_ref: &ListReference) -> Result<SharedProvider> {
        self(list_ref)
    }
}

/// Factory that hands out the same provider for every reference
pub(crate) struct SingletonFactory(pub(crate) SharedProvider);

impl ProviderFactory for SingletonFactory {
    fn provider_for(&self, _list_ref: &ListReference) -> Result<SharedProvider> {
        Ok(Arc::clone(&self.0))
    }
}
