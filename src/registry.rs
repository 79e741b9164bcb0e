//! Provider registry
//!
//! Maps list-type discriminators to the factories producing their providers.
//! The table is assembled with [`ProviderRegistryBuilder`] at startup and is
//! read-only afterwards, so lookups need no locking.

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::{ListNavError, Result};
use crate::provider::{DynListProvider, ProviderFactory, SharedProvider, SingletonFactory};
use crate::types::{ListReference, ListType};

/// Read-only table resolving list references to providers
#[derive(Clone, Default)]
pub struct ProviderRegistry {
    factories: Arc<HashMap<ListType, Arc<dyn ProviderFactory>>>,
}

impl ProviderRegistry {
    /// Create a new registry builder
    #[must_use]
    pub fn builder() -> ProviderRegistryBuilder {
        ProviderRegistryBuilder::default()
    }

    /// Resolve the provider serving `list_ref`
    ///
    /// # Errors
    /// Returns `UnknownListType` if nothing is registered for the reference's
    /// list type, or whatever the factory reports for bad parameters
    pub fn resolve(&self, list_ref: &ListReference) -> Result<SharedProvider> {
        let factory = self
            .factories
            .get(&list_ref.list_type)
            .ok_or_else(|| ListNavError::UnknownListType(list_ref.list_type.clone()))?;
        factory.provider_for(list_ref)
    }

    /// True if a provider is registered for `list_type`
    #[must_use]
    pub fn contains(&self, list_type: &ListType) -> bool {
        self.factories.contains_key(list_type)
    }

    /// Registered list types, sorted
    #[must_use]
    pub fn list_types(&self) -> Vec<ListType> {
        let mut types: Vec<ListType> = self.factories.keys().cloned().collect();
        types.sort();
        types
    }
}

impl std::fmt::Debug for ProviderRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderRegistry")
            .field("list_types", &self.list_types())
            .finish()
    }
}

/// Builder for [`ProviderRegistry`]
#[derive(Default)]
pub struct ProviderRegistryBuilder {
    factories: HashMap<ListType, Arc<dyn ProviderFactory>>,
}

impl ProviderRegistryBuilder {
    /// Serve every reference of `list_type` from one provider instance
    #[must_use]
    pub fn provider<P>(self, list_type: impl Into<ListType>, provider: P) -> Self
    where
        P: DynListProvider + 'static,
    {
        self.shared_provider(list_type, Arc::new(provider))
    }

    /// Serve every reference of `list_type` from an already shared provider
    #[must_use]
    pub fn shared_provider(self, list_type: impl Into<ListType>, provider: SharedProvider) -> Self {
        self.factory(list_type, SingletonFactory(provider))
    }

    /// Build providers per reference through `factory`
    #[must_use]
    pub fn factory<F>(mut self, list_type: impl Into<ListType>, factory: F) -> Self
    where
        F: ProviderFactory + 'static,
    {
        let list_type = list_type.into();
        if self
            .factories
            .insert(list_type.clone(), Arc::new(factory))
            .is_some()
        {
            log::warn!("Provider for list type {list_type} registered twice; keeping the last one");
        }
        self
    }

    /// Freeze the table
    #[must_use]
    pub fn build(self) -> ProviderRegistry {
        log::debug!("Provider registry built with {} list type(s)", self.factories.len());
        ProviderRegistry {
            factories: Arc::new(self.factories),
        }
    }
}
