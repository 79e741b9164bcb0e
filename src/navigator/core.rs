//! Core navigator structure
//!
//! Provides the `PageNavigator` struct with construction and the checks
//! shared by its operations.

use std::num::NonZeroU32;
use std::sync::Arc;

use crate::error::{ListNavError, Result};
use crate::provider::SharedProvider;
use crate::registry::ProviderRegistry;
use crate::session::{SessionStateAccessor, SessionStore};
use crate::types::{ListReference, NavigatorOptions};

/// Page navigation engine
///
/// Serves get page requests in the mode chosen by its [`NavigatorOptions`]:
/// - direct mode fetches exactly what the caller names
/// - session mode fetches what the conversation's session has queued,
///   then records the new position
pub struct PageNavigator {
    pub(super) registry: ProviderRegistry,
    pub(super) sessions: SessionStateAccessor,
    pub(super) options: NavigatorOptions,
}

impl PageNavigator {
    /// Create a navigator over a provider registry and the host session store
    pub fn new(
        registry: ProviderRegistry,
        store: Arc<dyn SessionStore>,
        options: NavigatorOptions,
    ) -> Self {
        log::debug!(
            "PageNavigator created in {:?} mode (max page size {})",
            options.mode,
            options.max_page_size
        );
        Self {
            registry,
            sessions: SessionStateAccessor::new(store),
            options,
        }
    }

    /// Options the navigator was built with
    #[must_use]
    pub fn options(&self) -> &NavigatorOptions {
        &self.options
    }

    /// Provider registry
    #[must_use]
    pub fn registry(&self) -> &ProviderRegistry {
        &self.registry
    }

    /// Session state accessor
    #[must_use]
    pub fn sessions(&self) -> &SessionStateAccessor {
        &self.sessions
    }

    /// Configured default page size
    #[must_use]
    pub fn default_page_size(&self) -> NonZeroU32 {
        // Options are validated on build, but a hand-assembled struct may carry zero.
        NonZeroU32::new(self.options.default_page_size).unwrap_or(NonZeroU32::MIN)
    }

    pub(super) fn check_page_size(&self, list_ref: &ListReference) -> Result<()> {
        let size = list_ref.page_size.get();
        if size > self.options.max_page_size {
            return Err(ListNavError::InvalidPageSize {
                size,
                max: self.options.max_page_size,
            });
        }
        Ok(())
    }

    /// Resolve a provider for a reference that came out of session data
    pub(super) fn resolve_from_session(&self, list_ref: &ListReference) -> Result<SharedProvider> {
        self.registry.resolve(list_ref).inspect_err(|e| {
            if let ListNavError::UnknownListType(list_type) = e {
                log::error!(
                    "Session references list type {list_type} with no registered provider; \
                     session data is stale or the deployment is misconfigured"
                );
            }
        })
    }
}

impl std::fmt::Debug for PageNavigator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageNavigator")
            .field("registry", &self.registry)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}
