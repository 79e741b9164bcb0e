//! # List Navigation
//!
//! Lets a conversational or voice interface page through arbitrarily large,
//! provider-defined lists using opaque page tokens, optionally keeping the
//! navigation position in the conversation's session so the caller does not
//! have to resend it every turn.
//!
//! ## Quick Start
//!
//! ```no_run
//! use std::num::NonZeroU32;
//! use std::sync::Arc;
//!
//! use list_navigation::{
//!     ConversationId, GetPageRequest, ListReference, MemorySessionStore, NavigatorOptions,
//!     PageNavigator, ProviderRegistry, VecListProvider,
//! };
//!
//! # async fn example() -> list_navigation::Result<()> {
//! let registry = ProviderRegistry::builder()
//!     .provider("numbers", VecListProvider::new((1..=25).collect::<Vec<u32>>()))
//!     .build();
//! let options = NavigatorOptions::builder().use_session(true).build()?;
//! let navigator = PageNavigator::new(registry, Arc::new(MemorySessionStore::new()), options);
//!
//! let conversation = ConversationId::new("conversation-1");
//! let list_ref = ListReference::new("numbers", NonZeroU32::new(10).unwrap());
//! navigator.open_list(&conversation, list_ref).await?;
//!
//! // First page, then the next one; the caller never handles a token.
//! let first = navigator.get_page(&conversation, GetPageRequest::from_session()).await?;
//! navigator.next_page(&conversation).await?;
//! let second = navigator.get_page(&conversation, GetPageRequest::from_session()).await?;
//! assert_eq!(first.item_count + second.item_count, 20);
//! # Ok(())
//! # }
//! ```
//!
//! ## Modes
//!
//! - **Direct**: every get page call names the list and the page token; no
//!   session state is read or written.
//! - **Session**: the list and the token to fetch come from the
//!   conversation's session. Arguments the caller still sends are checked
//!   against the session and a mismatch fails with
//!   [`ListNavError::StaleArgument`] without advancing the session.
//!
//! ## Architecture
//!
//! - [`types`]: Identifiers, list references, pages, options, request arguments
//! - [`provider`]: The list provider contract and an in-memory provider
//! - [`registry`]: List type to provider resolution
//! - [`session`]: Session store contract, navigation state, leases
//! - [`navigator`]: The page navigation engine
//! - [`api`]: Typed handlers and the router the host dispatches through
//! - [`error`]: Error types and caller-facing dispositions

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod api;
pub mod error;
pub mod navigator;
pub mod provider;
pub mod registry;
pub mod session;
pub mod types;

pub use api::{ApiName, ApiRouter};
pub use error::{Direction, ErrorDisposition, ListNavError, Result, StaleField};
pub use navigator::PageNavigator;
pub use provider::{DynListProvider, ListProvider, ProviderFactory, SharedProvider, VecListProvider};
pub use registry::{ProviderRegistry, ProviderRegistryBuilder};
pub use session::{
    MemorySessionStore, SessionLease, SessionNavigationState, SessionStateAccessor, SessionStore,
};
pub use types::{
    ConversationId, GetPageRequest, ListReference, ListType, NavigationMode, NavigatorOptions,
    OpenListRequest, Page, PageResponse, PageToken, PageTokens,
};

/// Version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
