//! Type definitions for list navigation
//!
//! - [`identifiers`] - Type-safe string wrappers (`ConversationId`, `ListType`, `PageToken`)
//! - [`list_ref`] - The `ListReference` naming a navigable sequence
//! - [`page`] - Provider pages, token triples and the response shape
//! - [`options`] - Navigator configuration
//! - [`requests`] - Typed per-operation arguments

pub mod identifiers;
pub mod list_ref;
pub mod options;
pub mod page;
pub mod requests;

pub use identifiers::{ConversationId, ListType, PageToken};
pub use list_ref::ListReference;
pub use options::{NavigationMode, NavigatorOptions, NavigatorOptionsBuilder};
pub use page::{Page, PageResponse, PageTokens};
pub use requests::{GetPageRequest, NavigateRequest, OpenListRequest};
