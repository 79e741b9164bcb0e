//! Typed API surface for the conversational host
//!
//! The host hands over an API name, a conversation handle and raw JSON
//! arguments; [`ApiRouter`] picks the handler, which decodes the arguments
//! into the operation's own type before calling the navigator.
//!
//! # Module Structure
//!
//! - `name` - `ApiName` and its parsing
//! - `handler` - `ApiOperation` / `ApiHandler` capability traits
//! - `operations` - getPage, openList, nextPage, previousPage
//! - `router` - Dispatch table and API catalog

mod handler;
mod name;
mod operations;
mod router;

pub use handler::{ApiHandler, ApiOperation};
pub use name::{API_NAMESPACE, ApiName};
pub use operations::{
    GetPageOperation, NavigateResponse, NextPageOperation, OpenListOperation, OpenListResponse,
    PreviousPageOperation,
};
pub use router::{ApiDescription, ApiRouter, ErrorBody};
