//! Per-conversation navigation state
//!
//! # Module Structure
//!
//! - `store` - Host store contract and an in-memory implementation
//! - `state` - The navigation record and its transitions
//! - `accessor` - Loading, saving and leasing the record

mod accessor;
mod state;
mod store;

pub use accessor::{SESSION_STATE_VERSION, SessionLease, SessionStateAccessor};
pub use state::SessionNavigationState;
pub use store::{MemorySessionStore, SessionStore};
