//! Page navigation engine
//!
//! # Module Structure
//!
//! - `core` - `PageNavigator` struct, construction and shared checks
//! - `get_page` - The get page operation in direct and session mode
//! - `navigation` - Session actions: open list, next/previous page, end conversation

mod core;
mod get_page;
mod navigation;

pub use core::PageNavigator;
