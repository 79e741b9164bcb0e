//! List references
//!
//! A [`ListReference`] carries everything needed to recreate the exact
//! sequence a caller is paging through.

use std::collections::BTreeMap;
use std::num::NonZeroU32;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::identifiers::ListType;

/// Identifies a navigable list instance
///
/// Equality is structural: two references with the same type, parameters
/// and page size denote the same list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListReference {
    /// Provider discriminator
    pub list_type: ListType,
    /// Parameters the provider needs to rebuild the sequence (query, catalog id, ...)
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub params: BTreeMap<String, String>,
    /// Items per page
    pub page_size: NonZeroU32,
}

impl ListReference {
    /// Create a reference without parameters
    pub fn new(list_type: impl Into<ListType>, page_size: NonZeroU32) -> Self {
        Self {
            list_type: list_type.into(),
            params: BTreeMap::new(),
            page_size,
        }
    }

    /// Add a parameter
    #[must_use]
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    /// Look up a parameter
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }
}

impl std::fmt::Display for ListReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}[", self.list_type)?;
        for (i, (k, v)) in self.params.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{k}={v}")?;
        }
        write!(f, "]/{}", self.page_size)
    }
}
