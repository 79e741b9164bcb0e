//! API names
//!
//! Handlers are keyed by this enum rather than by raw strings. Parsing
//! accepts both the namespaced form (`ListNav.getPage`) and the bare name.

use std::str::FromStr;

use crate::error::ListNavError;

/// Namespace prefixed to every API name
pub const API_NAMESPACE: &str = "ListNav";

/// Operations exposed to the conversational host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ApiName {
    /// Fetch a page
    GetPage,
    /// Make a list the conversation's active list
    OpenList,
    /// Queue the next page
    NextPage,
    /// Queue the previous page
    PreviousPage,
}

impl ApiName {
    /// Every API, in declaration order
    pub const ALL: [Self; 4] = [Self::GetPage, Self::OpenList, Self::NextPage, Self::PreviousPage];

    /// Bare operation name
    #[must_use]
    pub const fn operation(self) -> &'static str {
        match self {
            Self::GetPage => "getPage",
            Self::OpenList => "openList",
            Self::NextPage => "nextPage",
            Self::PreviousPage => "previousPage",
        }
    }
}

impl std::fmt::Display for ApiName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{API_NAMESPACE}.{}", self.operation())
    }
}

impl FromStr for ApiName {
    type Err = ListNavError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let operation = s
            .strip_prefix(API_NAMESPACE)
            .and_then(|rest| rest.strip_prefix('.'))
            .unwrap_or(s);

        Self::ALL
            .into_iter()
            .find(|api| api.operation() == operation)
            .ok_or_else(|| ListNavError::UnknownApi(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_namespaced_and_bare_names() {
        assert_eq!("ListNav.getPage".parse::<ApiName>().unwrap(), ApiName::GetPage);
        assert_eq!("nextPage".parse::<ApiName>().unwrap(), ApiName::NextPage);
        assert_eq!(ApiName::PreviousPage.to_string(), "ListNav.previousPage");
    }

    #[test]
    fn rejects_other_names() {
        for raw in ["ListNav.deletePage", "Other.getPage", "ListNav.", ""] {
            let err = raw.parse::<ApiName>().unwrap_err();
            assert!(matches!(err, ListNavError::UnknownApi(_)), "{raw}");
        }
    }
}
