//! Error types for list navigation

use thiserror::Error;

use crate::types::identifiers::ListType;

/// Direction of travel through a paged list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Towards the end of the list
    Forward,
    /// Towards the start of the list
    Backward,
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Forward => f.write_str("forward"),
            Self::Backward => f.write_str("backward"),
        }
    }
}

/// Which caller-supplied argument disagreed with session state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StaleField {
    /// The list reference
    ListRef,
    /// The page token
    PageToken,
}

impl std::fmt::Display for StaleField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ListRef => f.write_str("listRef"),
            Self::PageToken => f.write_str("pageToken"),
        }
    }
}

/// How a failure is surfaced to the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ErrorDisposition {
    /// The request itself was unacceptable
    Rejected,
    /// The requested page does not exist (anymore)
    PageNotFound,
    /// The caller's view of the conversation is out of date; retry
    Retry,
    /// Server-side failure
    Internal,
}

/// Main error type for list navigation
#[derive(Error, Debug)]
pub enum ListNavError {
    /// A required argument was not supplied
    #[error("Missing argument: {0}")]
    MissingArgument(&'static str),

    /// No provider is registered for the list type
    #[error("Unknown list type: {0}")]
    UnknownListType(ListType),

    /// Token not recognized by the resolved provider
    #[error("Invalid page token: {0}")]
    InvalidToken(String),

    /// Caller argument diverges from authoritative session state
    #[error("Stale argument {field}: session holds {expected}, caller sent {supplied}")]
    StaleArgument {
        /// Argument that diverged
        field: StaleField,
        /// Rendering of the session's value
        expected: String,
        /// Rendering of the caller's value
        supplied: String,
    },

    /// Requested page size outside the accepted range
    #[error("Invalid page size {size}: must be between 1 and {max}")]
    InvalidPageSize {
        /// Requested size
        size: u32,
        /// Configured upper bound
        max: u32,
    },

    /// Session mode request without a list opened in the conversation
    #[error("No active list in conversation {0}")]
    NoActiveList(String),

    /// Navigation past a known end of the list
    #[error("No further page {0}")]
    EndOfList(Direction),

    /// Failure reported by the host session store
    #[error("Session store error: {0}")]
    SessionStore(String),

    /// JSON encode/decode error
    #[error("JSON error: {0}")]
    JsonDecode(#[from] serde_json::Error),

    /// Arguments failed boundary validation
    #[error("Invalid arguments for {api}: {message}")]
    InvalidArguments {
        /// API the arguments were sent to
        api: String,
        /// Validation message
        message: String,
    },

    /// No handler for the requested API name
    #[error("Unknown API: {0}")]
    UnknownApi(String),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type alias for list navigation operations
pub type Result<T> = std::result::Result<T, ListNavError>;

impl ListNavError {
    /// Create a missing argument error
    #[must_use]
    pub fn missing_argument(name: &'static str) -> Self {
        Self::MissingArgument(name)
    }

    /// Create an invalid token error
    pub fn invalid_token(msg: impl Into<String>) -> Self {
        Self::InvalidToken(msg.into())
    }

    /// Create a stale argument error
    pub fn stale(field: StaleField, expected: impl Into<String>, supplied: impl Into<String>) -> Self {
        Self::StaleArgument {
            field,
            expected: expected.into(),
            supplied: supplied.into(),
        }
    }

    /// Create a session store error
    pub fn session_store(msg: impl Into<String>) -> Self {
        Self::SessionStore(msg.into())
    }

    /// Create an invalid arguments error
    pub fn invalid_arguments(api: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::InvalidArguments {
            api: api.into(),
            message: msg.into(),
        }
    }

    /// Create an invalid configuration error
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Caller-facing outcome for this error
    #[must_use]
    pub fn disposition(&self) -> ErrorDisposition {
        match self {
            Self::MissingArgument(_)
            | Self::UnknownListType(_)
            | Self::InvalidPageSize { .. }
            | Self::NoActiveList(_)
            | Self::EndOfList(_)
            | Self::InvalidArguments { .. }
            | Self::UnknownApi(_) => ErrorDisposition::Rejected,
            Self::InvalidToken(_) => ErrorDisposition::PageNotFound,
            Self::StaleArgument { .. } => ErrorDisposition::Retry,
            Self::SessionStore(_) | Self::JsonDecode(_) | Self::InvalidConfig(_) => {
                ErrorDisposition::Internal
            }
        }
    }
}
