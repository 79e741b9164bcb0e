//! Navigator options and configuration
//!
//! The navigation mode is chosen once, at construction, and carried by
//! [`NavigatorOptions`] instead of a global flag.

use crate::error::{ListNavError, Result};

/// Environment variable selecting session mode
pub const ENV_USE_SESSION: &str = "LIST_NAV_USE_SESSION";

/// Environment variable for the default page size
pub const ENV_DEFAULT_PAGE_SIZE: &str = "LIST_NAV_DEFAULT_PAGE_SIZE";

/// Environment variable for the largest accepted page size
pub const ENV_MAX_PAGE_SIZE: &str = "LIST_NAV_MAX_PAGE_SIZE";

/// Default items per page when a caller opens a list without a size
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Default upper bound for page sizes
pub const DEFAULT_MAX_PAGE_SIZE: u32 = 100;

/// Where navigation arguments come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavigationMode {
    /// Caller sends list reference and page token on every request
    #[default]
    Direct,
    /// Navigation position is tracked in the conversation session
    Session,
}

/// Options for [`PageNavigator`](crate::PageNavigator)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigatorOptions {
    /// Navigation mode
    pub mode: NavigationMode,
    /// Page size used when none is supplied
    pub default_page_size: u32,
    /// Largest page size passed to providers
    pub max_page_size: u32,
}

impl Default for NavigatorOptions {
    fn default() -> Self {
        Self {
            mode: NavigationMode::Direct,
            default_page_size: DEFAULT_PAGE_SIZE,
            max_page_size: DEFAULT_MAX_PAGE_SIZE,
        }
    }
}

impl NavigatorOptions {
    /// Create a new builder for `NavigatorOptions`
    #[must_use]
    pub fn builder() -> NavigatorOptionsBuilder {
        NavigatorOptionsBuilder::default()
    }

    /// True in session mode
    #[must_use]
    pub fn use_session(&self) -> bool {
        self.mode == NavigationMode::Session
    }

    /// Read options from the process environment
    ///
    /// # Errors
    /// Returns `InvalidConfig` for unparseable or out-of-range values
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read options through an arbitrary key lookup
    ///
    /// # Errors
    /// Returns `InvalidConfig` for unparseable or out-of-range values
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut builder = Self::builder();

        if let Some(raw) = lookup(ENV_USE_SESSION) {
            builder = builder.use_session(parse_bool(ENV_USE_SESSION, &raw)?);
        }
        if let Some(raw) = lookup(ENV_DEFAULT_PAGE_SIZE) {
            builder = builder.default_page_size(parse_size(ENV_DEFAULT_PAGE_SIZE, &raw)?);
        }
        if let Some(raw) = lookup(ENV_MAX_PAGE_SIZE) {
            builder = builder.max_page_size(parse_size(ENV_MAX_PAGE_SIZE, &raw)?);
        }

        builder.build()
    }
}

fn parse_bool(key: &str, raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => Err(ListNavError::invalid_config(format!(
            "{key}: expected a boolean, got '{other}'"
        ))),
    }
}

fn parse_size(key: &str, raw: &str) -> Result<u32> {
    raw.trim()
        .parse::<u32>()
        .map_err(|e| ListNavError::invalid_config(format!("{key}: {e}")))
}

// ============================================================================
// Builder for NavigatorOptions
// ============================================================================

/// Builder for `NavigatorOptions`
#[derive(Debug, Default)]
pub struct NavigatorOptionsBuilder {
    options: NavigatorOptions,
}

impl NavigatorOptionsBuilder {
    /// Set the navigation mode
    #[must_use]
    pub const fn mode(mut self, mode: NavigationMode) -> Self {
        self.options.mode = mode;
        self
    }

    /// Select session mode (`true`) or direct mode (`false`)
    #[must_use]
    pub const fn use_session(mut self, use_session: bool) -> Self {
        self.options.mode = if use_session {
            NavigationMode::Session
        } else {
            NavigationMode::Direct
        };
        self
    }

    /// Set the default page size
    #[must_use]
    pub const fn default_page_size(mut self, size: u32) -> Self {
        self.options.default_page_size = size;
        self
    }

    /// Set the largest accepted page size
    #[must_use]
    pub const fn max_page_size(mut self, size: u32) -> Self {
        self.options.max_page_size = size;
        self
    }

    /// Build the options
    ///
    /// # Errors
    /// Returns `InvalidConfig` if a size is zero or the default exceeds the maximum
    pub fn build(self) -> Result<NavigatorOptions> {
        let options = self.options;
        if options.max_page_size == 0 {
            return Err(ListNavError::invalid_config("max page size must be positive"));
        }
        if options.default_page_size == 0 || options.default_page_size > options.max_page_size {
            return Err(ListNavError::invalid_config(format!(
                "default page size {} must be between 1 and {}",
                options.default_page_size, options.max_page_size
            )));
        }
        Ok(options)
    }
}
