//! Paging limits for callers building list requests.

use std::env;

use thiserror::Error;

use crate::paging::PageRequest;

/// Window size used when the caller does not ask for one.
pub const DEFAULT_PAGE_SIZE: u64 = 12;

/// Hard cap on the window size a caller may request.
pub const MAX_PAGE_SIZE: u64 = 100;

/// Configuration error raised while reading environment overrides.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for '{name}': {detail}")]
    Invalid { name: &'static str, detail: String },
}

/// Paging limits, overridable from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagingConfig {
    pub default_page_size: u64,
    pub max_page_size: u64,
}

impl Default for PagingConfig {
    fn default() -> Self {
        Self {
            default_page_size: DEFAULT_PAGE_SIZE,
            max_page_size: MAX_PAGE_SIZE,
        }
    }
}

impl PagingConfig {
    /// Read overrides from `CATALOG_DEFAULT_PAGE_SIZE` and
    /// `CATALOG_MAX_PAGE_SIZE`, falling back to the built-in limits.
    pub fn from_env() -> Result<Self, ConfigError> {
        let default_page_size =
            opt_var("CATALOG_DEFAULT_PAGE_SIZE")?.unwrap_or(DEFAULT_PAGE_SIZE);
        let max_page_size = opt_var("CATALOG_MAX_PAGE_SIZE")?.unwrap_or(MAX_PAGE_SIZE);

        if default_page_size == 0 {
            return Err(ConfigError::Invalid {
                name: "CATALOG_DEFAULT_PAGE_SIZE",
                detail: "must be at least 1".to_string(),
            });
        }
        if default_page_size > max_page_size {
            return Err(ConfigError::Invalid {
                name: "CATALOG_DEFAULT_PAGE_SIZE",
                detail: format!("exceeds max page size {max_page_size}"),
            });
        }

        Ok(Self {
            default_page_size,
            max_page_size,
        })
    }

    /// Build a request from raw query values, applying the default window
    /// size and the cap.
    pub fn request(&self, page: u64, size: Option<u64>) -> PageRequest {
        let size = size
            .unwrap_or(self.default_page_size)
            .min(self.max_page_size);
        PageRequest::of(page, size)
    }
}

/// Parse an optional numeric environment variable.
fn opt_var(name: &'static str) -> Result<Option<u64>, ConfigError> {
    match env::var(name) {
        Ok(raw) => raw
            .parse()
            .map(Some)
            .map_err(|e: std::num::ParseIntError| ConfigError::Invalid {
                name,
                detail: e.to_string(),
            }),
        Err(_) => Ok(None),
    }
}
