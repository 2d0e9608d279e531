//! Page window types shared by the store contracts and the service boundary.
//!
//! Mirrors the usual page/size request plus a content-and-totals response. The
//! service never constructs pages itself; stores return them and the service
//! maps the content (see `Page::map`).

use serde::{Deserialize, Serialize};

/// Zero-based page window request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    page: u64,
    size: u64,
}

impl PageRequest {
    /// Build a request. `size` is clamped to at least 1 so a window always
    /// makes progress.
    pub fn of(page: u64, size: u64) -> Self {
        Self {
            page,
            size: size.max(1),
        }
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    /// Number of records before this window.
    pub fn offset(&self) -> u64 {
        self.page * self.size
    }
}

/// One window of results plus the totals needed to render pagination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub content: Vec<T>,
    pub page: u64,
    pub size: u64,
    pub total_elements: u64,
}

impl<T> Page<T> {
    /// An empty window for the given request.
    pub fn empty(request: PageRequest) -> Self {
        Self {
            content: Vec::new(),
            page: request.page(),
            size: request.size(),
            total_elements: 0,
        }
    }

    pub fn total_pages(&self) -> u64 {
        self.total_elements.div_ceil(self.size.max(1))
    }

    /// Map the window content, keeping the window metadata.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            content: self.content.into_iter().map(f).collect(),
            page: self.page,
            size: self.size,
            total_elements: self.total_elements,
        }
    }

    /// Window an already-materialized result set. Store implementations that
    /// hold their rows in memory delegate here; SQL-backed stores window in
    /// the query instead.
    pub fn paginate(all: Vec<T>, request: PageRequest) -> Self {
        let total_elements = all.len() as u64;
        let content = all
            .into_iter()
            .skip(request.offset() as usize)
            .take(request.size() as usize)
            .collect();

        Self {
            content,
            page: request.page(),
            size: request.size(),
            total_elements,
        }
    }
}
