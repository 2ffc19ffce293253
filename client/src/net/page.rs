//! Page-number pagination shared by every list endpoint.
//!
//! List endpoints take `page` (1-based) and `limit` plus per-endpoint filters.
//! The server does not report a total; a page shorter than [`PAGE_SIZE`] means
//! the list is exhausted.

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

use serde::Deserialize;

/// Fixed number of entries requested per page.
pub const PAGE_SIZE: usize = 20;

/// Whether another page may follow one that returned `len` entries.
pub fn has_more(len: usize) -> bool {
    len >= PAGE_SIZE
}

/// One fetched page of a list endpoint.
#[derive(Clone, Debug, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 1-based page number this result was requested with.
    pub page: u32,
    pub has_more: bool,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, page: u32) -> Self {
        let has_more = has_more(items.len());
        Self { items, page, has_more }
    }

    /// Page number to request next.
    pub fn next(&self) -> u32 {
        self.page + 1
    }
}

/// List bodies arrive either as a bare array or wrapped in `{ "data": [...] }`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum ListBody<T> {
    Bare(Vec<T>),
    Wrapped { data: Vec<T> },
}

impl<T> ListBody<T> {
    pub(crate) fn into_items(self) -> Vec<T> {
        match self {
            Self::Bare(items) | Self::Wrapped { data: items } => items,
        }
    }
}

/// Query-string pairs for `page` plus any non-empty filters.
pub fn page_query(page: u32, filters: &[(&'static str, Option<String>)]) -> Vec<(&'static str, String)> {
    let mut pairs = vec![("page", page.max(1).to_string()), ("limit", PAGE_SIZE.to_string())];
    for (name, value) in filters {
        let Some(value) = value.as_deref().map(str::trim) else {
            continue;
        };
        if value.is_empty() {
            continue;
        }
        pairs.push((*name, value.to_owned()));
    }
    pairs
}
