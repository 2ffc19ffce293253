//! User search results with page-number paging.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use crate::net::page::Page;
use crate::net::types::User;

#[derive(Clone, Debug, Default)]
pub struct UserSearchState {
    /// Query the loaded results belong to.
    pub query: String,
    pub results: Vec<User>,
    pub page: u32,
    pub has_more: bool,
    pub loading: bool,
    pub error: Option<String>,
}

impl UserSearchState {
    /// Start a fresh search for `query`.
    pub fn begin_search(&mut self, query: &str) {
        self.query = query.trim().to_owned();
        self.results.clear();
        self.page = 0;
        self.has_more = false;
        self.loading = true;
        self.error = None;
    }

    pub fn next_page(&self) -> Option<u32> {
        if self.loading || !self.has_more {
            return None;
        }
        Some(self.page + 1)
    }

    /// Merge a page fetched for `query`; results for a stale query are ignored.
    pub fn apply_page(&mut self, query: &str, page: Page<User>) -> bool {
        if query.trim() != self.query {
            return false;
        }
        self.loading = false;
        self.has_more = page.has_more;
        if page.page <= 1 {
            self.results = page.items;
        } else {
            self.results.extend(page.items);
        }
        self.page = page.page;
        true
    }

    pub fn fail(&mut self, query: &str, message: String) {
        if query.trim() != self.query {
            return;
        }
        self.loading = false;
        self.error = Some(message);
    }

    /// Query value passed to the API (`None` lists everyone).
    pub fn search_param(&self) -> Option<String> {
        (!self.query.is_empty()).then(|| self.query.clone())
    }
}
