//! Social feed state and its two local mutation strategies.
//!
//! SYSTEM CONTEXT
//! ==============
//! Posts are a best-effort local mirror of server state. Likes use an
//! optimistic toggle: the local flag and counter flip before the remote call
//! and are never rolled back. Comments use confirm-then-append: nothing
//! changes locally until the server returns the stored comment. There is no
//! reconciliation; the next full refetch replaces whatever is held here.

#[cfg(test)]
#[path = "feed_test.rs"]
mod feed_test;

use crate::net::page::Page;
use crate::net::types::{Comment, Post, PostType};

/// Feed variant selected by the tabs at the top of the feed page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FeedKind {
    /// Posts from followed users.
    #[default]
    Feed,
    Global,
    Trending,
}

impl FeedKind {
    pub const ALL: [FeedKind; 3] = [FeedKind::Feed, FeedKind::Global, FeedKind::Trending];

    /// Path segment under `/posts`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Feed => "feed",
            Self::Global => "global",
            Self::Trending => "trending",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Feed => "Following",
            Self::Global => "Global",
            Self::Trending => "Trending",
        }
    }
}

/// Remote call implied by a local like toggle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LikeAction {
    Like,
    Unlike,
}

/// Loaded feed pages plus paging/loading flags.
#[derive(Clone, Debug)]
pub struct FeedState {
    pub kind: FeedKind,
    pub type_filter: Option<PostType>,
    pub posts: Vec<Post>,
    /// Last page merged into `posts` (0 before the first load).
    pub page: u32,
    pub has_more: bool,
    pub loading: bool,
    pub error: Option<String>,
}

impl Default for FeedState {
    fn default() -> Self {
        Self {
            kind: FeedKind::Feed,
            type_filter: None,
            posts: Vec::new(),
            page: 0,
            has_more: true,
            loading: false,
            error: None,
        }
    }
}

impl FeedState {
    /// Switch variant/filter and drop loaded posts. Returns `false` when
    /// nothing changed.
    pub fn select(&mut self, kind: FeedKind, type_filter: Option<PostType>) -> bool {
        if self.kind == kind && self.type_filter == type_filter && self.page > 0 {
            return false;
        }
        *self = Self {
            kind,
            type_filter,
            ..Self::default()
        };
        true
    }

    /// Page to request for the next "load more", or `None` when exhausted or busy.
    pub fn next_page(&self) -> Option<u32> {
        if self.loading || !self.has_more {
            return None;
        }
        Some(self.page + 1)
    }

    /// Whether a response for `page` of `kind`/`filter` still belongs here.
    /// After a switch away and back, only page 1 or the page following the
    /// last applied one is accepted.
    pub fn accepts_page(&self, kind: FeedKind, filter: Option<PostType>, page: u32) -> bool {
        self.kind == kind && self.type_filter == filter && (page <= 1 || page == self.page + 1)
    }

    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Merge a fetched page. Page 1 replaces the list; later pages append,
    /// skipping posts already present.
    pub fn apply_page(&mut self, page: Page<Post>) {
        self.loading = false;
        self.has_more = page.has_more;
        if page.page <= 1 {
            self.posts = page.items;
        } else {
            for post in page.items {
                if !self.posts.iter().any(|p| p.id == post.id) {
                    self.posts.push(post);
                }
            }
        }
        self.page = page.page;
    }

    pub fn fail_load(&mut self, message: String) {
        self.loading = false;
        self.error = Some(message);
    }

    pub fn post(&self, post_id: &str) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == post_id)
    }

    fn post_mut(&mut self, post_id: &str) -> Option<&mut Post> {
        self.posts.iter_mut().find(|p| p.id == post_id)
    }

    /// Optimistic toggle: flip `is_liked`, move `likes_count` by one, and
    /// return the remote action implied by the pre-toggle state. Unknown ids
    /// change nothing and return `None`.
    pub fn toggle_like(&mut self, post_id: &str) -> Option<LikeAction> {
        let post = self.post_mut(post_id)?;
        let action = if post.is_liked {
            post.likes_count = post.likes_count.saturating_sub(1);
            LikeAction::Unlike
        } else {
            post.likes_count = post.likes_count.saturating_add(1);
            LikeAction::Like
        };
        post.is_liked = !post.is_liked;
        Some(action)
    }

    /// Confirm-then-append: record a comment the server has already stored.
    /// Returns `false` when the post is no longer loaded.
    pub fn append_confirmed_comment(&mut self, post_id: &str, comment: Comment) -> bool {
        let Some(post) = self.post_mut(post_id) else {
            return false;
        };
        post.comments.push(comment);
        post.comments_count = post.comments_count.saturating_add(1);
        true
    }

    /// Put a freshly created post at the top when it belongs in the current view.
    pub fn prepend_created(&mut self, post: Post) {
        if self.type_filter.is_some_and(|t| t != post.post_type) {
            return;
        }
        if self.posts.iter().any(|p| p.id == post.id) {
            return;
        }
        self.posts.insert(0, post);
    }
}

/// Trim and reject blank comment text before any remote call.
///
/// # Errors
///
/// Returns the inline message when the comment is empty.
pub fn validate_comment(text: &str) -> Result<String, &'static str> {
    let text = text.trim();
    if text.is_empty() {
        return Err("Write a comment first.");
    }
    Ok(text.to_owned())
}
