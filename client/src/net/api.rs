//! REST client for the remote community API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net` against [`API_BASE`].
//! Server-side (SSR) and native tests: every call resolves to
//! [`ApiError::Unavailable`] since these endpoints are only meaningful in the
//! browser.
//!
//! ERROR HANDLING
//! ==============
//! Calls return `Result<_, ApiError>` and never panic. There is no retry
//! policy; callers decide whether a failure is surfaced inline or only logged.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::page::{ListBody, Page, page_query};
use super::types::{
    Callout, Comment, CreateCalloutRequest, CreateEventRequest, Event, Listing, Notification, Post, PostType,
    Purchase, PurchaseRequest, Track, User,
};
use crate::state::feed::{FeedKind, LikeAction};

/// Fixed prefix for every API path.
pub const API_BASE: &str = "/api";

/// Upper bound on pages walked by [`list_all_tracks`].
const MAX_TRACK_PAGES: u32 = 10;

fn endpoint(path: &str) -> String {
    format!("{API_BASE}{path}")
}

fn post_list_path(kind: FeedKind) -> String {
    endpoint(&format!("/posts/{}", kind.as_str()))
}

/// Encode an id as a single path segment so `/`, `?` or `#` cannot change
/// the route.
fn segment(id: &str) -> std::borrow::Cow<'_, str> {
    urlencoding::encode(id)
}

fn post_like_path(post_id: &str) -> String {
    endpoint(&format!("/posts/{}/like", segment(post_id)))
}

fn post_comments_path(post_id: &str) -> String {
    endpoint(&format!("/posts/{}/comments", segment(post_id)))
}

fn notification_read_path(notification_id: &str) -> String {
    endpoint(&format!("/notifications/{}/read", segment(notification_id)))
}

fn listing_path(listing_id: &str) -> String {
    endpoint(&format!("/marketplace/listings/{}", segment(listing_id)))
}

fn purchase_path(listing_id: &str) -> String {
    endpoint(&format!("/marketplace/listings/{}/purchase", segment(listing_id)))
}

// =============================================================
// Transport
// =============================================================

#[cfg(feature = "hydrate")]
fn network_error(err: gloo_net::Error) -> ApiError {
    ApiError::Network(err.to_string())
}

#[cfg(feature = "hydrate")]
async fn read_json<T: DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
    if !resp.ok() {
        return Err(ApiError::Status { status: resp.status() });
    }
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(feature = "hydrate")]
fn check_status(resp: &gloo_net::http::Response) -> Result<(), ApiError> {
    if resp.ok() {
        Ok(())
    } else {
        Err(ApiError::Status { status: resp.status() })
    }
}

async fn get_json<T: DeserializeOwned>(url: &str, query: &[(&'static str, String)]) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(url)
            .query(query.iter().map(|(k, v)| (*k, v.as_str())))
            .send()
            .await
            .map_err(network_error)?;
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (url, query);
        Err(ApiError::Unavailable)
    }
}

async fn get_page<T: DeserializeOwned>(url: &str, page: u32, filters: &[(&'static str, Option<String>)]) -> Result<Page<T>, ApiError> {
    let query = page_query(page, filters);
    let body: ListBody<T> = get_json(url, &query).await?;
    Ok(Page::new(body.into_items(), page.max(1)))
}

async fn post_json<B: Serialize, T: DeserializeOwned>(url: &str, body: &B) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(url)
            .json(body)
            .map_err(|e| ApiError::Decode(e.to_string()))?
            .send()
            .await
            .map_err(network_error)?;
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (url, body);
        Err(ApiError::Unavailable)
    }
}

async fn send_action(method: ActionMethod, url: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let builder = match method {
            ActionMethod::Post => gloo_net::http::Request::post(url),
            ActionMethod::Delete => gloo_net::http::Request::delete(url),
        };
        let resp = builder.send().await.map_err(network_error)?;
        check_status(&resp)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (method, url);
        Err(ApiError::Unavailable)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ActionMethod {
    Post,
    Delete,
}

fn like_method(action: LikeAction) -> ActionMethod {
    match action {
        LikeAction::Like => ActionMethod::Post,
        LikeAction::Unlike => ActionMethod::Delete,
    }
}

// =============================================================
// Posts
// =============================================================

/// Fetch one page of a feed variant, optionally filtered by post type.
///
/// # Errors
///
/// Returns an [`ApiError`] on network, status, or decode failure.
pub async fn list_posts(kind: FeedKind, page: u32, post_type: Option<PostType>) -> Result<Page<Post>, ApiError> {
    let filters = [("type", post_type.map(|t| t.as_str().to_owned()))];
    get_page(&post_list_path(kind), page, &filters).await
}

/// Create a post from a prepared multipart body (`content`, `type`, and an
/// optional `image` or `video` file).
///
/// # Errors
///
/// Returns an [`ApiError`] on network, status, or decode failure.
#[cfg(feature = "hydrate")]
pub async fn create_post(form: &web_sys::FormData) -> Result<Post, ApiError> {
    let resp = gloo_net::http::Request::post(&endpoint("/posts"))
        .body(form.clone())
        .map_err(|e| ApiError::Decode(e.to_string()))?
        .send()
        .await
        .map_err(network_error)?;
    read_json(resp).await
}

/// Issue the remote like or unlike for `post_id`.
///
/// # Errors
///
/// Returns an [`ApiError`] on network or status failure.
pub async fn set_like(post_id: &str, action: LikeAction) -> Result<(), ApiError> {
    send_action(like_method(action), &post_like_path(post_id)).await
}

/// Add a comment and return the server's stored copy.
///
/// # Errors
///
/// Returns an [`ApiError`] on network, status, or decode failure.
pub async fn add_comment(post_id: &str, content: &str) -> Result<Comment, ApiError> {
    let body = serde_json::json!({ "content": content });
    post_json(&post_comments_path(post_id), &body).await
}

// =============================================================
// Users / tracks
// =============================================================

/// List users, filtered by a free-text search when `search` is non-empty.
///
/// # Errors
///
/// Returns an [`ApiError`] on network, status, or decode failure.
pub async fn list_users(page: u32, search: Option<String>) -> Result<Page<User>, ApiError> {
    get_page(&endpoint("/users"), page, &[("q", search)]).await
}

/// List one page of tracks.
///
/// # Errors
///
/// Returns an [`ApiError`] on network, status, or decode failure.
pub async fn list_tracks(page: u32, search: Option<String>) -> Result<Page<Track>, ApiError> {
    get_page(&endpoint("/tracks"), page, &[("q", search)]).await
}

/// Walk track pages until a short page (bounded by `MAX_TRACK_PAGES`).
///
/// # Errors
///
/// Returns the first page's error; later failures keep what was fetched.
pub async fn list_all_tracks() -> Result<Vec<Track>, ApiError> {
    let first = list_tracks(1, None).await?;
    let mut tracks = first.items;
    let mut more = first.has_more;
    let mut page = 2;
    while more && page <= MAX_TRACK_PAGES {
        match list_tracks(page, None).await {
            Ok(next) => {
                more = next.has_more;
                tracks.extend(next.items);
            }
            Err(e) => {
                log::warn!("track page {page} failed: {e}");
                break;
            }
        }
        page += 1;
    }
    Ok(tracks)
}

// =============================================================
// Events / callouts
// =============================================================

/// Create an event.
///
/// # Errors
///
/// Returns an [`ApiError`] on network, status, or decode failure.
pub async fn create_event(request: &CreateEventRequest) -> Result<Event, ApiError> {
    post_json(&endpoint("/events"), request).await
}

/// Create a callout.
///
/// # Errors
///
/// Returns an [`ApiError`] on network, status, or decode failure.
pub async fn create_callout(request: &CreateCalloutRequest) -> Result<Callout, ApiError> {
    post_json(&endpoint("/callouts"), request).await
}

// =============================================================
// Notifications
// =============================================================

/// Fetch one page of the current user's notifications.
///
/// # Errors
///
/// Returns an [`ApiError`] on network, status, or decode failure.
pub async fn list_notifications(page: u32) -> Result<Page<Notification>, ApiError> {
    get_page(&endpoint("/notifications"), page, &[]).await
}

/// Mark a notification read on the server.
///
/// # Errors
///
/// Returns an [`ApiError`] on network or status failure.
pub async fn mark_notification_read(notification_id: &str) -> Result<(), ApiError> {
    send_action(ActionMethod::Post, &notification_read_path(notification_id)).await
}

// =============================================================
// Marketplace
// =============================================================

/// Fetch a single marketplace listing.
///
/// # Errors
///
/// Returns an [`ApiError`] on network, status, or decode failure.
pub async fn fetch_listing(listing_id: &str) -> Result<Listing, ApiError> {
    get_json(&listing_path(listing_id), &[]).await
}

/// Purchase a listing.
///
/// # Errors
///
/// Returns an [`ApiError`] on network, status, or decode failure.
pub async fn purchase_listing(listing_id: &str, request: &PurchaseRequest) -> Result<Purchase, ApiError> {
    post_json(&purchase_path(listing_id), request).await
}
