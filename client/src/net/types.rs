//! Wire DTOs for the remote JSON API.
//!
//! DESIGN
//! ======
//! Response types mirror the backend payloads and stay tolerant of the shapes
//! it actually emits (float-encoded counters, missing optional collections).
//! Request payloads are produced by the form models in `state`.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Compact author/sender reference embedded in posts, comments and notifications.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRef {
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

impl UserRef {
    /// Display name when set, otherwise `@username`.
    pub fn label(&self) -> String {
        match self.display_name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name.to_owned(),
            _ => format!("@{}", self.username),
        }
    }
}

/// Fixed set of post categories. Unrecognized tags decode as `General`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PostType {
    Callout,
    Event,
    Build,
    TrackDay,
    Marketplace,
    /// Catch-all; must stay the last variant for `#[serde(other)]`.
    #[default]
    #[serde(other)]
    General,
}

impl PostType {
    pub const ALL: [PostType; 6] = [
        PostType::General,
        PostType::Callout,
        PostType::Event,
        PostType::Build,
        PostType::TrackDay,
        PostType::Marketplace,
    ];

    /// Wire tag, also used as the `type` query filter and multipart field.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Callout => "callout",
            Self::Event => "event",
            Self::Build => "build",
            Self::TrackDay => "track_day",
            Self::Marketplace => "marketplace",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::General => "General",
            Self::Callout => "Callout",
            Self::Event => "Event",
            Self::Build => "Build",
            Self::TrackDay => "Track Day",
            Self::Marketplace => "Marketplace",
        }
    }

    pub fn from_tag(tag: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == tag)
            .unwrap_or_default()
    }
}

/// Kind of media attached to a post.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    /// Classify an upload by MIME type.
    pub fn from_mime(mime: &str) -> Option<Self> {
        let mime = mime.trim().to_ascii_lowercase();
        if mime.starts_with("image/") {
            Some(Self::Image)
        } else if mime.starts_with("video/") {
            Some(Self::Video)
        } else {
            None
        }
    }

    /// Multipart field name the backend expects for this kind of upload.
    pub fn field_name(self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Video => "video",
        }
    }
}

/// Media reference on a post.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Media {
    pub kind: MediaKind,
    pub url: String,
}

/// A comment as returned by the server.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    pub author: UserRef,
    pub content: String,
    pub created_at: String,
}

/// A feed post.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub author: UserRef,
    pub content: String,
    #[serde(rename = "type", default)]
    pub post_type: PostType,
    #[serde(default)]
    pub media: Option<Media>,
    #[serde(default, deserialize_with = "deserialize_count")]
    pub likes_count: u32,
    #[serde(default)]
    pub is_liked: bool,
    /// Comments in display order (oldest first).
    #[serde(default)]
    pub comments: Vec<Comment>,
    #[serde(default, deserialize_with = "deserialize_count")]
    pub comments_count: u32,
    pub created_at: String,
}

/// A notification addressed to the current user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    #[serde(default)]
    pub sender: Option<UserRef>,
    /// Backend type tag (`like`, `comment`, `callout`, `follow`, ...).
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub message: String,
    #[serde(default)]
    pub is_read: bool,
    pub created_at: String,
}

/// A user as returned by list/search.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

/// A race track selectable in the event and callout forms.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Track {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub length_miles: Option<f64>,
}

impl Track {
    pub fn label(&self) -> String {
        match self.location.as_deref() {
            Some(location) if !location.is_empty() => format!("{} ({location})", self.name),
            _ => self.name.clone(),
        }
    }
}

/// Event created through `POST /events`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub title: String,
    pub track_id: String,
    pub date: String,
    #[serde(default)]
    pub start_time: Option<String>,
}

/// Callout created through `POST /callouts`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Callout {
    pub id: String,
    pub title: String,
    pub track_id: String,
    pub opponent: String,
    #[serde(default)]
    pub status: Option<String>,
}

/// Request body for `POST /events`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CreateEventRequest {
    pub title: String,
    pub track_id: String,
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_entrants: Option<u32>,
}

/// Request body for `POST /callouts`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CreateCalloutRequest {
    pub title: String,
    pub track_id: String,
    pub opponent: String,
    pub vehicle: String,
    pub race_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Marketplace listing shown on the purchase page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listing {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(deserialize_with = "deserialize_count")]
    pub price_cents: u32,
    #[serde(default, deserialize_with = "deserialize_count")]
    pub available: u32,
    pub seller: UserRef,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Request body for `POST /marketplace/listings/{id}/purchase`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PurchaseRequest {
    pub quantity: u32,
    pub shipping_address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Completed purchase receipt.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Purchase {
    pub id: String,
    pub listing_id: String,
    #[serde(deserialize_with = "deserialize_count")]
    pub quantity: u32,
    #[serde(deserialize_with = "deserialize_count")]
    pub total_cents: u32,
}

/// Counters arrive as integers, integer-valued floats, or `null`.
fn deserialize_count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Null => Ok(0),
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_u64() {
                return u32::try_from(int).map_err(|_| D::Error::custom(format!("count {int} out of range")));
            }
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
                && float >= 0.0
                && float <= f64::from(u32::MAX)
            {
                return Ok(float as u32);
            }
            Err(D::Error::custom("expected non-negative integer count"))
        }
        _ => Err(D::Error::custom("expected number")),
    }
}
