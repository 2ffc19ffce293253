use super::*;

// =============================================================
// Post
// =============================================================

#[test]
fn post_decodes_full_payload() {
    let json = serde_json::json!({
        "id": "p-1",
        "author": { "id": "u-1", "username": "quartermile", "display_name": "Quarter Mile" },
        "content": "Fresh tires for Saturday",
        "type": "track_day",
        "media": { "kind": "image", "url": "https://cdn.example.com/p-1.jpg" },
        "likes_count": 4,
        "is_liked": true,
        "comments": [{
            "id": "c-1",
            "author": { "id": "u-2", "username": "apex" },
            "content": "See you there",
            "created_at": "2026-05-01T10:00:00Z"
        }],
        "comments_count": 1,
        "created_at": "2026-05-01T09:00:00Z"
    });
    let post: Post = serde_json::from_value(json).unwrap();
    assert_eq!(post.post_type, PostType::TrackDay);
    assert_eq!(post.likes_count, 4);
    assert!(post.is_liked);
    assert_eq!(post.comments.len(), 1);
    assert_eq!(post.media.unwrap().kind, MediaKind::Image);
}

#[test]
fn post_defaults_missing_counters_and_comments() {
    let json = serde_json::json!({
        "id": "p-2",
        "author": { "id": "u-1", "username": "quartermile" },
        "content": "hi",
        "created_at": "2026-05-01T09:00:00Z"
    });
    let post: Post = serde_json::from_value(json).unwrap();
    assert_eq!(post.post_type, PostType::General);
    assert_eq!(post.likes_count, 0);
    assert!(!post.is_liked);
    assert!(post.comments.is_empty());
    assert_eq!(post.comments_count, 0);
    assert!(post.media.is_none());
}

#[test]
fn post_accepts_float_and_null_counters() {
    let json = serde_json::json!({
        "id": "p-3",
        "author": { "id": "u-1", "username": "quartermile" },
        "content": "hi",
        "likes_count": 12.0,
        "comments_count": null,
        "created_at": "2026-05-01T09:00:00Z"
    });
    let post: Post = serde_json::from_value(json).unwrap();
    assert_eq!(post.likes_count, 12);
    assert_eq!(post.comments_count, 0);
}

#[test]
fn post_rejects_negative_counter() {
    let json = serde_json::json!({
        "id": "p-4",
        "author": { "id": "u-1", "username": "quartermile" },
        "content": "hi",
        "likes_count": -1,
        "created_at": "2026-05-01T09:00:00Z"
    });
    assert!(serde_json::from_value::<Post>(json).is_err());
}

// =============================================================
// PostType
// =============================================================

#[test]
fn post_type_unknown_tag_decodes_as_general() {
    let ty: PostType = serde_json::from_str("\"poll\"").unwrap();
    assert_eq!(ty, PostType::General);
}

#[test]
fn post_type_default_and_known_tags_decode() {
    assert_eq!(PostType::default(), PostType::General);
    assert_eq!(PostType::ALL[0], PostType::General);
    let ty: PostType = serde_json::from_str("\"general\"").unwrap();
    assert_eq!(ty, PostType::General);
    let ty: PostType = serde_json::from_str("\"track_day\"").unwrap();
    assert_eq!(ty, PostType::TrackDay);
}

#[test]
fn post_type_tags_match_serde() {
    for ty in PostType::ALL {
        assert_eq!(serde_json::to_string(&ty).unwrap(), format!("\"{}\"", ty.as_str()));
        assert_eq!(PostType::from_tag(ty.as_str()), ty);
    }
}

// =============================================================
// MediaKind / UserRef / Track
// =============================================================

#[test]
fn media_kind_from_mime_classifies_uploads() {
    assert_eq!(MediaKind::from_mime("image/png"), Some(MediaKind::Image));
    assert_eq!(MediaKind::from_mime("VIDEO/mp4"), Some(MediaKind::Video));
    assert_eq!(MediaKind::from_mime("application/pdf"), None);
    assert_eq!(MediaKind::Video.field_name(), "video");
}

#[test]
fn user_ref_label_prefers_display_name() {
    let mut user = UserRef {
        id: "u-1".to_owned(),
        username: "apex".to_owned(),
        display_name: Some("Apex Hunter".to_owned()),
        avatar_url: None,
    };
    assert_eq!(user.label(), "Apex Hunter");
    user.display_name = Some("  ".to_owned());
    assert_eq!(user.label(), "@apex");
}

#[test]
fn track_label_includes_location() {
    let track = Track {
        id: "t-1".to_owned(),
        name: "Thunder Valley".to_owned(),
        location: Some("Bristol, TN".to_owned()),
        length_miles: Some(0.25),
    };
    assert_eq!(track.label(), "Thunder Valley (Bristol, TN)");
}

// =============================================================
// Request payloads
// =============================================================

#[test]
fn create_event_request_omits_empty_optionals() {
    let request = CreateEventRequest {
        title: "Friday Test & Tune".to_owned(),
        track_id: "t-1".to_owned(),
        date: "2026-06-05".to_owned(),
        start_time: None,
        description: None,
        max_entrants: None,
    };
    assert_eq!(
        serde_json::to_value(&request).unwrap(),
        serde_json::json!({ "title": "Friday Test & Tune", "track_id": "t-1", "date": "2026-06-05" })
    );
}

#[test]
fn notification_reads_type_tag() {
    let json = serde_json::json!({
        "id": "n-1",
        "type": "callout",
        "title": "New callout",
        "message": "apex called you out",
        "created_at": "2026-05-01T09:00:00Z"
    });
    let notification: Notification = serde_json::from_value(json).unwrap();
    assert_eq!(notification.kind, "callout");
    assert!(!notification.is_read);
    assert!(notification.sender.is_none());
}
