use super::*;

#[test]
fn endpoint_prefixes_api_base() {
    assert_eq!(endpoint("/events"), "/api/events");
}

#[test]
fn post_list_path_uses_feed_variant() {
    assert_eq!(post_list_path(FeedKind::Feed), "/api/posts/feed");
    assert_eq!(post_list_path(FeedKind::Global), "/api/posts/global");
    assert_eq!(post_list_path(FeedKind::Trending), "/api/posts/trending");
}

#[test]
fn post_action_paths_embed_post_id() {
    assert_eq!(post_like_path("p-9"), "/api/posts/p-9/like");
    assert_eq!(post_comments_path("p-9"), "/api/posts/p-9/comments");
}

#[test]
fn like_action_maps_to_http_method() {
    assert_eq!(like_method(LikeAction::Like), ActionMethod::Post);
    assert_eq!(like_method(LikeAction::Unlike), ActionMethod::Delete);
}

#[test]
fn ids_are_encoded_as_one_path_segment() {
    assert_eq!(post_like_path("a/b?c"), "/api/posts/a%2Fb%3Fc/like");
    assert_eq!(post_comments_path("x#1"), "/api/posts/x%231/comments");
    assert_eq!(notification_read_path("../admin"), "/api/notifications/..%2Fadmin/read");
    assert_eq!(purchase_path("l 7"), "/api/marketplace/listings/l%207/purchase");
}

#[test]
fn notification_and_marketplace_paths() {
    assert_eq!(notification_read_path("n-1"), "/api/notifications/n-1/read");
    assert_eq!(listing_path("l-7"), "/api/marketplace/listings/l-7");
    assert_eq!(purchase_path("l-7"), "/api/marketplace/listings/l-7/purchase");
}
