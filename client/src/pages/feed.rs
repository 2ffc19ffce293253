//! Feed page: variant tabs, type filter, composer, and paged post list.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the landing route. Pages are fetched 20 at a time; "Load more"
//! stays available until a short page comes back.

use leptos::prelude::*;

use crate::components::post_card::PostCard;
use crate::components::post_composer::PostComposer;
use crate::net::types::PostType;
use crate::state::feed::{FeedKind, FeedState};

/// Fetch `page` of the current variant/filter into `feed`. Responses for a
/// variant the user has since left, or for a page no longer in sequence, are
/// dropped.
pub fn load_feed_page(feed: RwSignal<FeedState>, page: u32) {
    let (kind, filter) = feed.with_untracked(|f| (f.kind, f.type_filter));
    feed.update(FeedState::begin_load);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = crate::net::api::list_posts(kind, page, filter).await;
        feed.update(|f| {
            if !f.accepts_page(kind, filter, page) {
                return;
            }
            match result {
                Ok(posts) => f.apply_page(posts),
                Err(e) => {
                    log::warn!("loading {} page {page} failed: {e}", kind.as_str());
                    f.fail_load(e.user_message());
                }
            }
        });
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (kind, filter, page);
}

#[component]
pub fn FeedPage() -> impl IntoView {
    let feed = expect_context::<RwSignal<FeedState>>();

    Effect::new(move || {
        if feed.with_untracked(|f| f.page == 0 && !f.loading) {
            load_feed_page(feed, 1);
        }
    });

    let select = move |kind: FeedKind, filter: Option<PostType>| {
        let changed = feed.try_update(|f| f.select(kind, filter)).unwrap_or(false);
        if changed {
            load_feed_page(feed, 1);
        }
    };

    let on_load_more = move |_| {
        if let Some(page) = feed.with_untracked(FeedState::next_page) {
            load_feed_page(feed, page);
        }
    };

    let post_ids = move || feed.with(|f| f.posts.iter().map(|p| p.id.clone()).collect::<Vec<_>>());

    view! {
        <div class="feed-page">
            <div class="feed-page__tabs" role="tablist">
                {FeedKind::ALL
                    .into_iter()
                    .map(|kind| {
                        view! {
                            <button
                                class="feed-page__tab"
                                class:feed-page__tab--active=move || feed.with(|f| f.kind == kind)
                                role="tab"
                                on:click=move |_| select(kind, feed.with_untracked(|f| f.type_filter))
                            >
                                {kind.label()}
                            </button>
                        }
                    })
                    .collect_view()}
                <select
                    class="feed-page__filter"
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        let filter = (!value.is_empty()).then(|| PostType::from_tag(&value));
                        select(feed.with_untracked(|f| f.kind), filter);
                    }
                >
                    <option value="">"All posts"</option>
                    {PostType::ALL
                        .into_iter()
                        .map(|t| view! { <option value=t.as_str()>{t.label()}</option> })
                        .collect_view()}
                </select>
            </div>

            <PostComposer feed/>

            <Show when=move || feed.with(|f| f.error.is_some())>
                <p class="feed-page__error">{move || feed.with(|f| f.error.clone().unwrap_or_default())}</p>
            </Show>

            <div class="feed-page__posts">
                <For
                    each=post_ids
                    key=String::clone
                    children=move |id: String| view! { <PostCard feed post_id=id/> }
                />
            </div>

            <Show when=move || feed.with(|f| f.loading)>
                <p class="feed-page__loading">"Loading posts..."</p>
            </Show>
            <Show when=move || feed.with(|f| !f.loading && f.page > 0 && f.posts.is_empty())>
                <p class="feed-page__empty">"No posts yet."</p>
            </Show>
            <Show when=move || feed.with(|f| f.page > 0 && f.has_more && !f.loading)>
                <button class="btn feed-page__more" on:click=on_load_more>
                    "Load more"
                </button>
            </Show>
        </div>
    }
}
