//! Feed post card with like toggle and comment thread.
//!
//! DESIGN
//! ======
//! The card reads its post from the shared `FeedState` by id so optimistic
//! like changes and confirmed comments re-render in place. Likes update
//! locally before the request and are never rolled back; comments only show
//! once the server has returned them.

use leptos::prelude::*;

use crate::net::types::{Comment, MediaKind, Post};
use crate::state::feed::{FeedState, validate_comment};
use crate::util::format::{count_label, short_date};

#[component]
pub fn PostCard(feed: RwSignal<FeedState>, post_id: String) -> impl IntoView {
    let id = StoredValue::new(post_id);
    let post = Memo::new(move |_| id.with_value(|id| feed.with(|f| f.post(id).cloned())));

    let text = move |f: fn(&Post) -> String| post.with(|p| p.as_ref().map(f).unwrap_or_default());
    let liked = move || post.with(|p| p.as_ref().is_some_and(|p| p.is_liked));
    let likes = move || post.with(|p| p.as_ref().map_or(0, |p| p.likes_count));
    let comment_total = move || post.with(|p| p.as_ref().map_or(0, |p| p.comments_count));
    let comments = move || post.with(|p| p.as_ref().map(|p| p.comments.clone()).unwrap_or_default());
    let media = move || post.with(|p| p.as_ref().and_then(|p| p.media.clone()));

    let on_like = move |_| {
        let post_id = id.get_value();
        let Some(action) = feed.try_update(|f| f.toggle_like(&post_id)).flatten() else {
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            if let Err(e) = crate::net::api::set_like(&post_id, action).await {
                log::warn!("{action:?} for post {post_id} failed: {e}");
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = action;
    };

    let comment_text = RwSignal::new(String::new());
    let comment_error = RwSignal::new(None::<String>);
    let sending = RwSignal::new(false);

    let on_comment = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if sending.get_untracked() {
            return;
        }
        let content = match validate_comment(&comment_text.get_untracked()) {
            Ok(content) => content,
            Err(msg) => {
                comment_error.set(Some(msg.to_owned()));
                return;
            }
        };
        comment_error.set(None);
        sending.set(true);
        let post_id = id.get_value();

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::add_comment(&post_id, &content).await {
                Ok(comment) => {
                    feed.update(|f| {
                        f.append_confirmed_comment(&post_id, comment);
                    });
                    comment_text.set(String::new());
                }
                Err(e) => {
                    log::warn!("comment on post {post_id} failed: {e}");
                    comment_error.set(Some(e.user_message()));
                }
            }
            sending.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (post_id, content);
    };

    view! {
        <Show when=move || post.with(Option::is_some)>
            <article class="post-card">
                <header class="post-card__header">
                    <span class="post-card__author">{move || text(|p| p.author.label())}</span>
                    <span class="post-card__type">{move || text(|p| p.post_type.label().to_owned())}</span>
                    <time class="post-card__date">{move || text(|p| short_date(&p.created_at).to_owned())}</time>
                </header>
                <p class="post-card__content">{move || text(|p| p.content.clone())}</p>
                {move || {
                    media()
                        .map(|m| match m.kind {
                            MediaKind::Image => {
                                view! { <img class="post-card__media" src=m.url alt="" loading="lazy"/> }
                                    .into_any()
                            }
                            MediaKind::Video => {
                                view! { <video class="post-card__media" src=m.url controls=true></video> }
                                    .into_any()
                            }
                        })
                }}
                <footer class="post-card__actions">
                    <button
                        class="btn post-card__like"
                        class:post-card__like--active=liked
                        aria-pressed=move || if liked() { "true" } else { "false" }
                        on:click=on_like
                    >
                        {move || count_label(likes(), "like", "likes")}
                    </button>
                    <span class="post-card__comment-count">
                        {move || count_label(comment_total(), "comment", "comments")}
                    </span>
                </footer>
                <ul class="post-card__comments">
                    <For
                        each=comments
                        key=|c: &Comment| c.id.clone()
                        children=move |c: Comment| {
                            view! {
                                <li class="post-card__comment">
                                    <span class="post-card__comment-author">{c.author.label()}</span>
                                    " "
                                    <span>{c.content}</span>
                                </li>
                            }
                        }
                    />
                </ul>
                <form class="post-card__comment-form" on:submit=on_comment>
                    <input
                        class="post-card__comment-input"
                        type="text"
                        placeholder="Add a comment"
                        prop:value=move || comment_text.get()
                        on:input=move |ev| comment_text.set(event_target_value(&ev))
                    />
                    <button class="btn" type="submit" disabled=move || sending.get()>
                        "Post"
                    </button>
                </form>
                <Show when=move || comment_error.get().is_some()>
                    <p class="post-card__error">{move || comment_error.get().unwrap_or_default()}</p>
                </Show>
            </article>
        </Show>
    }
}
