//! Notifications page with best-effort mark-read.

use leptos::prelude::*;

use crate::net::types::Notification;
use crate::state::notifications::NotificationsState;
use crate::util::format::short_date;

/// Fetch `page` of notifications into the shared state.
pub fn load_notifications(state: RwSignal<NotificationsState>, page: u32) {
    state.update(NotificationsState::begin_load);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::list_notifications(page).await {
            Ok(result) => state.update(|s| s.apply_page(result)),
            Err(e) => {
                log::warn!("loading notifications page {page} failed: {e}");
                state.update(|s| s.fail_load(e.user_message()));
            }
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = page;
}

/// Send read receipts without waiting; failures are only logged.
fn send_read_receipts(ids: Vec<String>) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        for id in ids {
            if let Err(e) = crate::net::api::mark_notification_read(&id).await {
                log::warn!("mark notification {id} read failed: {e}");
            }
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = ids;
}

#[component]
pub fn NotificationsPage() -> impl IntoView {
    let state = expect_context::<RwSignal<NotificationsState>>();

    let on_item_click = move |id: String| {
        if state.try_update(|s| s.mark_read(&id)).unwrap_or(false) {
            send_read_receipts(vec![id]);
        }
    };
    let on_mark_all = move |_| {
        let ids = state.try_update(NotificationsState::mark_all_read).unwrap_or_default();
        if !ids.is_empty() {
            send_read_receipts(ids);
        }
    };
    let on_load_more = move |_| {
        if let Some(page) = state.with_untracked(NotificationsState::next_page) {
            load_notifications(state, page);
        }
    };

    view! {
        <div class="notifications-page">
            <header class="notifications-page__header">
                <h1>"Notifications"</h1>
                <button
                    class="btn"
                    disabled=move || state.with(|s| s.unread_count() == 0)
                    on:click=on_mark_all
                >
                    "Mark all read"
                </button>
            </header>
            <Show when=move || state.with(|s| s.error.is_some())>
                <p class="notifications-page__error">{move || state.with(|s| s.error.clone().unwrap_or_default())}</p>
            </Show>
            <ul class="notifications-page__list">
                <For
                    each=move || state.get().items
                    key=|n: &Notification| (n.id.clone(), n.is_read)
                    children=move |n: Notification| {
                        let id = n.id.clone();
                        let sender = n.sender.as_ref().map(crate::net::types::UserRef::label);
                        view! {
                            <li
                                class="notification"
                                class:notification--unread=!n.is_read
                                on:click=move |_| on_item_click(id.clone())
                            >
                                <span class="notification__title">{n.title}</span>
                                {sender.map(|s| view! { <span class="notification__sender">{s}</span> })}
                                <p class="notification__message">{n.message}</p>
                                <time class="notification__date">{short_date(&n.created_at).to_owned()}</time>
                            </li>
                        }
                    }
                />
            </ul>
            <Show when=move || state.with(|s| s.loading)>
                <p>"Loading notifications..."</p>
            </Show>
            <Show when=move || state.with(|s| s.page > 0 && s.has_more && !s.loading)>
                <button class="btn" on:click=on_load_more>
                    "Load more"
                </button>
            </Show>
        </div>
    }
}
