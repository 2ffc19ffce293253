//! Top navigation with the unread-notification badge.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::notifications::NotificationsState;

#[component]
pub fn NavBar() -> impl IntoView {
    let notifications = expect_context::<RwSignal<NotificationsState>>();
    let unread = move || notifications.with(NotificationsState::unread_count);

    view! {
        <nav class="nav-bar">
            <A href="/" attr:class="nav-bar__brand">
                "Trackside"
            </A>
            <A href="/">"Feed"</A>
            <A href="/callouts/new">"New Callout"</A>
            <A href="/events/new">"New Event"</A>
            <A href="/users">"Racers"</A>
            <span class="nav-bar__spacer"></span>
            <A href="/notifications" attr:class="nav-bar__notifications">
                "Notifications"
                <Show when=move || { unread() > 0 }>
                    <span class="nav-bar__badge">{move || unread().to_string()}</span>
                </Show>
            </A>
        </nav>
    }
}
