//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::nav_bar::NavBar;
use crate::pages::{
    callout::CalloutPage, event::EventPage, feed::FeedPage, marketplace::ListingPage,
    notifications::{NotificationsPage, load_notifications},
    users::UserSearchPage,
};
use crate::state::{feed::FeedState, notifications::NotificationsState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Feed and notification state are app-wide so the feed keeps its pages and
/// the nav badge stays current across navigation.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let feed = RwSignal::new(FeedState::default());
    let notifications = RwSignal::new(NotificationsState::default());
    provide_context(feed);
    provide_context(notifications);

    // First page of notifications feeds the unread badge.
    Effect::new(move || {
        if notifications.with_untracked(|n| n.page == 0 && !n.loading) {
            load_notifications(notifications, 1);
        }
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/trackside.css"/>
        <Title text="Trackside"/>

        <Router>
            <NavBar/>
            <main class="app-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=FeedPage/>
                    <Route path=(StaticSegment("callouts"), StaticSegment("new")) view=CalloutPage/>
                    <Route path=(StaticSegment("events"), StaticSegment("new")) view=EventPage/>
                    <Route path=StaticSegment("notifications") view=NotificationsPage/>
                    <Route path=StaticSegment("users") view=UserSearchPage/>
                    <Route path=(StaticSegment("marketplace"), ParamSegment("id")) view=ListingPage/>
                </Routes>
            </main>
        </Router>
    }
}
