//! Racer directory with debounced search.

use leptos::prelude::*;

use crate::net::types::User;
use crate::state::users::UserSearchState;
use crate::util::debounce::Debouncer;

const SEARCH_DEBOUNCE_MS: u32 = 300;

fn load_users(state: RwSignal<UserSearchState>, page: u32) {
    let (query, search) = state.with_untracked(|s| (s.query.clone(), s.search_param()));
    state.update(|s| s.loading = true);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::list_users(page, search).await {
            Ok(result) => {
                state.update(|s| {
                    s.apply_page(&query, result);
                });
            }
            Err(e) => {
                log::warn!("user search {query:?} page {page} failed: {e}");
                state.update(|s| s.fail(&query, e.user_message()));
            }
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (query, search, page);
}

#[component]
pub fn UserSearchPage() -> impl IntoView {
    let state = RwSignal::new(UserSearchState::default());
    let input = RwSignal::new(String::new());
    let debouncer = StoredValue::new(Debouncer::default());

    Effect::new(move || {
        state.update(|s| s.begin_search(""));
        load_users(state, 1);
    });

    let on_input = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        input.set(value.clone());
        let ticket = debouncer.try_update_value(Debouncer::bump).unwrap_or_default();

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(SEARCH_DEBOUNCE_MS))).await;
            if debouncer.with_value(|d| d.is_current(ticket)) {
                state.update(|s| s.begin_search(&value));
                load_users(state, 1);
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (ticket, value);
    };

    let on_load_more = move |_| {
        if let Some(page) = state.with_untracked(UserSearchState::next_page) {
            load_users(state, page);
        }
    };

    view! {
        <div class="users-page">
            <h1>"Racers"</h1>
            <input
                class="form__input users-page__search"
                type="search"
                placeholder="Search by name or username"
                prop:value=move || input.get()
                on:input=on_input
            />
            <Show when=move || state.with(|s| s.error.is_some())>
                <p class="users-page__error">{move || state.with(|s| s.error.clone().unwrap_or_default())}</p>
            </Show>
            <ul class="users-page__list">
                <For
                    each=move || state.get().results
                    key=|u: &User| u.id.clone()
                    children=|u: User| {
                        view! {
                            <li class="user-row">
                                {u.avatar_url.clone().map(|src| view! { <img class="user-row__avatar" src=src alt=""/> })}
                                <span class="user-row__name">{u.display_name.clone().unwrap_or_else(|| u.username.clone())}</span>
                                <span class="user-row__handle">"@" {u.username.clone()}</span>
                                {u.location.clone().map(|l| view! { <span class="user-row__location">{l}</span> })}
                            </li>
                        }
                    }
                />
            </ul>
            <Show when=move || state.with(|s| s.loading)>
                <p>"Searching..."</p>
            </Show>
            <Show when=move || state.with(|s| !s.loading && s.page > 0 && s.results.is_empty())>
                <p class="users-page__empty">"No racers found."</p>
            </Show>
            <Show when=move || state.with(|s| s.has_more && !s.loading)>
                <button class="btn" on:click=on_load_more>
                    "Load more"
                </button>
            </Show>
        </div>
    }
}
