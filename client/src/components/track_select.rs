//! Track picker shared by the event and callout forms.

use leptos::prelude::*;

use crate::net::types::Track;

/// Load every track page into `tracks` once, recording failures in `error`.
pub fn load_tracks(tracks: RwSignal<Vec<Track>>, error: RwSignal<Option<String>>) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::list_all_tracks().await {
            Ok(list) => tracks.set(list),
            Err(e) => {
                log::warn!("track list failed: {e}");
                error.set(Some(e.user_message()));
            }
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (tracks, error);
}

#[component]
pub fn TrackSelect(
    tracks: RwSignal<Vec<Track>>,
    #[prop(into)] value: Signal<String>,
    on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <select
            class="form__select"
            prop:value=move || value.get()
            on:change=move |ev| on_change.run(event_target_value(&ev))
        >
            <option value="" selected=move || value.get().is_empty()>
                "Select a track"
            </option>
            <For
                each=move || tracks.get()
                key=|t: &Track| t.id.clone()
                children=move |t: Track| {
                    let id = t.id.clone();
                    view! {
                        <option value=t.id.clone() selected=move || value.get() == id>
                            {t.label()}
                        </option>
                    }
                }
            />
        </select>
    }
}
