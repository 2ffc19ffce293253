//! New-event page. Shares the draft flow of the callout form under its own slot.

use leptos::prelude::*;

use crate::components::draft_banner::DraftBanner;
use crate::components::track_select::{TrackSelect, load_tracks};
use crate::net::types::Track;
use crate::state::event::EventForm;
use crate::util::draft::{DraftKind, discard_draft, use_draft};

#[component]
pub fn EventPage() -> impl IntoView {
    let form = RwSignal::new(EventForm::default());
    let recovery = use_draft(DraftKind::Event, form);
    let tracks = RwSignal::new(Vec::<Track>::new());
    let error = RwSignal::new(None::<String>);
    let info = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    load_tracks(tracks, error);

    let on_restore = Callback::new(move |()| {
        if let Some(draft) = recovery.try_update(|r| r.restore()).flatten() {
            form.set(draft);
        }
    });
    let on_dismiss = Callback::new(move |()| discard_draft(DraftKind::Event, recovery));
    let on_clear = move |_| {
        discard_draft(DraftKind::Event, recovery);
        form.set(EventForm::default());
        error.set(None);
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let request = match form.with_untracked(EventForm::validate) {
            Ok(request) => request,
            Err(msg) => {
                error.set(Some(msg.to_owned()));
                return;
            }
        };
        error.set(None);
        info.set(None);
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::create_event(&request).await {
                Ok(event) => {
                    discard_draft(DraftKind::Event, recovery);
                    form.set(EventForm::default());
                    info.set(Some(format!("Event \"{}\" created for {}.", event.title, event.date)));
                }
                Err(e) => {
                    log::warn!("create event failed: {e}");
                    error.set(Some(e.user_message()));
                }
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = request;
    };

    let field = move |get: fn(&EventForm) -> &String| form.with(|f| get(f).clone());

    view! {
        <div class="form-page">
            <h1>"Create an event"</h1>
            <DraftBanner
                visible=Signal::derive(move || recovery.with(|r| r.show_prompt()))
                on_restore
                on_dismiss
            />
            <form class="form" on:submit=on_submit>
                <label class="form__label">
                    "Title"
                    <input
                        class="form__input"
                        type="text"
                        prop:value=move || field(|f| &f.title)
                        on:input=move |ev| form.update(|f| f.title = event_target_value(&ev))
                    />
                </label>
                <label class="form__label">
                    "Track"
                    <TrackSelect
                        tracks
                        value=Signal::derive(move || field(|f| &f.track_id))
                        on_change=Callback::new(move |id: String| form.update(|f| f.track_id = id))
                    />
                </label>
                <div class="form__row">
                    <label class="form__label">
                        "Date"
                        <input
                            class="form__input"
                            type="date"
                            prop:value=move || field(|f| &f.date)
                            on:input=move |ev| form.update(|f| f.date = event_target_value(&ev))
                        />
                    </label>
                    <label class="form__label">
                        "Start time"
                        <input
                            class="form__input"
                            type="time"
                            prop:value=move || field(|f| &f.start_time)
                            on:input=move |ev| form.update(|f| f.start_time = event_target_value(&ev))
                        />
                    </label>
                </div>
                <label class="form__label">
                    "Max entrants"
                    <input
                        class="form__input"
                        type="number"
                        min="1"
                        prop:value=move || field(|f| &f.max_entrants)
                        on:input=move |ev| form.update(|f| f.max_entrants = event_target_value(&ev))
                    />
                </label>
                <label class="form__label">
                    "Description"
                    <textarea
                        class="form__textarea"
                        prop:value=move || field(|f| &f.description)
                        on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                    ></textarea>
                </label>
                <Show when=move || error.get().is_some()>
                    <p class="form__error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <Show when=move || info.get().is_some()>
                    <p class="form__info">{move || info.get().unwrap_or_default()}</p>
                </Show>
                <div class="form__actions">
                    <button class="btn" type="button" on:click=on_clear>
                        "Clear"
                    </button>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating..." } else { "Create event" }}
                    </button>
                </div>
            </form>
        </div>
    }
}
