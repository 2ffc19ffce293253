//! New-callout page with draft recovery and debounced auto-save.
//!
//! SYSTEM CONTEXT
//! ==============
//! The form state is auto-saved to the callout draft slot while the user
//! types. Validation runs before any request; a successful submit deletes the
//! draft and resets the form.

use leptos::prelude::*;

use crate::components::draft_banner::DraftBanner;
use crate::components::track_select::{TrackSelect, load_tracks};
use crate::net::types::Track;
use crate::state::callout::{CalloutForm, RACE_TYPES};
use crate::util::draft::{DraftKind, discard_draft, use_draft};

#[component]
pub fn CalloutPage() -> impl IntoView {
    let form = RwSignal::new(CalloutForm::default());
    let recovery = use_draft(DraftKind::Callout, form);
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
    let on_dismiss = Callback::new(move |()| discard_draft(DraftKind::Callout, recovery));
    let on_clear = move |_| {
        discard_draft(DraftKind::Callout, recovery);
        form.set(CalloutForm::default());
        error.set(None);
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let request = match form.with_untracked(CalloutForm::validate) {
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
            match crate::net::api::create_callout(&request).await {
                Ok(callout) => {
                    discard_draft(DraftKind::Callout, recovery);
                    form.set(CalloutForm::default());
                    info.set(Some(format!("Callout \"{}\" sent to @{}.", callout.title, callout.opponent)));
                }
                Err(e) => {
                    log::warn!("create callout failed: {e}");
                    error.set(Some(e.user_message()));
                }
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = request;
    };

    let field = move |get: fn(&CalloutForm) -> &String| form.with(|f| get(f).clone());

    view! {
        <div class="form-page">
            <h1>"Call someone out"</h1>
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
                <label class="form__label">
                    "Opponent"
                    <input
                        class="form__input"
                        type="text"
                        placeholder="@username"
                        prop:value=move || field(|f| &f.opponent)
                        on:input=move |ev| form.update(|f| f.opponent = event_target_value(&ev))
                    />
                </label>
                <label class="form__label">
                    "Your vehicle"
                    <input
                        class="form__input"
                        type="text"
                        prop:value=move || field(|f| &f.vehicle)
                        on:input=move |ev| form.update(|f| f.vehicle = event_target_value(&ev))
                    />
                </label>
                <label class="form__label">
                    "Race type"
                    <select
                        class="form__select"
                        prop:value=move || field(|f| &f.race_type)
                        on:change=move |ev| form.update(|f| f.race_type = event_target_value(&ev))
                    >
                        {RACE_TYPES
                            .iter()
                            .map(|(value, label)| {
                                let value = *value;
                                view! {
                                    <option value=value selected=move || form.with(|f| f.race_type == value)>
                                        {*label}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </label>
                <label class="form__label">
                    "Date"
                    <input
                        class="form__input"
                        type="date"
                        prop:value=move || field(|f| &f.scheduled_date)
                        on:input=move |ev| form.update(|f| f.scheduled_date = event_target_value(&ev))
                    />
                </label>
                <label class="form__label">
                    "Notes"
                    <textarea
                        class="form__textarea"
                        prop:value=move || field(|f| &f.notes)
                        on:input=move |ev| form.update(|f| f.notes = event_target_value(&ev))
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
                        {move || if busy.get() { "Sending..." } else { "Send callout" }}
                    </button>
                </div>
                <Show when=move || recovery.with(|r| r.has_unsaved_changes())>
                    <p class="form__hint">"Draft saved on this device."</p>
                </Show>
            </form>
        </div>
    }
}
