//! Restore/dismiss prompt shown when a form finds a saved draft on load.

use leptos::prelude::*;

#[component]
pub fn DraftBanner(
    #[prop(into)] visible: Signal<bool>,
    on_restore: Callback<()>,
    on_dismiss: Callback<()>,
) -> impl IntoView {
    view! {
        <Show when=move || visible.get()>
            <div class="draft-banner" role="status">
                <span class="draft-banner__text">"You have unsaved changes from a previous visit."</span>
                <button class="btn draft-banner__restore" type="button" on:click=move |_| on_restore.run(())>
                    "Restore"
                </button>
                <button class="btn draft-banner__dismiss" type="button" on:click=move |_| on_dismiss.run(())>
                    "Dismiss"
                </button>
            </div>
        </Show>
    }
}
