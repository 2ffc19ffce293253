//! Marketplace listing page with the purchase form.
//!
//! ERROR HANDLING
//! ==============
//! Stock and quantity are checked locally before the purchase request; a
//! rejected purchase leaves the form intact so the user can retry.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::state::marketplace::{ListingState, PurchaseForm, order_total_cents};
use crate::util::format::price;

fn load_listing(state: RwSignal<ListingState>, id: String) {
    state.update(|s| {
        *s = ListingState {
            loading: true,
            ..ListingState::default()
        };
    });

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_listing(&id).await {
            Ok(listing) => state.update(|s| {
                s.loading = false;
                s.listing = Some(listing);
            }),
            Err(e) => {
                log::warn!("loading listing {id} failed: {e}");
                state.update(|s| {
                    s.loading = false;
                    s.error = Some(e.user_message());
                });
            }
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = id;
}

#[component]
pub fn ListingPage() -> impl IntoView {
    let params = use_params_map();
    let state = RwSignal::new(ListingState::default());
    let form = RwSignal::new(PurchaseForm::default());
    let form_error = RwSignal::new(None::<String>);

    let listing_id = move || params.read().get("id").unwrap_or_default();

    Effect::new(move || {
        let id = listing_id();
        if !id.is_empty() {
            form.set(PurchaseForm::default());
            form_error.set(None);
            load_listing(state, id);
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(available) = state.with_untracked(|s| {
            (!s.purchasing).then_some(s.listing.as_ref().map_or(0, |l| l.available))
        }) else {
            return;
        };
        let request = match form.with_untracked(|f| f.validate(available)) {
            Ok(request) => request,
            Err(msg) => {
                form_error.set(Some(msg.to_owned()));
                return;
            }
        };
        form_error.set(None);
        state.update(|s| s.purchasing = true);
        let id = listing_id();

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::purchase_listing(&id, &request).await {
                Ok(purchase) => {
                    state.update(|s| s.complete_purchase(purchase));
                    form.set(PurchaseForm::default());
                }
                Err(e) => {
                    log::warn!("purchase of listing {id} failed: {e}");
                    state.update(|s| s.purchasing = false);
                    form_error.set(Some(e.user_message()));
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (id, request);
    };

    let total = move || {
        state.with(|s| {
            let unit = s.listing.as_ref().map_or(0, |l| l.price_cents);
            let qty = form.with(|f| f.quantity.trim().parse::<u32>().unwrap_or(0));
            price(order_total_cents(unit, qty))
        })
    };

    view! {
        <div class="listing-page">
            <Show when=move || state.with(|s| s.loading)>
                <p>"Loading listing..."</p>
            </Show>
            <Show when=move || state.with(|s| s.error.is_some())>
                <p class="listing-page__error">{move || state.with(|s| s.error.clone().unwrap_or_default())}</p>
            </Show>
            {move || {
                state
                    .with(|s| s.listing.clone())
                    .map(|listing| {
                        view! {
                            <article class="listing">
                                {listing
                                    .image_url
                                    .clone()
                                    .map(|src| view! { <img class="listing__image" src=src alt=""/> })}
                                <h1 class="listing__title">{listing.title.clone()}</h1>
                                <p class="listing__seller">"Sold by " {listing.seller.label()}</p>
                                <p class="listing__price">{price(u64::from(listing.price_cents))}</p>
                                <p class="listing__stock">
                                    {if listing.available == 0 {
                                        "Sold out".to_owned()
                                    } else {
                                        format!("{} available", listing.available)
                                    }}
                                </p>
                                <p class="listing__description">{listing.description.clone()}</p>
                            </article>
                        }
                    })
            }}
            <Show when=move || state.with(|s| s.receipt.is_some())>
                <p class="listing-page__receipt">
                    {move || {
                        state
                            .with(|s| s.receipt.clone())
                            .map(|r| format!("Order {} placed: {} item(s), {}.", r.id, r.quantity, price(u64::from(r.total_cents))))
                            .unwrap_or_default()
                    }}
                </p>
            </Show>
            <Show when=move || state.with(|s| s.listing.is_some())>
                <form class="form" on:submit=on_submit>
                    <label class="form__label">
                        "Quantity"
                        <input
                            class="form__input"
                            type="number"
                            min="1"
                            prop:value=move || form.with(|f| f.quantity.clone())
                            on:input=move |ev| form.update(|f| f.quantity = event_target_value(&ev))
                        />
                    </label>
                    <label class="form__label">
                        "Shipping address"
                        <textarea
                            class="form__textarea"
                            prop:value=move || form.with(|f| f.shipping_address.clone())
                            on:input=move |ev| form.update(|f| f.shipping_address = event_target_value(&ev))
                        ></textarea>
                    </label>
                    <label class="form__label">
                        "Note to seller"
                        <input
                            class="form__input"
                            type="text"
                            prop:value=move || form.with(|f| f.note.clone())
                            on:input=move |ev| form.update(|f| f.note = event_target_value(&ev))
                        />
                    </label>
                    <p class="form__total">"Total: " {total}</p>
                    <Show when=move || form_error.get().is_some()>
                        <p class="form__error">{move || form_error.get().unwrap_or_default()}</p>
                    </Show>
                    <button
                        class="btn btn--primary"
                        type="submit"
                        disabled=move || state.with(|s| s.purchasing || s.listing.as_ref().is_none_or(|l| l.available == 0))
                    >
                        {move || if state.with(|s| s.purchasing) { "Purchasing..." } else { "Buy now" }}
                    </button>
                </form>
            </Show>
        </div>
    }
}
