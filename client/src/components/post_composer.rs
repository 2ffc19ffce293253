//! Post composer: text, type tag, and an optional image or video upload.
//!
//! Posts go out as multipart form data; the created post is prepended to the
//! feed only after the server returns it.

#[cfg(test)]
#[path = "post_composer_test.rs"]
mod post_composer_test;

use leptos::prelude::*;

use crate::net::types::{MediaKind, PostType};
use crate::state::feed::FeedState;

/// Longest post body accepted by the composer.
pub const MAX_POST_CHARS: usize = 2000;

/// Validate composer input; `media_mime` is the MIME type of the chosen file.
///
/// # Errors
///
/// Returns the inline message when the post cannot be sent.
pub fn validate_post(content: &str, media_mime: Option<&str>) -> Result<(String, Option<MediaKind>), &'static str> {
    let content = content.trim();
    let media = match media_mime {
        None => None,
        Some(mime) => Some(MediaKind::from_mime(mime).ok_or("Attachments must be an image or video.")?),
    };
    if content.is_empty() && media.is_none() {
        return Err("Write something or attach a photo or video.");
    }
    if content.chars().count() > MAX_POST_CHARS {
        return Err("Posts are limited to 2000 characters.");
    }
    Ok((content.to_owned(), media))
}

#[component]
pub fn PostComposer(feed: RwSignal<FeedState>) -> impl IntoView {
    let content = RwSignal::new(String::new());
    let post_type = RwSignal::new(PostType::General);
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);
    let file_ref = NodeRef::<leptos::html::Input>::new();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }

        #[cfg(feature = "hydrate")]
        let file = file_ref
            .get_untracked()
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));
        #[cfg(feature = "hydrate")]
        let mime = file.as_ref().map(|f| f.type_());
        #[cfg(not(feature = "hydrate"))]
        let mime: Option<String> = None;

        let (text, media) = match validate_post(&content.get_untracked(), mime.as_deref()) {
            Ok(valid) => valid,
            Err(msg) => {
                error.set(Some(msg.to_owned()));
                return;
            }
        };
        error.set(None);
        busy.set(true);
        let tag = post_type.get_untracked();

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = match build_form_data(&text, tag, media.zip(file)) {
                Ok(form) => crate::net::api::create_post(&form).await,
                Err(e) => Err(e),
            };
            match result {
                Ok(post) => {
                    feed.update(|f| f.prepend_created(post));
                    content.set(String::new());
                    if let Some(input) = file_ref.get_untracked() {
                        input.set_value("");
                    }
                }
                Err(e) => {
                    log::warn!("create post failed: {e}");
                    error.set(Some(e.user_message()));
                }
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (text, media, tag, feed);
    };

    view! {
        <form class="post-composer" on:submit=on_submit>
            <textarea
                class="post-composer__input"
                placeholder="What's happening at the track?"
                maxlength=MAX_POST_CHARS.to_string()
                prop:value=move || content.get()
                on:input=move |ev| content.set(event_target_value(&ev))
            ></textarea>
            <div class="post-composer__row">
                <select
                    class="post-composer__type"
                    on:change=move |ev| post_type.set(PostType::from_tag(&event_target_value(&ev)))
                >
                    {PostType::ALL
                        .into_iter()
                        .map(|t| {
                            view! {
                                <option value=t.as_str() selected=move || post_type.get() == t>
                                    {t.label()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
                <input class="post-composer__file" type="file" accept="image/*,video/*" node_ref=file_ref/>
                <button class="btn post-composer__submit" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Posting..." } else { "Post" }}
                </button>
            </div>
            <Show when=move || error.get().is_some()>
                <p class="post-composer__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
        </form>
    }
}

#[cfg(feature = "hydrate")]
fn build_form_data(
    content: &str,
    post_type: PostType,
    attachment: Option<(MediaKind, web_sys::File)>,
) -> Result<web_sys::FormData, crate::net::error::ApiError> {
    let to_err = |e: wasm_bindgen::JsValue| crate::net::error::ApiError::Decode(format!("{e:?}"));
    let form = web_sys::FormData::new().map_err(to_err)?;
    form.append_with_str("content", content).map_err(to_err)?;
    form.append_with_str("type", post_type.as_str()).map_err(to_err)?;
    if let Some((kind, file)) = attachment {
        form.append_with_blob_and_filename(kind.field_name(), &file, &file.name())
            .map_err(to_err)?;
    }
    Ok(form)
}
