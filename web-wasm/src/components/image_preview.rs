//! Image preview with zoom and rotation.
//!
//! Zoom is clamped to 25..=200 in steps of 25; rotation cycles by +90°
//! modulo 360. The object URL for the current file is revoked whenever the
//! file changes or the component unmounts, so repeated uploads do not leak.

use leptos::prelude::*;
use web_sys::{File, Url};

const ZOOM_MIN: i32 = 25;
const ZOOM_MAX: i32 = 200;
const ZOOM_STEP: i32 = 25;

#[component]
pub fn ImagePreview(file: RwSignal<Option<File>, LocalStorage>) -> impl IntoView {
    let (zoom, set_zoom) = signal(100);
    let (rotation, set_rotation) = signal(0);
    let (image_url, set_image_url) = signal(None::<String>);

    Effect::new(move |prev_url: Option<Option<String>>| {
        if let Some(Some(old)) = prev_url {
            let _ = Url::revoke_object_url(&old);
        }
        let url = file.with(|f| {
            f.as_ref()
                .and_then(|f| Url::create_object_url_with_blob(f).ok())
        });
        set_image_url.set(url.clone());
        url
    });
    on_cleanup(move || {
        if let Some(url) = image_url.get_untracked() {
            let _ = Url::revoke_object_url(&url);
        }
    });

    let file_meta = move || {
        file.with(|f| {
            f.as_ref()
                .map(|f| format!("{} · {:.1} KB", f.name(), f.size() / 1024.0))
        })
    };

    view! {
        <Show
            when=move || image_url.get().is_some()
            fallback=|| view! {
                <div class="image-preview empty">
                    <p class="text-muted">"No image uploaded"</p>
                </div>
            }
        >
            <div class="image-preview">
                <div class="preview-toolbar">
                    <h3>"Image Preview"</h3>
                    <div class="preview-controls">
                        <button
                            class="btn btn-small"
                            disabled=move || zoom.get() <= ZOOM_MIN
                            on:click=move |_| set_zoom.update(|z| *z = (*z - ZOOM_STEP).max(ZOOM_MIN))
                        >
                            "−"
                        </button>
                        <button
                            class="btn btn-small"
                            disabled=move || zoom.get() >= ZOOM_MAX
                            on:click=move |_| set_zoom.update(|z| *z = (*z + ZOOM_STEP).min(ZOOM_MAX))
                        >
                            "+"
                        </button>
                        <button
                            class="btn btn-small"
                            on:click=move |_| set_rotation.update(|r| *r = (*r + 90) % 360)
                        >
                            "⟳"
                        </button>
                        <span class="zoom-level">{move || format!("{}%", zoom.get())}</span>
                    </div>
                </div>

                <div class="preview-canvas">
                    <img
                        src=move || image_url.get().unwrap_or_default()
                        alt="Fundus Preview"
                        style=move || format!(
                            "transform: rotate({}deg) scale({});",
                            rotation.get(),
                            f64::from(zoom.get()) / 100.0
                        )
                    />
                </div>

                <p class="text-muted">{file_meta}</p>
            </div>
        </Show>
    }
}
