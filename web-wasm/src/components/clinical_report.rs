//! Clinical report panel: sectioned text, copy to clipboard with a
//! transient indicator, expand/collapse.

use gloo::console;
use gloo::timers::callback::Timeout;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen_futures::JsFuture;

use fundus_ai_common::split_sections;

#[component]
pub fn ClinicalReport(report: String) -> impl IntoView {
    let (expanded, set_expanded) = signal(true);
    let (copied, set_copied) = signal(false);

    let sections = split_sections(&report);
    let full_text = StoredValue::new(report);

    let on_copy = move |_| {
        let text = full_text.with_value(|t| t.clone());
        let clipboard = window().navigator().clipboard();
        spawn_local(async move {
            if JsFuture::from(clipboard.write_text(&text)).await.is_ok() {
                set_copied.set(true);
                Timeout::new(2000, move || set_copied.set(false)).forget();
            } else {
                console::warn!("clipboard copy failed");
            }
        });
    };

    view! {
        <div class="clinical-report">
            <div class="report-toolbar">
                <h3>"Clinical Report"</h3>
                <div class="report-actions">
                    <button class="btn btn-small" on:click=on_copy>
                        {move || if copied.get() { "Copied!" } else { "Copy" }}
                    </button>
                    <button class="btn btn-small" on:click=move |_| set_expanded.update(|e| *e = !*e)>
                        {move || if expanded.get() { "Collapse" } else { "Expand" }}
                    </button>
                </div>
            </div>

            <Show
                when=move || expanded.get()
                fallback=|| view! {
                    <p class="text-muted collapsed-hint">"Click expand to view full report..."</p>
                }
            >
                <div class="report-sections">
                    {sections
                        .iter()
                        .map(|section| {
                            view! {
                                <p
                                    class="report-paragraph"
                                    class:section-header=section.is_header
                                >
                                    {section.text.clone()}
                                </p>
                            }
                        })
                        .collect_view()}
                </div>
            </Show>
        </div>
    }
}
