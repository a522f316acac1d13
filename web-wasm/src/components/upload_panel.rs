//! Upload panel: file picker with drag & drop, report-type selector and
//! the analyze trigger.

use leptos::prelude::*;
use web_sys::{DragEvent, File, HtmlInputElement};

use fundus_ai_common::ReportType;

#[component]
pub fn UploadPanel<FS, FA>(
    file: RwSignal<Option<File>, LocalStorage>,
    report_type: ReadSignal<ReportType>,
    set_report_type: WriteSignal<ReportType>,
    loading: ReadSignal<bool>,
    error: ReadSignal<Option<String>>,
    on_file_selected: FS,
    on_analyze: FA,
) -> impl IntoView
where
    FS: Fn(File) + 'static + Clone,
    FA: Fn(()) + 'static + Clone,
{
    let (is_dragover, set_is_dragover) = signal(false);

    let on_input_change = {
        let on_file_selected = on_file_selected.clone();
        move |ev: web_sys::Event| {
            let input: HtmlInputElement = event_target(&ev);
            if let Some(selected) = input.files().and_then(|files| files.get(0)) {
                on_file_selected(selected);
            }
        }
    };

    let on_drop = {
        let on_file_selected = on_file_selected.clone();
        move |ev: DragEvent| {
            ev.prevent_default();
            set_is_dragover.set(false);
            let dropped = ev
                .data_transfer()
                .and_then(|dt| dt.files())
                .and_then(|files| files.get(0));
            if let Some(selected) = dropped {
                on_file_selected(selected);
            }
        }
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragover.set(true);
    };

    let on_dragleave = move |_: DragEvent| {
        set_is_dragover.set(false);
    };

    let selected_name = move || file.with(|f| f.as_ref().map(|f| f.name()));

    view! {
        <div class="upload-panel">
            <h2>"Upload Image"</h2>

            <div
                class="upload-area"
                class:dragover=move || is_dragover.get()
                on:drop=on_drop
                on:dragover=on_dragover
                on:dragleave=on_dragleave
            >
                <label for="file-upload" class="upload-label">
                    "Select Image"
                </label>
                <input
                    type="file"
                    id="file-upload"
                    accept="image/*"
                    class="file-input"
                    on:change=on_input_change
                />
                <p class="text-muted">"or drag & drop a fundus image here"</p>
                <Show when=move || selected_name().is_some()>
                    <p class="selected-file">"Selected: " {move || selected_name().unwrap_or_default()}</p>
                </Show>
            </div>

            <div class="form-group">
                <label for="report-type">"Report Type"</label>
                <select
                    id="report-type"
                    on:change=move |ev| {
                        set_report_type.set(match event_target_value(&ev).as_str() {
                            "comprehensive" => ReportType::Comprehensive,
                            "technical" => ReportType::Technical,
                            _ => ReportType::Brief,
                        });
                    }
                >
                    <option value="brief" selected=move || report_type.get() == ReportType::Brief>"Brief"</option>
                    <option value="comprehensive" selected=move || report_type.get() == ReportType::Comprehensive>"Comprehensive"</option>
                    <option value="technical" selected=move || report_type.get() == ReportType::Technical>"Technical"</option>
                </select>
            </div>

            <button
                class="btn btn-primary btn-analyze"
                disabled=move || file.with(|f| f.is_none()) || loading.get()
                on:click={
                    let on_analyze = on_analyze.clone();
                    move |_| on_analyze(())
                }
            >
                {move || if loading.get() { "Analyzing..." } else { "Analyze Image" }}
            </button>

            <Show when=move || error.get().is_some()>
                <div class="error-box">{move || error.get().unwrap_or_default()}</div>
            </Show>
        </div>
    }
}
