//! Export buttons: JSON / CSV / TXT downloads for the current result.

use chrono::Local;
use gloo::console;
use leptos::prelude::*;

use fundus_ai_common::{export, AnalysisResult};

use crate::download::download_text;

#[component]
pub fn ExportButtons(result: AnalysisResult) -> impl IntoView {
    let result = StoredValue::new(result);

    let trigger = move |content: &str, mime: &str, filename: &str| {
        if let Err(e) = download_text(content, mime, filename) {
            console::error!(format!("download failed: {:?}", e));
        }
    };

    let on_export_json = move |_| {
        result.with_value(|r| match export::to_json(r) {
            Ok(json) => trigger(&json, "application/json", export::JSON_FILENAME),
            Err(e) => console::error!(format!("JSON export failed: {}", e)),
        });
    };

    let on_export_csv = move |_| {
        result.with_value(|r| trigger(&export::to_csv(r), "text/csv", export::CSV_FILENAME));
    };

    let on_export_txt = move |_| {
        let generated_at = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
        result.with_value(|r| {
            trigger(
                &export::to_text(r, &generated_at),
                "text/plain",
                export::TXT_FILENAME,
            )
        });
    };

    view! {
        <div class="export-buttons">
            <h3>"Export Options"</h3>
            <div class="export-grid">
                <button class="btn btn-secondary" on:click=on_export_json>"JSON"</button>
                <button class="btn btn-secondary" on:click=on_export_csv>"CSV"</button>
                <button class="btn btn-secondary" on:click=on_export_txt>"TXT"</button>
            </div>
        </div>
    }
}
