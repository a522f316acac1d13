//! Upload-and-analyze workspace.
//!
//! Owns the dashboard flow: file selection, the analyze call, validation
//! via the result contract, history insertion and result rendering. An
//! analysis failure clears any stale result and shows the backend's
//! message.

use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::File;

use fundus_ai_common::{AnalysisResult, ReportType};

use crate::api::ApiClient;
use crate::app::SharedHistory;
use crate::components::{
    clinical_report::ClinicalReport, condition_table::ConditionTable,
    export_buttons::ExportButtons, image_preview::ImagePreview,
    processing_timeline::ProcessingTimeline, severity_gauge::SeverityGauge,
    upload_panel::UploadPanel,
};

#[component]
pub fn DashboardPage() -> impl IntoView {
    let history = expect_context::<SharedHistory>();
    let client = ApiClient::new();

    // Files are JS handles, so the signal lives in local (single-thread) storage.
    let file = RwSignal::new_local(None::<File>);
    let (report_type, set_report_type) = signal(ReportType::Brief);
    let (loading, set_loading) = signal(false);
    let (result, set_result) = signal(None::<AnalysisResult>);
    let (error, set_error) = signal(None::<String>);

    let on_file_selected = move |selected: File| {
        file.set(Some(selected));
        set_error.set(None);
    };

    let on_analyze = move |_| {
        let Some(selected) = file.get_untracked() else {
            set_error.set(Some("Please select an image first".to_string()));
            return;
        };
        let client = client.clone();
        set_loading.set(true);
        set_error.set(None);
        set_result.set(None);

        spawn_local(async move {
            let filename = selected.name();
            match client
                .analyze_image(&selected, report_type.get_untracked(), None)
                .await
            {
                Ok(analysis) => {
                    history.update(|h| {
                        h.add_analysis(analysis.clone(), &filename);
                    });
                    set_result.set(Some(analysis));
                }
                Err(e) => {
                    set_error.set(Some(e.to_string()));
                    set_result.set(None);
                }
            }
            set_loading.set(false);
        });
    };

    view! {
        <div class="dashboard-page">
            <h1>"Analysis Dashboard"</h1>

            <div class="dashboard-grid">
                <div class="dashboard-side">
                    <UploadPanel
                        file=file
                        report_type=report_type
                        set_report_type=set_report_type
                        loading=loading
                        error=error
                        on_file_selected=on_file_selected
                        on_analyze=on_analyze
                    />
                    <ImagePreview file=file />
                </div>

                <div class="dashboard-main">
                    <ProcessingTimeline processing=loading />

                    {move || result.get().map(|r| view! {
                        <SeverityGauge severity=r.severity.clone() />
                        <ConditionTable conditions=r.conditions.clone() />
                        <ClinicalReport report=r.report.clone() />
                        <ExportButtons result=r.clone() />
                    })}

                    <Show when=move || !loading.get() && result.get().is_none()>
                        <div class="placeholder-card">
                            <p class="text-muted">"Upload and analyze an image to see results"</p>
                        </div>
                    </Show>
                </div>
            </div>
        </div>
    }
}
