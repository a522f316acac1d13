//! Analytics overview: totals, average confidence and the per-level
//! severity distribution of the stored history.

use leptos::prelude::*;

use fundus_ai_common::SeverityLevel;

use crate::app::SharedHistory;

#[component]
pub fn AnalyticsCard() -> impl IntoView {
    let history = expect_context::<SharedHistory>();
    let stats = move || history.with(|h| h.get_stats());

    view! {
        <Show when=move || history.with(|h| !h.is_empty())>
            <div class="analytics-card">
                <h3>"Analytics Overview"</h3>

                <div class="analytics-summary">
                    <div class="summary-item">
                        <span class="summary-value">{move || stats().total}</span>
                        <span class="summary-label">"Total Analyses"</span>
                    </div>
                    <div class="summary-item">
                        <span class="summary-value">
                            {move || format!("{:.1}%", stats().average_confidence * 100.0)}
                        </span>
                        <span class="summary-label">"Avg Confidence"</span>
                    </div>
                    <div class="summary-item">
                        <span class="summary-value">
                            {move || stats().count(SeverityLevel::None)}
                        </span>
                        <span class="summary-label">"Healthy Cases"</span>
                    </div>
                </div>

                <div class="distribution">
                    <h4>"Severity Distribution"</h4>
                    {SeverityLevel::ALL
                        .iter()
                        .map(|level| {
                            let level = *level;
                            let row = move || {
                                let s = stats();
                                let count = s.count(level);
                                let percentage = if s.total > 0 {
                                    count as f64 / s.total as f64 * 100.0
                                } else {
                                    0.0
                                };
                                (count, percentage)
                            };
                            view! {
                                <div class="distribution-row">
                                    <span class="distribution-label">{level.label()}</span>
                                    <div class="distribution-track">
                                        <div
                                            class=format!("distribution-fill {}", level.css_class())
                                            style=move || format!("width: {}%;", row().1)
                                        />
                                    </div>
                                    <span class="distribution-count">{move || row().0}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </Show>
    }
}
