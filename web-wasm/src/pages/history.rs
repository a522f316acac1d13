//! History browser: search by filename, filter by severity level,
//! per-record delete and clear-all.

use chrono::DateTime;
use leptos::prelude::*;

use fundus_ai_common::{AnalysisRecord, SeverityLevel};

use crate::app::SharedHistory;

/// Detected-condition chips shown per record before folding into "+n more".
const MAX_CHIPS: usize = 5;

fn display_date(timestamp: &str) -> String {
    DateTime::parse_from_rfc3339(timestamp)
        .map(|dt| dt.format("%b %e, %Y %H:%M").to_string())
        .unwrap_or_else(|_| timestamp.to_string())
}

#[component]
pub fn HistoryPage() -> impl IntoView {
    let history = expect_context::<SharedHistory>();
    let (search, set_search) = signal(String::new());
    let (filter_level, set_filter_level) = signal(None::<SeverityLevel>);

    let filtered = move || {
        let needle = search.get().to_lowercase();
        let level = filter_level.get();
        history.with(|h| {
            h.records()
                .iter()
                .filter(|record| {
                    record.filename.to_lowercase().contains(&needle)
                        && level.map_or(true, |l| record.result.severity.level == l)
                })
                .cloned()
                .collect::<Vec<_>>()
        })
    };

    let total = move || history.with(|h| h.len());

    view! {
        <div class="history-page">
            <div class="history-header">
                <h1>"Analysis History"</h1>
                <button
                    class="btn btn-danger"
                    disabled=move || total() == 0
                    on:click=move |_| history.update(|h| h.clear_history())
                >
                    "Clear All"
                </button>
            </div>

            <div class="history-filters">
                <input
                    type="text"
                    class="history-search"
                    placeholder="Search by filename..."
                    prop:value=move || search.get()
                    on:input=move |ev| set_search.set(event_target_value(&ev))
                />
                <select on:change=move |ev| {
                    let value = event_target_value(&ev);
                    set_filter_level.set(
                        value
                            .parse::<u8>()
                            .ok()
                            .and_then(|level| SeverityLevel::try_from(level).ok()),
                    );
                }>
                    <option value="all">"All Levels"</option>
                    {SeverityLevel::ALL
                        .iter()
                        .map(|level| {
                            view! {
                                <option value=u8::from(*level).to_string()>{level.label()}</option>
                            }
                        })
                        .collect_view()}
                </select>
            </div>

            <Show
                when=move || !filtered().is_empty()
                fallback=|| view! {
                    <div class="placeholder-card">
                        <p class="text-muted">"No analysis history found"</p>
                        <p class="text-muted">"Analyze some images to see them here"</p>
                    </div>
                }
            >
                <div class="history-list">
                    <For
                        each=filtered
                        key=|record| record.id.clone()
                        children=move |record: AnalysisRecord| {
                            let id = record.id.clone();
                            view! {
                                <HistoryCard
                                    record=record
                                    on_delete=move |_| {
                                        history.update(|h| h.delete_analysis(&id));
                                    }
                                />
                            }
                        }
                    />
                </div>
            </Show>

            <Show when=move || (total() > 0)>
                <p class="text-muted history-footer">
                    {move || format!("Showing {} of {} total analyses", filtered().len(), total())}
                </p>
            </Show>
        </div>
    }
}

#[component]
fn HistoryCard<FD>(record: AnalysisRecord, on_delete: FD) -> impl IntoView
where
    FD: Fn(()) + 'static,
{
    let level = record.result.severity.level;
    let detected: Vec<String> = record
        .result
        .conditions
        .iter()
        .filter(|c| c.detected)
        .map(|c| c.name.clone())
        .collect();
    let overflow = detected.len().saturating_sub(MAX_CHIPS);

    view! {
        <div class="history-card">
            <div class="history-card-body">
                <div class="history-card-title">
                    <h3>{record.filename.clone()}</h3>
                    <span class=format!("severity-badge {}", level.css_class())>
                        {record.result.severity.name.clone()}
                    </span>
                </div>

                <div class="history-card-meta">
                    <span>"Date: " {display_date(&record.timestamp)}</span>
                    <span>
                        "Confidence: "
                        {format!("{:.1}%", record.result.severity.confidence * 100.0)}
                    </span>
                    <span>{format!("Conditions: {} detected", detected.len())}</span>
                </div>

                <div class="history-card-chips">
                    {detected
                        .iter()
                        .take(MAX_CHIPS)
                        .map(|name| view! { <span class="condition-chip">{name.clone()}</span> })
                        .collect_view()}
                    <Show when=move || (overflow > 0)>
                        <span class="condition-chip more">{format!("+{} more", overflow)}</span>
                    </Show>
                </div>
            </div>

            <button class="btn btn-small btn-danger" on:click=move |_| on_delete(())>
                "Delete"
            </button>
        </div>
    }
}
