//! Simulated processing timeline.
//!
//! The stages and durations are fixed and illustrative; they are not
//! driven by real backend progress events. While an analysis is running
//! the quick early stages show as completed and the long VLM stage as
//! active.

use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    Pending,
    Active,
    Completed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelineStep {
    pub name: &'static str,
    pub duration_secs: u32,
    pub status: StepStatus,
}

/// The fixed stage sequence for the given processing state.
pub fn timeline_steps(processing: bool) -> Vec<TimelineStep> {
    let status = |active: StepStatus| if processing { active } else { StepStatus::Pending };
    vec![
        TimelineStep {
            name: "Image Loading",
            duration_secs: 2,
            status: status(StepStatus::Completed),
        },
        TimelineStep {
            name: "Vision Model Analysis",
            duration_secs: 4,
            status: status(StepStatus::Completed),
        },
        TimelineStep {
            name: "VLM Report Generation",
            duration_secs: 180,
            status: status(StepStatus::Active),
        },
        TimelineStep {
            name: "Knowledge Base Retrieval",
            duration_secs: 2,
            status: StepStatus::Pending,
        },
        TimelineStep {
            name: "Report Formatting",
            duration_secs: 3,
            status: StepStatus::Pending,
        },
    ]
}

pub fn total_duration_secs(steps: &[TimelineStep]) -> u32 {
    steps.iter().map(|step| step.duration_secs).sum()
}

#[component]
pub fn ProcessingTimeline(processing: ReadSignal<bool>) -> impl IntoView {
    view! {
        <Show when=move || processing.get()>
            {move || {
                let steps = timeline_steps(true);
                let total = total_duration_secs(&steps);
                view! {
                    <div class="processing-timeline">
                        <h3>"Processing Timeline"</h3>
                        <div class="timeline-steps">
                            {steps
                                .iter()
                                .map(|step| {
                                    let share = step.duration_secs * 100 / total;
                                    let status_class = match step.status {
                                        StepStatus::Completed => "completed",
                                        StepStatus::Active => "active",
                                        StepStatus::Pending => "pending",
                                    };
                                    view! {
                                        <div class=format!("timeline-step {}", status_class)>
                                            <span class="step-name">{step.name}</span>
                                            <span class="step-duration">
                                                {format!("{}s", step.duration_secs)}
                                            </span>
                                            <span class="step-share">{format!("{}%", share)}</span>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                        <div class="timeline-total">
                            <span>"Total Estimated Time"</span>
                            <span>{format!("{}m {}s", total / 60, total % 60)}</span>
                        </div>
                    </div>
                }
            }}
        </Show>
    }
}
