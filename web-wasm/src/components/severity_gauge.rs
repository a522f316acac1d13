//! Severity gauge: level 0..=4 with an animated fill.

use gloo::timers::callback::Timeout;
use leptos::prelude::*;

use fundus_ai_common::{SeverityLevel, SeverityResult};

#[component]
pub fn SeverityGauge(severity: SeverityResult) -> impl IntoView {
    // The fill starts at zero and is set shortly after mount so the CSS
    // transition animates; the component remounts on a new result, which
    // re-triggers the animation.
    let (progress, set_progress) = signal(0.0);
    let fill = severity.level.fill_fraction() * 100.0;
    Timeout::new(100, move || set_progress.set(fill)).forget();

    let level = severity.level;
    let confidence_pct = severity.confidence * 100.0;

    view! {
        <div class="severity-gauge">
            <h3>"Severity Assessment"</h3>

            <div class="gauge-body">
                <div class="gauge-track">
                    <div
                        class=format!("gauge-fill {}", level.css_class())
                        style=move || format!("width: {}%;", progress.get())
                    />
                </div>
                <div class="gauge-summary">
                    <h4 class=level.css_class()>{severity.name.clone()}</h4>
                    <p class="text-muted">{format!("Level {} of 4", u8::from(level))}</p>
                    <div class="confidence-row">
                        <div class="confidence-track">
                            <div
                                class=format!("confidence-fill {}", level.css_class())
                                style=format!("width: {}%;", confidence_pct)
                            />
                        </div>
                        <span>{format!("{:.1}%", confidence_pct)}</span>
                    </div>
                    <p class="text-muted">"Confidence Score"</p>
                </div>
            </div>

            <div class="level-strip">
                {SeverityLevel::ALL
                    .iter()
                    .map(|step| {
                        let step = *step;
                        view! {
                            <div class="level-step" class:current=move || step == level>
                                <span class="level-number">{u8::from(step)}</span>
                                <span class="level-label">{step.label()}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
