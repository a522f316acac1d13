//! Landing view: hero, analytics overview and feature blurbs.

use leptos::prelude::*;

use crate::app::Page;
use crate::components::analytics_card::AnalyticsCard;

#[component]
pub fn HomePage(set_page: WriteSignal<Page>) -> impl IntoView {
    view! {
        <div class="home-page">
            <section class="hero">
                <h1>"Ophthalmology AI"</h1>
                <p class="hero-subtitle">
                    "Clinical Decision Support System for Diabetic Retinopathy Detection"
                </p>
                <div class="hero-actions">
                    <button class="btn btn-primary" on:click=move |_| set_page.set(Page::Dashboard)>
                        "Start Analysis"
                    </button>
                    <button class="btn btn-secondary" on:click=move |_| set_page.set(Page::History)>
                        "View History"
                    </button>
                </div>
            </section>

            <AnalyticsCard />

            <section class="features">
                <div class="feature-card">
                    <h3>"Vision Model"</h3>
                    <p class="text-muted">"ConvNeXt-Tiny detecting 13 retinal conditions"</p>
                </div>
                <div class="feature-card">
                    <h3>"AI Reports"</h3>
                    <p class="text-muted">"Vision-language model generates clinical reports"</p>
                </div>
                <div class="feature-card">
                    <h3>"Local History"</h3>
                    <p class="text-muted">"Past analyses persisted in your browser"</p>
                </div>
            </section>
        </div>
    }
}
