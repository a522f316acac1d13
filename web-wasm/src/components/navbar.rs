//! Top navigation bar with a backend status indicator.

use gloo::console;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::ApiClient;
use crate::app::Page;

#[component]
pub fn Navbar(page: ReadSignal<Page>, set_page: WriteSignal<Page>) -> impl IntoView {
    // One health probe at startup; the dot reflects pipeline readiness.
    let (backend_ready, set_backend_ready) = signal(None::<bool>);
    spawn_local(async move {
        match ApiClient::new().health_check().await {
            Ok(status) => set_backend_ready.set(Some(status.pipeline_ready)),
            Err(e) => {
                console::warn!(e.to_string());
                set_backend_ready.set(Some(false));
            }
        }
    });

    let nav_link = move |target: Page, label: &'static str| {
        view! {
            <button
                class="nav-link"
                class:active=move || page.get() == target
                on:click=move |_| set_page.set(target)
            >
                {label}
            </button>
        }
    };

    view! {
        <nav class="navbar">
            <div class="navbar-brand" on:click=move |_| set_page.set(Page::Home)>
                <span class="brand-name">"Ophthalmology AI"</span>
                <span
                    class="backend-status"
                    class:ready=move || backend_ready.get() == Some(true)
                    class:offline=move || backend_ready.get() == Some(false)
                >
                    {move || match backend_ready.get() {
                        None => "checking backend...",
                        Some(true) => "backend ready",
                        Some(false) => "backend offline",
                    }}
                </span>
            </div>
            <div class="navbar-links">
                {nav_link(Page::Home, "Home")}
                {nav_link(Page::Dashboard, "Dashboard")}
                {nav_link(Page::History, "History")}
            </div>
        </nav>
    }
}
