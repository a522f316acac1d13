//! Application shell: shared history state and view switching.

use leptos::prelude::*;

use fundus_ai_common::HistoryStore;

use crate::components::navbar::Navbar;
use crate::pages::{dashboard::DashboardPage, history::HistoryPage, home::HomePage};
use crate::storage::LocalStorageAdapter;

/// The persisted history store, shared through context.
pub type SharedHistory = RwSignal<HistoryStore<LocalStorageAdapter>>;

/// The three views of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Dashboard,
    History,
}

#[component]
pub fn App() -> impl IntoView {
    let history: SharedHistory = RwSignal::new(HistoryStore::new(LocalStorageAdapter));
    provide_context(history);

    let (page, set_page) = signal(Page::Home);

    view! {
        <div class="app">
            <Navbar page=page set_page=set_page />
            <main class="container">
                {move || match page.get() {
                    Page::Home => view! { <HomePage set_page=set_page /> }.into_any(),
                    Page::Dashboard => view! { <DashboardPage /> }.into_any(),
                    Page::History => view! { <HistoryPage /> }.into_any(),
                }}
            </main>
        </div>
    }
}
