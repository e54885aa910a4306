//! Main application component

use leptos::*;

use crate::api::ApiClient;
use crate::auth;
use crate::components::Nav;
use crate::pages::{AnalyticsPage, HistoryPage, ScanPage};

/// The three dashboard views; exactly one is mounted at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Scan,
    History,
    Analytics,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Scan, Tab::History, Tab::Analytics];

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Scan => "URL Scanner",
            Tab::History => "History",
            Tab::Analytics => "Analytics",
        }
    }
}

#[component]
pub fn App() -> impl IntoView {
    let session = auth::provide_session();
    provide_context(ApiClient::new(session));

    let active = create_rw_signal(Tab::Scan);

    view! {
        <div class="min-h-screen bg-gray-100">
            <Nav active=active/>
            <main class="container mx-auto px-4 py-8 max-w-5xl">
                {move || match active.get() {
                    Tab::Scan => view! { <ScanPage/> }.into_view(),
                    Tab::History => view! { <HistoryPage/> }.into_view(),
                    Tab::Analytics => view! { <AnalyticsPage/> }.into_view(),
                }}
            </main>
        </div>
    }
}
