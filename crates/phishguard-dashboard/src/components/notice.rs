//! Fallback and outage notices

use leptos::*;

/// Banner rendered above client-synthesized data.
#[component]
pub fn FallbackNotice(message: &'static str) -> impl IntoView {
    view! {
        <div class="bg-yellow-50 border border-yellow-200 text-yellow-800 text-sm rounded-lg px-4 py-3">
            {message}
        </div>
    }
}

/// Card shown when the backend failed and demo fallback is disabled.
#[component]
pub fn UnavailableCard() -> impl IntoView {
    view! {
        <div class="bg-red-50 border border-red-200 rounded-lg p-6">
            <p class="font-semibold text-red-800">"Backend unavailable"</p>
            <p class="text-sm text-red-700 mt-1">
                "The prediction service could not be reached. Try again once it is back online."
            </p>
        </div>
    }
}
