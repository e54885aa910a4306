//! Stat card component

use leptos::*;

#[component]
pub fn StatCard(
    label: &'static str,
    value: String,
    accent: &'static str,
) -> impl IntoView {
    view! {
        <div class="bg-white rounded-lg shadow p-5 flex items-center gap-4">
            <div class=format!("w-12 h-12 rounded-lg flex items-center justify-center text-lg font-bold {}", accent)>
                {label.chars().next().unwrap_or('#').to_string()}
            </div>
            <div>
                <p class="text-xs text-gray-500 uppercase tracking-wider">{label}</p>
                <p class="text-2xl font-bold text-gray-900 font-mono">{value}</p>
            </div>
        </div>
    }
}
