//! Verdict badge component

use leptos::*;
use phishguard_core::Verdict;

#[component]
pub fn VerdictBadge(verdict: Verdict) -> impl IntoView {
    let (bg, text) = if verdict.is_safe() {
        ("bg-green-100", "text-green-800")
    } else {
        ("bg-red-100", "text-red-800")
    };

    view! {
        <span class=format!("px-2.5 py-1 text-xs font-semibold rounded-full {} {}", bg, text)>
            {verdict.to_string()}
        </span>
    }
}
