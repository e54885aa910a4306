//! URL scanner page

use std::cell::Cell;
use std::rc::Rc;

use leptos::*;

use phishguard_core::{fallback, format, normalize_url, Outcome, Prediction};

use crate::api;
use crate::components::{FallbackNotice, UnavailableCard};
use crate::config;

#[component]
pub fn ScanPage() -> impl IntoView {
    let client = api::use_client();
    let (url, set_url) = create_signal(String::new());
    let (scanning, set_scanning) = create_signal(false);
    let (checked_url, set_checked_url) = create_signal(String::new());
    let (outcome, set_outcome) = create_signal(None::<Outcome<Prediction>>);

    // Discard results that settle after this page has been unmounted.
    let alive = Rc::new(Cell::new(true));
    on_cleanup({
        let alive = alive.clone();
        move || alive.set(false)
    });

    let submit = {
        let alive = alive.clone();
        move || {
            // No-op on empty input or while a scan is already in flight.
            let Some(target) = normalize_url(&url.get_untracked()) else {
                return;
            };
            if scanning.get_untracked() {
                return;
            }
            set_scanning.set(true);

            let alive = alive.clone();
            spawn_local(async move {
                let settled = match client.predict_url(&target).await {
                    Ok(prediction) => Outcome::Backend(prediction.clamped()),
                    Err(err) if config::demo_fallback_enabled() => {
                        tracing::warn!("predict failed, serving simulated result: {err}");
                        Outcome::Fallback(fallback::simulated_prediction())
                    }
                    Err(err) => {
                        tracing::warn!("predict failed: {err}");
                        Outcome::Unavailable
                    }
                };
                if !alive.get() {
                    return;
                }
                set_checked_url.set(target);
                set_outcome.set(Some(settled));
                set_scanning.set(false);
            });
        }
    };
    let submit_on_enter = submit.clone();

    view! {
        <div class="space-y-6">
            <div class="bg-white rounded-lg shadow p-6">
                <h2 class="text-xl font-semibold mb-4">"Scan URL"</h2>
                <div class="flex flex-col sm:flex-row gap-3">
                    <input
                        type="text"
                        placeholder="Enter URL to analyze..."
                        class="flex-1 px-4 py-3 border rounded-lg font-mono text-sm focus:outline-none focus:ring-2 focus:ring-blue-500"
                        prop:value=move || url.get()
                        on:input=move |ev| set_url.set(event_target_value(&ev))
                        on:keydown=move |ev| {
                            if ev.key() == "Enter" {
                                submit_on_enter();
                            }
                        }
                    />
                    <button
                        class="bg-blue-600 text-white px-6 py-3 rounded-lg font-semibold hover:bg-blue-700 disabled:opacity-40 disabled:cursor-not-allowed"
                        disabled=move || scanning.get() || normalize_url(&url.get()).is_none()
                        on:click=move |_| submit()
                    >
                        {move || if scanning.get() { "Scanning..." } else { "Check URL" }}
                    </button>
                </div>
            </div>

            {move || {
                outcome
                    .get()
                    .map(|settled| view! { <ScanResult outcome=settled url=checked_url.get()/> })
            }}
        </div>
    }
}

#[component]
fn ScanResult(outcome: Outcome<Prediction>, url: String) -> impl IntoView {
    let (prediction, simulated) = match outcome {
        Outcome::Backend(p) => (p, false),
        Outcome::Fallback(p) => (p, true),
        Outcome::Unavailable => return view! { <UnavailableCard/> }.into_view(),
    };

    let safe = prediction.result.is_safe();
    let border = if safe { "border-green-300" } else { "border-red-300" };
    let tone = if safe { "text-green-600" } else { "text-red-600" };

    view! {
        <div class="space-y-3">
            <Show when=move || simulated fallback=|| ()>
                <FallbackNotice message="Backend unreachable. This is a simulated demo result."/>
            </Show>
            <div class=format!("bg-white rounded-lg shadow border p-6 {}", border)>
                <div class="flex items-center justify-between gap-4">
                    <div class="min-w-0">
                        <p class="text-sm text-gray-500 font-mono truncate">{url}</p>
                        <p class=format!("text-2xl font-bold {}", tone)>
                            {prediction.result.to_string()}
                        </p>
                    </div>
                    <div class="text-right">
                        <p class="text-xs text-gray-500 uppercase tracking-wider">"Confidence"</p>
                        <p class=format!("text-3xl font-bold font-mono {}", tone)>
                            {format::confidence(prediction.confidence)}"%"
                        </p>
                    </div>
                </div>
            </div>
        </div>
    }
    .into_view()
}
