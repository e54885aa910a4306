//! Scan history page

use std::cell::Cell;
use std::rc::Rc;

use leptos::*;

use phishguard_core::{fallback, format, HistoryEntry, Outcome};

use crate::api;
use crate::components::{FallbackNotice, UnavailableCard, VerdictBadge};
use crate::config;

#[component]
pub fn HistoryPage() -> impl IntoView {
    let client = api::use_client();
    // None until the single mount-time fetch settles.
    let (entries, set_entries) = create_signal(None::<Outcome<Vec<HistoryEntry>>>);

    // A fetch started here must never write into a destroyed view: switching
    // tabs mid-flight flips this flag instead of cancelling the request.
    let alive = Rc::new(Cell::new(true));
    on_cleanup({
        let alive = alive.clone();
        move || alive.set(false)
    });

    // Fetch once on mount.
    create_effect(move |_| {
        let alive = alive.clone();
        spawn_local(async move {
            let settled = match client.get_history().await {
                Ok(list) => Outcome::Backend(list),
                Err(err) if config::demo_fallback_enabled() => {
                    tracing::warn!("history fetch failed, serving demo data: {err}");
                    Outcome::Fallback(fallback::demo_history())
                }
                Err(err) => {
                    tracing::warn!("history fetch failed: {err}");
                    Outcome::Unavailable
                }
            };
            if !alive.get() {
                return;
            }
            set_entries.set(Some(settled));
        });
    });

    view! {
        <div class="space-y-3">
            {move || match entries.get() {
                None => {
                    view! {
                        <div class="bg-white rounded-lg shadow p-6">
                            <h2 class="text-xl font-semibold mb-4">"Scan History"</h2>
                            <p class="py-8 text-center text-gray-500">"Loading..."</p>
                        </div>
                    }
                        .into_view()
                }
                Some(Outcome::Unavailable) => view! { <UnavailableCard/> }.into_view(),
                Some(settled) => {
                    let simulated = settled.is_fallback();
                    let rows = settled.value().cloned().unwrap_or_default();
                    view! {
                        <Show when=move || simulated fallback=|| ()>
                            <FallbackNotice message="Backend unreachable. Showing demo history."/>
                        </Show>
                        <div class="bg-white rounded-lg shadow">
                            <div class="p-6 border-b">
                                <h2 class="text-xl font-semibold">"Scan History"</h2>
                            </div>
                            <HistoryTable entries=rows/>
                        </div>
                    }
                        .into_view()
                }
            }}
        </div>
    }
}

#[component]
fn HistoryTable(entries: Vec<HistoryEntry>) -> impl IntoView {
    view! {
        <div class="overflow-x-auto">
            <table class="min-w-full divide-y divide-gray-200">
                <thead>
                    <tr>
                        <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase">"URL"</th>
                        <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase">"Result"</th>
                        <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase">"Confidence"</th>
                        <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase">"Timestamp"</th>
                    </tr>
                </thead>
                <tbody class="bg-white divide-y divide-gray-200">
                    {entries
                        .into_iter()
                        .map(|entry| {
                            view! {
                                <tr class="hover:bg-gray-50">
                                    <td class="px-6 py-4 whitespace-nowrap font-mono text-xs text-gray-900">
                                        {entry.url.clone()}
                                    </td>
                                    <td class="px-6 py-4 whitespace-nowrap">
                                        <VerdictBadge verdict=entry.result/>
                                    </td>
                                    <td class="px-6 py-4 whitespace-nowrap font-mono text-xs text-gray-900">
                                        {format::confidence(entry.confidence)}"%"
                                    </td>
                                    <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-500">
                                        {format::timestamp(&entry.timestamp)}
                                    </td>
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
        </div>
    }
}
