//! Navigation component

use leptos::*;

use crate::app::Tab;
use crate::auth;

#[component]
pub fn Nav(active: RwSignal<Tab>) -> impl IntoView {
    let session = auth::use_session();

    view! {
        <nav class="bg-white shadow sticky top-0 z-50">
            <div class="container mx-auto px-4 max-w-5xl">
                <div class="flex justify-between h-16">
                    <div class="flex items-center">
                        <div>
                            <span class="text-xl font-bold text-gray-900">"PhishGuard"</span>
                            <p class="text-[10px] text-gray-500 uppercase tracking-widest">
                                "URL Threat Detection"
                            </p>
                        </div>
                        <div class="hidden md:flex ml-10 space-x-2">
                            {Tab::ALL
                                .into_iter()
                                .map(|tab| {
                                    view! {
                                        <button
                                            class=move || {
                                                if active.get() == tab {
                                                    "px-4 py-2 rounded-md text-sm font-medium bg-blue-100 text-blue-700"
                                                } else {
                                                    "px-4 py-2 rounded-md text-sm font-medium text-gray-600 hover:text-gray-900 hover:bg-gray-100"
                                                }
                                            }
                                            on:click=move |_| active.set(tab)
                                        >
                                            {tab.label()}
                                        </button>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                    <div class="flex items-center space-x-4">
                        <span class="hidden sm:flex items-center text-xs text-gray-500">
                            <span class="w-2 h-2 mr-2 rounded-full bg-green-500"></span>
                            "System Active"
                        </span>
                        <Show
                            when=move || session.is_authenticated()
                            fallback=|| view! { <span class="text-sm text-gray-400">"Guest"</span> }
                        >
                            <button
                                class="text-sm text-gray-600 hover:text-gray-900"
                                on:click=move |_| session.clear()
                            >
                                "Sign Out"
                            </button>
                        </Show>
                    </div>
                </div>
                // Tabs stay reachable on small screens.
                <div class="md:hidden flex space-x-2 pb-3">
                    {Tab::ALL
                        .into_iter()
                        .map(|tab| {
                            view! {
                                <button
                                    class=move || {
                                        if active.get() == tab {
                                            "flex-1 px-3 py-2 rounded-md text-sm font-medium bg-blue-100 text-blue-700"
                                        } else {
                                            "flex-1 px-3 py-2 rounded-md text-sm font-medium text-gray-600"
                                        }
                                    }
                                    on:click=move |_| active.set(tab)
                                >
                                    {tab.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </nav>
    }
}
