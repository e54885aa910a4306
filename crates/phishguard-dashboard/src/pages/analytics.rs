//! Analytics overview page
//!
//! Pure rendering of the fixed aggregate datasets; this page never touches
//! the network.

use leptos::*;

use phishguard_core::analytics;

use crate::components::{ChartLegend, DistributionDonut, StatCard, WeeklyBars};

#[component]
pub fn AnalyticsPage() -> impl IntoView {
    let summary = analytics::summary();
    let weekly = analytics::weekly_activity();

    view! {
        <div class="space-y-6">
            <div class="grid grid-cols-1 sm:grid-cols-3 gap-4">
                <StatCard
                    label="Total Scanned"
                    value=summary.total.to_string()
                    accent="bg-blue-100 text-blue-600"
                />
                <StatCard
                    label="Safe URLs"
                    value=summary.safe.to_string()
                    accent="bg-green-100 text-green-600"
                />
                <StatCard
                    label="Phishing Detected"
                    value=summary.phishing.to_string()
                    accent="bg-red-100 text-red-600"
                />
            </div>

            <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                <div class="bg-white rounded-lg shadow p-6">
                    <h3 class="text-sm font-semibold mb-4">"Detection Distribution"</h3>
                    <DistributionDonut safe=summary.safe phishing=summary.phishing/>
                    <ChartLegend/>
                </div>
                <div class="bg-white rounded-lg shadow p-6">
                    <h3 class="text-sm font-semibold mb-4">"Weekly Activity"</h3>
                    <WeeklyBars data=weekly/>
                    <ChartLegend/>
                </div>
            </div>
        </div>
    }
}
