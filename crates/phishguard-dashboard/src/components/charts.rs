//! Inline SVG charts

use leptos::*;
use phishguard_core::analytics::DayActivity;

const SAFE_COLOR: &str = "#22c55e";
const PHISHING_COLOR: &str = "#ef4444";

/// Safe/phishing share of all scans as a donut.
#[component]
pub fn DistributionDonut(safe: u64, phishing: u64) -> impl IntoView {
    let total = safe + phishing;
    let radius = 70.0_f64;
    let circumference = std::f64::consts::TAU * radius;
    let safe_arc = circumference * safe as f64 / total.max(1) as f64;

    view! {
        <svg viewBox="0 0 200 200" class="w-56 h-56 mx-auto">
            <circle
                cx="100"
                cy="100"
                r="70"
                fill="none"
                stroke=PHISHING_COLOR
                stroke-width="26"
            ></circle>
            <circle
                cx="100"
                cy="100"
                r="70"
                fill="none"
                stroke=SAFE_COLOR
                stroke-width="26"
                stroke-dasharray=format!("{safe_arc:.2} {circumference:.2}")
                transform="rotate(-90 100 100)"
            ></circle>
            <text
                x="100"
                y="96"
                text-anchor="middle"
                font-size="26"
                font-weight="bold"
                fill="#111827"
            >
                {total.to_string()}
            </text>
            <text x="100" y="118" text-anchor="middle" font-size="12" fill="#6b7280">
                "scans"
            </text>
        </svg>
    }
}

/// Seven-day safe/phishing series as grouped bars.
#[component]
pub fn WeeklyBars(data: Vec<DayActivity>) -> impl IntoView {
    let ceiling = data
        .iter()
        .map(|d| d.safe.max(d.phishing))
        .max()
        .unwrap_or(1)
        .max(1) as f64;
    let baseline = 160.0_f64;
    let scale = 150.0 / ceiling;

    view! {
        <svg viewBox="0 0 336 190" class="w-full">
            {data
                .into_iter()
                .enumerate()
                .map(|(i, day)| {
                    let x = i as f64 * 48.0;
                    let safe_height = day.safe as f64 * scale;
                    let phishing_height = day.phishing as f64 * scale;
                    view! {
                        <g transform=format!("translate({x},0)")>
                            <rect
                                x="7"
                                y=format!("{:.1}", baseline - safe_height)
                                width="14"
                                height=format!("{safe_height:.1}")
                                rx="2"
                                fill=SAFE_COLOR
                            ></rect>
                            <rect
                                x="25"
                                y=format!("{:.1}", baseline - phishing_height)
                                width="14"
                                height=format!("{phishing_height:.1}")
                                rx="2"
                                fill=PHISHING_COLOR
                            ></rect>
                            <text x="23" y="180" text-anchor="middle" font-size="11" fill="#6b7280">
                                {day.day}
                            </text>
                        </g>
                    }
                })
                .collect_view()}
        </svg>
    }
}

/// Shared safe/phishing legend under each chart.
#[component]
pub fn ChartLegend() -> impl IntoView {
    view! {
        <div class="flex justify-center gap-6 mt-2 text-xs text-gray-500">
            <span class="flex items-center gap-2">
                <span class="w-3 h-3 rounded-full bg-green-500"></span>
                "Safe"
            </span>
            <span class="flex items-center gap-2">
                <span class="w-3 h-3 rounded-full bg-red-500"></span>
                "Phishing"
            </span>
        </div>
    }
}
