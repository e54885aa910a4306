//! Dashboard pages

mod analytics;
mod history;
mod scan;

pub use analytics::AnalyticsPage;
pub use history::HistoryPage;
pub use scan::ScanPage;
