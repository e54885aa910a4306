//! Aggregate analytics datasets
//!
//! The analytics view renders fixed aggregate data and never touches the
//! network; these are the datasets it draws from.

/// All-time scan totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub total: u64,
    pub safe: u64,
    pub phishing: u64,
}

/// One day of the weekly safe/phishing series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayActivity {
    pub day: &'static str,
    pub safe: u32,
    pub phishing: u32,
}

pub fn summary() -> Summary {
    Summary {
        total: 1247,
        safe: 982,
        phishing: 265,
    }
}

pub fn weekly_activity() -> Vec<DayActivity> {
    [
        ("Mon", 42, 8),
        ("Tue", 55, 12),
        ("Wed", 38, 15),
        ("Thu", 60, 9),
        ("Fri", 48, 11),
        ("Sat", 30, 6),
        ("Sun", 25, 4),
    ]
    .into_iter()
    .map(|(day, safe, phishing)| DayActivity { day, safe, phishing })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_is_consistent() {
        let s = summary();
        assert_eq!(s.safe + s.phishing, s.total);
    }

    #[test]
    fn test_weekly_series_covers_the_week() {
        let week = weekly_activity();
        assert_eq!(week.len(), 7);
        assert_eq!(week[0].day, "Mon");
        assert_eq!(week[6].day, "Sun");
        assert!(week.iter().all(|d| d.safe > 0));
    }
}
