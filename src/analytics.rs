use crate::model::{AnalyticsSummary, ConversionRate, LinkRecord};
use chrono::{DateTime, Duration, Utc};

pub const DEFAULT_RECENCY_WINDOW_DAYS: u32 = 7;
pub const DEFAULT_POPULARITY_THRESHOLD: i64 = 100;

/// Thresholds used to classify links as recent or popular.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalyticsPolicy {
    pub recency_window: Duration,
    pub popularity_threshold: i64,
}

impl Default for AnalyticsPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_RECENCY_WINDOW_DAYS, DEFAULT_POPULARITY_THRESHOLD)
    }
}

impl AnalyticsPolicy {
    pub fn new(recency_window_days: u32, popularity_threshold: i64) -> Self {
        Self {
            recency_window: Duration::days(i64::from(recency_window_days)),
            popularity_threshold,
        }
    }

    /// A link without `createdAt` counts as created at `now`. The window
    /// boundary is inclusive.
    pub fn is_recent(&self, link: &LinkRecord, now: DateTime<Utc>) -> bool {
        now - link.effective_created_at(now) <= self.recency_window
    }

    pub fn is_popular(&self, link: &LinkRecord) -> bool {
        link.effective_clicks() > self.popularity_threshold
    }
}

pub fn summarize(links: &[LinkRecord], now: DateTime<Utc>) -> AnalyticsSummary {
    summarize_with(&AnalyticsPolicy::default(), links, now)
}

pub fn summarize_with(
    policy: &AnalyticsPolicy,
    links: &[LinkRecord],
    now: DateTime<Utc>,
) -> AnalyticsSummary {
    if links.is_empty() {
        return AnalyticsSummary::empty();
    }

    let total = links.len();
    let total_clicks = links
        .iter()
        .map(LinkRecord::effective_clicks)
        .fold(0i64, i64::saturating_add);

    AnalyticsSummary {
        total,
        total_clicks,
        avg_clicks: round_half_up_div(i128::from(total_clicks), total as i128) as i64,
        recent_links: links.iter().filter(|link| policy.is_recent(link, now)).count(),
        popular_links: links.iter().filter(|link| policy.is_popular(link)).count(),
        top_performer: top_performer(links).cloned(),
        conversion_rate: ConversionRate::Tenths(round_half_up_div(
            i128::from(total_clicks) * 1000,
            total as i128,
        )),
    }
}

/// First record holding the highest click count.
pub fn top_performer(links: &[LinkRecord]) -> Option<&LinkRecord> {
    links.iter().fold(None, |best: Option<&LinkRecord>, link| match best {
        Some(current) if link.effective_clicks() <= current.effective_clicks() => Some(current),
        _ => Some(link),
    })
}

// floor(n / d + 1/2) for d > 0, so halves round towards positive infinity.
// Shared by the average and the conversion rate.
fn round_half_up_div(numerator: i128, denominator: i128) -> i128 {
    (2 * numerator + denominator).div_euclid(2 * denominator)
}
