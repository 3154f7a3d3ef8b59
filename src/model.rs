use chrono::{DateTime, Utc};
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};
use std::fmt;

/// One shortened link as the dashboard knows it.
///
/// Only `clicks` and `createdAt` are read by the aggregator. Every other field
/// is kept in `extra` so a record can be echoed back unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clicks: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl LinkRecord {
    pub fn new(clicks: i64, created_at: DateTime<Utc>) -> Self {
        Self {
            clicks: Some(clicks),
            created_at: Some(created_at),
            extra: Map::new(),
        }
    }

    pub fn with_clicks(clicks: i64) -> Self {
        Self {
            clicks: Some(clicks),
            ..Self::default()
        }
    }

    pub fn with_field(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.extra.insert(name.to_string(), value.into());
        self
    }

    pub fn effective_clicks(&self) -> i64 {
        self.clicks.unwrap_or(0)
    }

    pub fn effective_created_at(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        self.created_at.unwrap_or(now)
    }
}

/// Average clicks per link as a percentage, held in tenths of a percent.
///
/// Serialized as the number `0` when there are no links and as a string with
/// one decimal digit otherwise (`"7750.0"`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConversionRate {
    #[default]
    NoLinks,
    Tenths(i128),
}

impl fmt::Display for ConversionRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConversionRate::NoLinks => write!(f, "0"),
            ConversionRate::Tenths(tenths) => {
                let sign = if *tenths < 0 { "-" } else { "" };
                let magnitude = tenths.unsigned_abs();
                write!(f, "{sign}{}.{}", magnitude / 10, magnitude % 10)
            }
        }
    }
}

impl Serialize for ConversionRate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ConversionRate::NoLinks => serializer.serialize_u8(0),
            ConversionRate::Tenths(_) => serializer.collect_str(self),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSummary {
    pub total: usize,
    pub total_clicks: i64,
    pub avg_clicks: i64,
    pub recent_links: usize,
    pub popular_links: usize,
    #[serde(serialize_with = "serialize_top_performer")]
    pub top_performer: Option<LinkRecord>,
    pub conversion_rate: ConversionRate,
}

impl AnalyticsSummary {
    pub fn empty() -> Self {
        Self::default()
    }
}

// The dashboard reads fields off `topPerformer` directly, so an absent
// record is rendered as `{}` rather than `null`.
fn serialize_top_performer<S: Serializer>(
    top_performer: &Option<LinkRecord>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match top_performer {
        Some(record) => record.serialize(serializer),
        None => serializer.serialize_map(Some(0))?.end(),
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryRequest {
    #[serde(default)]
    pub links: Option<Vec<LinkRecord>>,
    #[serde(default)]
    pub now: Option<DateTime<Utc>>,
}
