pub mod analytics;
pub mod config;
pub mod error;
pub mod model;
pub mod routes;

pub use analytics::{summarize, summarize_with, AnalyticsPolicy};
pub use model::{AnalyticsSummary, ConversionRate, LinkRecord};
