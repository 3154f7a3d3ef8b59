use crate::analytics::{AnalyticsPolicy, DEFAULT_POPULARITY_THRESHOLD, DEFAULT_RECENCY_WINDOW_DAYS};
use std::env;
use std::str::FromStr;
use thiserror::Error;

const MAX_RECENCY_WINDOW_DAYS: u32 = 36_500;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Environment variable {0} is required")]
    Missing(&'static str),
    #[error("Environment variable {name} has invalid value {value:?}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub server_address: String,
    pub policy: AnalyticsPolicy,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let server_address =
            lookup("SERVER_ADDRESS").ok_or(ConfigError::Missing("SERVER_ADDRESS"))?;
        let recency_window_days: u32 =
            parse_or(&lookup, "RECENCY_WINDOW_DAYS", DEFAULT_RECENCY_WINDOW_DAYS)?;
        if recency_window_days > MAX_RECENCY_WINDOW_DAYS {
            return Err(ConfigError::Invalid {
                name: "RECENCY_WINDOW_DAYS",
                value: recency_window_days.to_string(),
            });
        }
        let popularity_threshold =
            parse_or(&lookup, "POPULARITY_THRESHOLD", DEFAULT_POPULARITY_THRESHOLD)?;

        Ok(Self {
            server_address,
            policy: AnalyticsPolicy::new(recency_window_days, popularity_threshold),
        })
    }
}

fn parse_or<F, T>(lookup: &F, name: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(name) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
    }
}
