use std::{env, time::Duration};

use thiserror::Error;

use crate::storage::dynamodb::schema::ACTIVE_INDEX;

/// Errors raised while reading configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("variable {0} is not defined")]
    MissingVar(&'static str),
    #[error("variable {name} has an invalid value: {value}")]
    InvalidValue { name: &'static str, value: String },
}

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Currency conversion endpoint (default: currencylayer `convert`)
    pub currency_api_url: String,
    /// Access key for the currency API (default: empty)
    pub currency_access_key: String,
    /// Per-request timeout in seconds (default: 10)
    pub request_timeout_seconds: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `CURRENCY_API_URL` - Currency conversion endpoint
    /// - `CURRENCY_ACCESS_KEY` - Currency API access key
    /// - `REQUEST_TIMEOUT_SECONDS` - Request timeout in seconds (default: 10)
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            currency_api_url: lookup("CURRENCY_API_URL")
                .unwrap_or_else(|| "https://api.currencylayer.com/convert".to_string()),
            currency_access_key: lookup("CURRENCY_ACCESS_KEY").unwrap_or_default(),
            request_timeout_seconds: lookup("REQUEST_TIMEOUT_SECONDS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
        }
    }

    /// Get the request timeout as a Duration.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}

/// DynamoDB connection and table settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DynamoDbConfig {
    pub table_name: String,
    pub index_name: String,
    /// Custom endpoint URL (for local DynamoDB).
    pub endpoint_url: Option<String>,
    pub region: String,
    /// Query `Limit` for index pages; unset lets DynamoDB decide.
    pub page_size: Option<i32>,
}

impl DynamoDbConfig {
    /// Load DynamoDB settings from environment variables.
    ///
    /// Environment variables:
    /// - `DYNAMODB_BEERS` - Table name (required)
    /// - `BEERS_ACTIVE_INDEX` - Index over `active` (default: "by_active")
    /// - `DYNAMODB_ENDPOINT` - Endpoint override, e.g. `http://localhost:8000`
    /// - `AWS_REGION` - Region (default: "us-east-1")
    /// - `BEERS_PAGE_SIZE` - Items per index page
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let table_name = lookup("DYNAMODB_BEERS")
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::MissingVar("DYNAMODB_BEERS"))?;

        let page_size = match lookup("BEERS_PAGE_SIZE") {
            None => None,
            Some(value) => match value.parse::<i32>() {
                Ok(size) if size > 0 => Some(size),
                _ => {
                    return Err(ConfigError::InvalidValue {
                        name: "BEERS_PAGE_SIZE",
                        value,
                    })
                }
            },
        };

        Ok(Self {
            table_name,
            index_name: lookup("BEERS_ACTIVE_INDEX").unwrap_or_else(|| ACTIVE_INDEX.to_string()),
            endpoint_url: lookup("DYNAMODB_ENDPOINT"),
            region: lookup("AWS_REGION").unwrap_or_else(|| "us-east-1".to_string()),
            page_size,
        })
    }

    /// Returns a display string for the target environment.
    pub fn target_display(&self) -> String {
        match &self.endpoint_url {
            Some(url) => format!("Local DynamoDB ({})", url),
            None => format!("AWS DynamoDB (region: {})", self.region),
        }
    }
}
