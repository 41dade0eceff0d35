//! Exchange-rate lookup for the box-price endpoint.

use async_trait::async_trait;
use thiserror::Error;
use url::Url;

#[derive(Debug, Error)]
pub enum CurrencyError {
    #[error("invalid currency API url: {0}")]
    InvalidUrl(String),
    #[error("currency API request failed: {0}")]
    Request(String),
    #[error("could not read currency API response: {0}")]
    Body(String),
}

/// Converts an amount between currencies.
#[async_trait]
pub trait RateProvider: Send + Sync {
    /// Asks the provider to convert `amount` from `from` to `to` and returns
    /// the raw response body.
    async fn convert(&self, from: &str, to: &str, amount: f64) -> Result<String, CurrencyError>;
}

/// Client for the currencylayer `convert` API.
#[derive(Debug, Clone)]
pub struct CurrencyLayerClient {
    http: reqwest::Client,
    base_url: String,
    access_key: String,
}

impl CurrencyLayerClient {
    pub fn new(base_url: impl Into<String>, access_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            access_key: access_key.into(),
        }
    }

    /// Builds the request URL for a conversion.
    pub fn conversion_url(&self, from: &str, to: &str, amount: f64) -> Result<Url, CurrencyError> {
        Url::parse_with_params(
            &self.base_url,
            &[
                ("access_key", self.access_key.as_str()),
                ("from", from),
                ("to", to),
                ("amount", &amount.to_string()),
            ],
        )
        .map_err(|e| CurrencyError::InvalidUrl(e.to_string()))
    }
}

#[async_trait]
impl RateProvider for CurrencyLayerClient {
    async fn convert(&self, from: &str, to: &str, amount: f64) -> Result<String, CurrencyError> {
        let url = self.conversion_url(from, to, amount)?;

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| CurrencyError::Request(e.to_string()))?;

        response
            .text()
            .await
            .map_err(|e| CurrencyError::Body(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversion_url() {
        let client = CurrencyLayerClient::new("https://api.currencylayer.com/convert", "key123");
        let url = client.conversion_url("COP", "USD", 2400.0).unwrap();

        assert_eq!(
            url.as_str(),
            "https://api.currencylayer.com/convert?access_key=key123&from=COP&to=USD&amount=2400"
        );
    }

    #[test]
    fn test_conversion_url_keeps_fraction() {
        let client = CurrencyLayerClient::new("http://localhost:9000/convert", "");
        let url = client.conversion_url("USD", "EUR", 2.5).unwrap();

        assert!(url.as_str().ends_with("amount=2.5"));
    }

    #[test]
    fn test_conversion_url_invalid_base() {
        let client = CurrencyLayerClient::new("not a url", "key");

        assert!(matches!(
            client.conversion_url("COP", "USD", 1.0),
            Err(CurrencyError::InvalidUrl(_))
        ));
    }
}
