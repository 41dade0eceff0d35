//! Parsing of handler inputs.
//!
//! Path and query parameters arrive as raw strings. These functions apply the
//! presence checks first and the numeric checks second, so a request missing
//! several parameters always reports the same error.

use super::error::RequestError;

/// Parses the `beerID` path parameter.
pub fn parse_beer_id(raw: &str) -> Result<i64, RequestError> {
    if raw.trim().is_empty() {
        return Err(RequestError::EmptyBeerId);
    }
    raw.parse().map_err(|_| RequestError::BeerIdNotANumber)
}

/// Validated inputs of the box-price endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoxPriceQuery {
    pub beer_id: i64,
    /// Target currency for the conversion.
    pub currency: String,
    pub quantity: i64,
}

impl BoxPriceQuery {
    /// Builds the query from the raw path and query-string values.
    pub fn parse(
        beer_id: &str,
        currency: Option<&str>,
        quantity: Option<&str>,
    ) -> Result<Self, RequestError> {
        let currency = currency.unwrap_or_default();
        let quantity = quantity.unwrap_or_default();

        if beer_id.trim().is_empty() {
            return Err(RequestError::EmptyBeerId);
        }
        if currency.trim().is_empty() {
            return Err(RequestError::EmptyCurrency);
        }
        if quantity.trim().is_empty() {
            return Err(RequestError::EmptyQuantity);
        }

        let beer_id = parse_beer_id(beer_id)?;
        let quantity = quantity
            .parse()
            .map_err(|_| RequestError::QuantityNotANumber)?;

        Ok(Self {
            beer_id,
            currency: currency.to_string(),
            quantity,
        })
    }
}
