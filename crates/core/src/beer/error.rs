use thiserror::Error;

/// Errors produced while reading handler inputs (path and query parameters).
///
/// The display strings are the stable error codes returned to API clients.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RequestError {
    #[error("beerID_can_not_be_empty")]
    EmptyBeerId,
    #[error("beerID_is_not_a_number")]
    BeerIdNotANumber,
    #[error("currency_can_not_be_empty")]
    EmptyCurrency,
    #[error("quantity_can_not_be_empty")]
    EmptyQuantity,
    #[error("quantity_is_not_a_number")]
    QuantityNotANumber,
}
