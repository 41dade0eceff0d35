//! Box price handler.
//!
//! Looks up the beer and asks the rate provider to convert its unit price
//! into the requested currency. The box total itself is not computed yet:
//! the provider response is logged and the request answers 200 with no body.

use std::collections::HashMap;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Response,
};

use beerhouse_core::beer::BoxPriceQuery;

use super::response::empty_response;
use crate::{currency::CurrencyError, handlers::ApiError, state::AppState};

/// Price of a box of beers in another currency
/// (GET /beers/{beer_id}/boxprice?currency=XXX&quantity=N).
pub async fn box_price(
    State(state): State<AppState>,
    Path(beer_id): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Response, ApiError> {
    let query = BoxPriceQuery::parse(
        &beer_id,
        params.get("currency").map(String::as_str),
        params.get("quantity").map(String::as_str),
    )?;

    let beer = state.beers.find(query.beer_id).await?;
    if beer.is_zero_value() {
        return Err(ApiError::not_found("beerID_does_not_exist"));
    }

    let response_body = state
        .rates
        .convert(&beer.currency, &query.currency, beer.price)
        .await
        .map_err(|e| match e {
            CurrencyError::InvalidUrl(_) => ApiError::internal(e),
            CurrencyError::Request(_) | CurrencyError::Body(_) => ApiError::bad_request(e),
        })?;

    tracing::info!(
        beer_id = beer.id,
        from = %beer.currency,
        to = %query.currency,
        quantity = query.quantity,
        response_body = %response_body,
        "response from currency api"
    );

    // TODO: parse the converted unit price from the provider response and
    // return `price_total` for `query.quantity` beers.
    Ok(empty_response(StatusCode::OK))
}
