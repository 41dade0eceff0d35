//! Find, list and create handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Response,
};
use serde_json::Value;

use beerhouse_core::beer::{parse_beer_id, Beer};
use beerhouse_core::storage::RepositoryError;

use super::response::{empty_response, json_response};
use crate::{handlers::ApiError, state::AppState};

const BEER_DOES_NOT_EXIST: &str = "beerID_does_not_exist";
const BEER_ALREADY_CREATED: &str = "error_beer_already_created";

/// Get a beer by id (GET /beers/{beer_id}).
pub async fn find_beer(
    State(state): State<AppState>,
    Path(beer_id): Path<String>,
) -> Result<Response, ApiError> {
    let id = parse_beer_id(&beer_id)?;

    let beer = state.beers.find(id).await?;
    if beer.is_zero_value() {
        return Err(ApiError::not_found(BEER_DOES_NOT_EXIST));
    }

    Ok(json_response(StatusCode::OK, &beer))
}

/// List all beers (GET /beers).
///
/// An empty catalog answers 202 with no body.
pub async fn list_beers(State(state): State<AppState>) -> Result<Response, ApiError> {
    let beers = state.beers.list().await?;
    if beers.is_empty() {
        return Ok(empty_response(StatusCode::ACCEPTED));
    }

    Ok(json_response(StatusCode::OK, &beers))
}

/// Create a beer (POST /beers).
///
/// The body is checked against the create schema before anything touches
/// the table.
pub async fn create_beer(State(state): State<AppState>, body: String) -> Result<Response, ApiError> {
    tracing::info!(request_body = %body, "creating beer");

    let payload: Value = serde_json::from_str(&body).map_err(ApiError::bad_request)?;
    state
        .validator
        .validate(&payload)
        .map_err(ApiError::bad_request)?;
    let beer: Beer = serde_json::from_value(payload).map_err(ApiError::bad_request)?;

    let existing = state.beers.find(beer.id).await?;
    if existing.id > 0 {
        tracing::warn!(beer_id = beer.id, "beer already created");
        return Err(ApiError::conflict(BEER_ALREADY_CREATED));
    }

    match state.beers.save(&beer).await {
        Ok(()) => {
            tracing::info!(beer_id = beer.id, "created beer");
            Ok(empty_response(StatusCode::CREATED))
        }
        // Lost a race with another create for the same id.
        Err(RepositoryError::AlreadyExists { .. }) => Err(ApiError::conflict(BEER_ALREADY_CREATED)),
        Err(e) => Err(ApiError::internal(e)),
    }
}
