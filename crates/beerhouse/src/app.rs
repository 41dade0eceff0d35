use std::time::Duration;

use axum::{http::StatusCode, routing::get, Router};
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::{
    handlers::{
        beers::{create_beer, find_beer, list_beers},
        box_price::box_price,
        health::health,
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState, timeout: Duration) -> Router {
    Router::new()
        .route("/beers", get(list_beers).post(create_beer))
        .route("/beers/{beer_id}", get(find_beer))
        .route("/beers/{beer_id}/boxprice", get(box_price))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            timeout,
        ))
        .with_state(state)
}
