pub mod aggregate;
pub mod config;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;

use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};

use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/benefits", get(routes::benefits::year_report))
        .route("/benefits/by-year", get(routes::benefits::by_year))
        .route(
            "/benefits/by-year-asc-to-desc",
            get(routes::benefits::by_year_ascending),
        )
        .route(
            "/benefits/total-amount-per-year",
            get(routes::benefits::total_amount_per_year),
        )
        .route(
            "/benefits/count-per-year",
            get(routes::benefits::count_per_year),
        )
        .route(
            "/benefits/filter-by-amount-range",
            get(routes::benefits::filter_by_amount_range),
        )
        .route("/benefits/with-cards", get(routes::benefits::with_cards))
        .layer(CorsLayer::new().allow_origin(Any).allow_headers(Any))
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}
