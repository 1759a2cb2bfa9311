use std::collections::BTreeMap;

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use serde_json::{json, Map, Value};

use crate::{
    aggregate,
    models::{Benefit, Card, RangeFilter},
    services::upstream::{self, UpstreamError},
    state::AppState,
};

type ApiError = (StatusCode, Json<Value>);

enum KeyOrder {
    Ascending,
    Descending,
}

async fn fetch_benefits(state: &AppState) -> Result<Vec<Benefit>, UpstreamError> {
    upstream::fetch_collection(&state.client, &state.sources.benefits_url).await
}

async fn fetch_filters(state: &AppState) -> Result<Vec<RangeFilter>, UpstreamError> {
    upstream::fetch_collection(&state.client, &state.sources.filters_url).await
}

async fn fetch_cards(state: &AppState) -> Result<Vec<Card>, UpstreamError> {
    upstream::fetch_collection(&state.client, &state.sources.cards_url).await
}

fn failure_message(err: &UpstreamError) -> String {
    match err {
        UpstreamError::Status { .. } => "error al obtener datos de las APIs".to_string(),
        other => format!("Error {other}"),
    }
}

fn fetch_failure(err: UpstreamError) -> ApiError {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "success": false, "message": failure_message(&err) })),
    )
}

fn unexpected(detail: impl std::fmt::Display) -> ApiError {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "success": false, "message": format!("Error {detail}") })),
    )
}

fn success(data: Value) -> Json<Value> {
    Json(json!({ "success": true, "data": data }))
}

fn to_value<T: Serialize>(value: T) -> Result<Value, ApiError> {
    serde_json::to_value(value).map_err(unexpected)
}

/// Serialize a year-keyed mapping as a JSON object whose keys appear in the
/// requested order. Relies on serde_json's `preserve_order` feature.
fn year_keyed<V: Serialize>(
    groups: BTreeMap<String, V>,
    order: KeyOrder,
) -> Result<Value, ApiError> {
    let mut data = Map::new();
    let entries: Vec<(String, V)> = match order {
        KeyOrder::Ascending => groups.into_iter().collect(),
        KeyOrder::Descending => groups.into_iter().rev().collect(),
    };
    for (year, value) in entries {
        data.insert(year, to_value(value)?);
    }
    Ok(Value::Object(data))
}

/// `GET /benefits/by-year` — benefits grouped by year, newest year first.
pub async fn by_year(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    // all three documents must be reachable for this view even though only
    // benefits feed it
    let (benefits, _filters, _cards) =
        tokio::try_join!(fetch_benefits(&state), fetch_filters(&state), fetch_cards(&state))
            .map_err(fetch_failure)?;

    let groups = aggregate::group_by_year(&benefits);
    Ok(success(year_keyed(groups, KeyOrder::Descending)?))
}

/// `GET /benefits/by-year-asc-to-desc` — same grouping, oldest year first.
pub async fn by_year_ascending(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let benefits = fetch_benefits(&state).await.map_err(fetch_failure)?;
    let groups = aggregate::group_by_year(&benefits);
    Ok(success(year_keyed(groups, KeyOrder::Ascending)?))
}

/// `GET /benefits/total-amount-per-year`
pub async fn total_amount_per_year(
    State(state): State<AppState>,
) -> Result<Json<Value>, ApiError> {
    let benefits = fetch_benefits(&state).await.map_err(fetch_failure)?;
    let totals = aggregate::sum_amount_by_year(&benefits);
    Ok(success(year_keyed(totals, KeyOrder::Descending)?))
}

/// `GET /benefits/count-per-year`
pub async fn count_per_year(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let benefits = fetch_benefits(&state).await.map_err(fetch_failure)?;
    let counts = aggregate::count_by_year(&benefits);
    Ok(success(year_keyed(counts, KeyOrder::Descending)?))
}

/// `GET /benefits/filter-by-amount-range` — only the benefits inside their
/// program's min/max range.
pub async fn filter_by_amount_range(
    State(state): State<AppState>,
) -> Result<Json<Value>, ApiError> {
    let (benefits, filters) = tokio::try_join!(fetch_benefits(&state), fetch_filters(&state))
        .map_err(fetch_failure)?;

    let kept = aggregate::filter_by_range(&benefits, &filters);
    Ok(success(to_value(kept)?))
}

/// `GET /benefits/with-cards` — every benefit with its card attached where
/// the filter/card chain resolves.
pub async fn with_cards(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let (benefits, filters, cards) =
        tokio::try_join!(fetch_benefits(&state), fetch_filters(&state), fetch_cards(&state))
            .map_err(fetch_failure)?;

    let joined = aggregate::join_cards(&benefits, &filters, &cards);
    Ok(success(to_value(joined)?))
}

/// `GET /benefits` — the final report: year buckets sorted descending, each
/// carrying its count and annotated benefits. This route alone carries a
/// `code` field in both envelopes.
pub async fn year_report(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let (benefits, filters, cards) =
        tokio::try_join!(fetch_benefits(&state), fetch_filters(&state), fetch_cards(&state))
            .map_err(|err| {
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({
                        "code": 500,
                        "success": false,
                        "message": failure_message(&err),
                    })),
                )
            })?;

    let report = aggregate::build_year_report(&benefits, &filters, &cards);
    Ok(Json(json!({
        "code": 200,
        "success": true,
        "data": to_value(report)?,
    })))
}
