use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use serde::Serialize;

use crate::{
    error::AppError,
    models::trip::Trip,
    query::{self, TripQuery},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_trips))
        .route("/:id", get(get_trip))
}

#[derive(Serialize)]
struct DataEnvelope<T> {
    data: T,
}

async fn list_trips(
    State(state): State<AppState>,
    Query(params): Query<TripQuery>,
) -> Result<Json<DataEnvelope<Vec<Trip>>>, AppError> {
    let trips = state.trips.fetch_trips().await?;
    let matched = query::filter_trips(trips, &params, state.config.keyword_match)
        .ok_or(AppError::NoMatch)?;
    Ok(Json(DataEnvelope { data: matched }))
}

async fn get_trip(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DataEnvelope<Trip>>, AppError> {
    let trips = state.trips.fetch_trips().await?;
    let trip = query::find_trip_by_id(trips, &id).ok_or(AppError::TripNotFound)?;
    Ok(Json(DataEnvelope { data: trip }))
}
