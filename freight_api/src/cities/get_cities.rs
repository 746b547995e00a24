use crate::state::AppState;
use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use freight_routing::city::City;
use serde::Serialize;
use std::sync::Arc;

/// Cities sorted by name, for source and destination pickers.
#[derive(Serialize)]
pub struct GetCitiesResponse(Vec<City>);

impl IntoResponse for GetCitiesResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

pub async fn get_cities(State(state): State<Arc<AppState>>) -> GetCitiesResponse {
    let graph = &state.graph;

    let cities = graph
        .city_names_sorted()
        .into_iter()
        .filter_map(|name| graph.node_id(name))
        .map(|node| graph.city(node).clone())
        .collect();

    GetCitiesResponse(cities)
}
