use crate::state::AppState;
use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use freight_routing::map::MapGeometry;
use geojson::GeoJson;
use serde::Serialize;
use std::sync::Arc;

#[derive(Serialize)]
pub struct GetMapResponse(GeoJson);

impl IntoResponse for GetMapResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

pub async fn get_map(State(state): State<Arc<AppState>>) -> GetMapResponse {
    GetMapResponse(MapGeometry::from_graph(&state.graph, None).to_geojson())
}
