use crate::error::ApiError;
use crate::state::AppState;
use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use freight_routing::map::MapGeometry;
use freight_routing::routing::route_summary::RouteSummary;
use geojson::GeoJson;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

#[derive(Serialize)]
pub struct RouteResponse {
    path: Vec<String>,
    total_cost: f64,
    total_distance: f64,
    summary: String,
    map: GeoJson,
}

impl IntoResponse for RouteResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

#[derive(Deserialize)]
pub struct RouteRequestBody {
    source: String,
    target: String,
}

pub async fn route_handler(
    State(state): State<Arc<AppState>>,
    Json(body): Json<RouteRequestBody>,
) -> Result<RouteResponse, ApiError> {
    let graph = &state.graph;

    let path = graph.route(&body.source, &body.target)?;
    let summary = RouteSummary::new(graph, &path);

    debug!(
        source = %body.source,
        target = %body.target,
        cost = path.cost(),
        "Route found"
    );

    Ok(RouteResponse {
        path: summary.path().to_vec(),
        total_cost: summary.total_cost(),
        total_distance: summary.total_distance(),
        summary: summary.to_string(),
        map: MapGeometry::from_graph(graph, Some(&path)).to_geojson(),
    })
}
