use std::sync::Arc;

use axum::Router;
use axum::http::Method;
use axum::routing::{get, post};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};

use crate::cities::get_cities::get_cities;
use crate::map::get_map::get_map;
use crate::route::route_handler::route_handler;
use crate::state::AppState;

pub fn app(state: Arc<AppState>) -> Router {
    let cors_layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_origin(Any)
        .allow_headers(Any);

    Router::new()
        .route("/cities", get(get_cities))
        .route("/route", post(route_handler))
        .route("/map", get(get_map))
        .layer(ServiceBuilder::new().layer(cors_layer))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use freight_routing::{Dataset, Graph};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    const DATASET: &str = r#"{
        "countries": [
            { "name": "France", "cities": [
                { "name": "Paris", "is_hub": true, "coords": [48.8566, 2.3522] },
                { "name": "Lyon", "is_hub": false, "coords": [45.764, 4.8357] },
                { "name": "Marseille", "is_hub": false, "coords": [43.2965, 5.3698] }
            ] },
            { "name": "Corse", "cities": [
                { "name": "Bastia", "is_hub": false, "coords": [42.6977, 9.4508] }
            ] }
        ],
        "routes": [
            { "from": "Paris", "to": "Lyon", "distance": 400 },
            { "from": "Lyon", "to": "Marseille", "distance": 300 },
            { "from": "Paris", "to": "Marseille", "distance": 800 }
        ]
    }"#;

    fn test_app() -> Router {
        let dataset: Dataset = DATASET.parse().unwrap();
        let graph = Graph::from_dataset(&dataset).unwrap();
        app(Arc::new(AppState { graph }))
    }

    fn route_request(source: &str, target: &str) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri("/route")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(
                json!({ "source": source, "target": target }).to_string(),
            ))
            .unwrap()
    }

    async fn body_string(response: axum::response::Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn route_returns_cheapest_path() {
        let response = test_app()
            .oneshot(route_request("Paris", "Marseille"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body: Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body["path"], json!(["Paris", "Lyon", "Marseille"]));
        assert_eq!(body["total_cost"], json!(620.0));
        assert_eq!(body["total_distance"], json!(700.0));
        assert_eq!(body["map"]["type"], json!("FeatureCollection"));
    }

    #[tokio::test]
    async fn same_city_is_a_bad_request() {
        let response = test_app()
            .oneshot(route_request("Lyon", "Lyon"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_string(response).await,
            "Please select different cities."
        );
    }

    #[tokio::test]
    async fn unknown_city_is_a_bad_request() {
        let response = test_app()
            .oneshot(route_request("Lyon", "Berlin"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn disconnected_cities_are_not_found() {
        let response = test_app()
            .oneshot(route_request("Paris", "Bastia"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_string(response).await,
            "No path found between the selected cities."
        );
    }

    #[tokio::test]
    async fn cities_are_sorted_by_name() {
        let response = test_app()
            .oneshot(Request::get("/cities").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body: Value = serde_json::from_str(&body_string(response).await).unwrap();
        let names: Vec<&str> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|city| city["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["Bastia", "Lyon", "Marseille", "Paris"]);
        assert_eq!(body[3]["is_hub"], json!(true));
        assert_eq!(body[3]["coords"], json!([48.8566, 2.3522]));
    }

    #[tokio::test]
    async fn map_contains_whole_network() {
        let response = test_app()
            .oneshot(Request::get("/map").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body: Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body["features"].as_array().unwrap().len(), 3 + 4);
    }
}
