use geojson::{Feature, FeatureCollection, GeoJson, Geometry, JsonObject, Value};
use serde::Serialize;
use serde_json::json;

use crate::constants::DEFAULT_MAP_ZOOM;
use crate::geopoint::GeoPoint;
use crate::graph::Graph;
use crate::routing::routing_path::RoutingPath;

const EDGE_COLOR: &str = "#808080";
const HUB_COLOR: &str = "green";
const CITY_COLOR: &str = "blue";
const PATH_COLOR: &str = "red";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapPoint {
    pub name: String,
    pub coords: GeoPoint,
    pub is_hub: bool,
}

impl MapPoint {
    pub fn label(&self) -> String {
        if self.is_hub {
            format!("{} (HUB)", self.name)
        } else {
            self.name.clone()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MapLine {
    pub start: GeoPoint,
    pub end: GeoPoint,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MapView {
    pub center: GeoPoint,
    pub zoom: u8,
}

/// Everything a map widget needs to draw the network and a chosen route.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapGeometry {
    pub points: Vec<MapPoint>,
    pub edges: Vec<MapLine>,
    pub path: Vec<GeoPoint>,
    pub view: Option<MapView>,
}

impl MapGeometry {
    pub fn from_graph(graph: &Graph, route: Option<&RoutingPath>) -> MapGeometry {
        let points = graph
            .cities()
            .iter()
            .map(|city| MapPoint {
                name: city.name().to_string(),
                coords: city.coords(),
                is_hub: city.is_hub(),
            })
            .collect();

        let edges = graph
            .edges()
            .iter()
            .map(|edge| MapLine {
                start: graph.city(edge.start_node()).coords(),
                end: graph.city(edge.end_node()).coords(),
            })
            .collect();

        let path = route
            .map(|route| route.coordinates(graph))
            .unwrap_or_default();

        let coords: Vec<GeoPoint> = graph.cities().iter().map(|city| city.coords()).collect();
        let view = GeoPoint::centroid(&coords).map(|center| MapView {
            center,
            zoom: DEFAULT_MAP_ZOOM,
        });

        MapGeometry {
            points,
            edges,
            path,
            view,
        }
    }

    /// Edges first, then cities, then the route on top.
    pub fn to_geojson(&self) -> GeoJson {
        let mut features: Vec<Feature> =
            Vec::with_capacity(self.edges.len() + self.points.len() + 1);

        features.extend(self.edges.iter().map(|line| {
            feature(
                Value::LineString(vec![line.start.to_position(), line.end.to_position()]),
                json!({
                    "kind": "edge",
                    "stroke": EDGE_COLOR,
                    "stroke-width": 2,
                    "stroke-opacity": 0.4,
                }),
            )
        }));

        features.extend(self.points.iter().map(|point| {
            let color = if point.is_hub { HUB_COLOR } else { CITY_COLOR };
            feature(
                Value::Point(point.coords.to_position()),
                json!({
                    "kind": "city",
                    "name": point.name,
                    "is_hub": point.is_hub,
                    "popup": point.label(),
                    "marker-color": color,
                }),
            )
        }));

        if !self.path.is_empty() {
            features.push(feature(
                Value::LineString(self.path.iter().map(GeoPoint::to_position).collect()),
                json!({
                    "kind": "route",
                    "popup": "Optimized Route",
                    "stroke": PATH_COLOR,
                    "stroke-width": 5,
                }),
            ));
        }

        let foreign_members = self.view.map(|view| {
            object(json!({
                "view": {
                    "center": view.center,
                    "zoom": view.zoom,
                }
            }))
        });

        GeoJson::FeatureCollection(FeatureCollection {
            bbox: None,
            features,
            foreign_members,
        })
    }
}

fn feature(value: Value, properties: serde_json::Value) -> Feature {
    Feature {
        bbox: None,
        geometry: Some(Geometry::new(value)),
        id: None,
        properties: Some(object(properties)),
        foreign_members: None,
    }
}

fn object(value: serde_json::Value) -> JsonObject {
    match value {
        serde_json::Value::Object(map) => map,
        _ => JsonObject::new(),
    }
}
