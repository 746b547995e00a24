use fxhash::FxHashSet;
use tracing::{info, warn};

use crate::city::City;
use crate::dataset::Dataset;
use crate::error::DatasetError;
use crate::graph::Graph;
use crate::types::NodeId;
use crate::weighting::{HubDiscountWeighting, Weighting};

/// Turns a [`Dataset`] into an immutable [`Graph`]. Performs no I/O.
///
/// Parallel routes between the same pair of cities are kept as independent
/// edges: the search settles on the cheapest one and the reported distance is
/// always the one of the edge actually traversed.
pub struct GraphBuilder<W: Weighting = HubDiscountWeighting> {
    weighting: W,
}

impl GraphBuilder {
    pub fn new() -> Self {
        GraphBuilder {
            weighting: HubDiscountWeighting::new(),
        }
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        GraphBuilder::new()
    }
}

impl<W: Weighting> GraphBuilder<W> {
    pub fn with_weighting(weighting: W) -> Self {
        GraphBuilder { weighting }
    }

    pub fn build(&self, dataset: &Dataset) -> Result<Graph, DatasetError> {
        let mut graph = Graph::with_capacity(dataset.city_count(), dataset.routes.len());

        for city in dataset.cities() {
            if !city.coords.is_valid() {
                return Err(DatasetError::InvalidCoordinates {
                    city: city.name.clone(),
                    lat: city.coords.lat(),
                    lng: city.coords.lng(),
                });
            }

            if graph.node_id(&city.name).is_some() {
                return Err(DatasetError::DuplicateCity(city.name.clone()));
            }

            graph.add_city(City::new(city.name.clone(), city.is_hub, city.coords));
        }

        let mut seen_pairs: FxHashSet<(NodeId, NodeId)> = FxHashSet::default();

        // Every simple path costs at most the sum of all edges, keeping these
        // finite keeps every path total finite too
        let mut total_cost = 0.0;
        let mut total_distance = 0.0;

        for (index, route) in dataset.routes.iter().enumerate() {
            let resolve = |name: &str| {
                graph
                    .node_id(name)
                    .ok_or_else(|| DatasetError::UnknownCity {
                        route: index,
                        city: name.to_string(),
                    })
            };

            let from = resolve(&route.from)?;
            let to = resolve(&route.to)?;

            if from == to {
                return Err(DatasetError::SelfLoop {
                    route: index,
                    city: route.from.clone(),
                });
            }

            if !route.distance.is_finite() || route.distance <= 0.0 {
                return Err(DatasetError::InvalidDistance {
                    route: index,
                    from: route.from.clone(),
                    to: route.to.clone(),
                    distance: route.distance,
                });
            }

            if !seen_pairs.insert((from.min(to), from.max(to))) {
                warn!(
                    from = %route.from,
                    to = %route.to,
                    "Parallel route kept as an independent edge"
                );
            }

            let cost = self
                .weighting
                .calc_edge_cost(route.distance, graph.city(from), graph.city(to));

            total_cost += cost;
            total_distance += route.distance;
            if !total_cost.is_finite() || !total_distance.is_finite() {
                return Err(DatasetError::UnboundedTotal {
                    route: index,
                    from: route.from.clone(),
                    to: route.to.clone(),
                });
            }

            graph.add_edge(from, to, route.distance, cost);
        }

        info!(
            cities = graph.node_count(),
            routes = graph.edge_count(),
            "Graph built"
        );

        Ok(graph)
    }
}
