pub(crate) mod dijkstra;
pub mod route_query;
pub mod route_summary;
pub mod routing_path;
pub mod shortest_path_algorithm;

pub use dijkstra::Dijkstra;

use crate::error::RoutingError;
use crate::graph::Graph;
use crate::types::NodeId;
use routing_path::RoutingPath;
use shortest_path_algorithm::ShortestPathAlgorithm;

/// Minimum cost path between two nodes of `graph`.
///
/// `source == target` is expected to be rejected by the caller (see
/// [`route_query::RouteQuery`]); when it is not, the result is a single node path.
/// Ids outside the graph are an `InvalidQuery(UnknownNode)`.
pub fn shortest_path(
    graph: &Graph,
    source: NodeId,
    target: NodeId,
) -> Result<RoutingPath, RoutingError> {
    let mut dijkstra = Dijkstra::new(graph);
    dijkstra.calc_path(graph, source, target)
}
