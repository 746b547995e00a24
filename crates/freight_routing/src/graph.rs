use fxhash::FxHashMap;

use crate::city::City;
use crate::dataset::Dataset;
use crate::error::{DatasetError, RoutingError};
use crate::graph_builder::GraphBuilder;
use crate::routing::dijkstra::Dijkstra;
use crate::routing::route_query::RouteQuery;
use crate::routing::routing_path::RoutingPath;
use crate::routing::shortest_path_algorithm::ShortestPathAlgorithm;
use crate::types::{Distance, EdgeId, NodeId};
use crate::weighting::Cost;

#[derive(Debug, Clone, PartialEq)]
pub struct GraphEdge {
    start_node: NodeId,
    end_node: NodeId,
    distance: Distance,
    cost: Cost,
}

impl GraphEdge {
    pub fn start_node(&self) -> NodeId {
        self.start_node
    }

    pub fn end_node(&self) -> NodeId {
        self.end_node
    }

    pub fn distance(&self) -> Distance {
        self.distance
    }

    pub fn cost(&self) -> Cost {
        self.cost
    }

    /// The endpoint opposite to `node`.
    pub fn adj_node(&self, node: NodeId) -> NodeId {
        debug_assert!(
            node == self.start_node || node == self.end_node,
            "Node {} is neither the start nor the end of the edge",
            node
        );

        if node == self.start_node {
            self.end_node
        } else {
            self.start_node
        }
    }
}

/// Undirected road network between cities. Immutable once built, safe to
/// share between concurrent queries.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    cities: Vec<City>,
    edges: Vec<GraphEdge>,
    adjacency_list: Vec<Vec<EdgeId>>,
    index: FxHashMap<String, NodeId>,
}

impl Graph {
    pub(crate) fn with_capacity(nodes: usize, edges: usize) -> Graph {
        let mut index = FxHashMap::default();
        index.reserve(nodes);
        Graph {
            cities: Vec::with_capacity(nodes),
            edges: Vec::with_capacity(edges),
            adjacency_list: Vec::with_capacity(nodes),
            index,
        }
    }

    pub fn from_dataset(dataset: &Dataset) -> Result<Graph, DatasetError> {
        GraphBuilder::new().build(dataset)
    }

    pub(crate) fn add_city(&mut self, city: City) -> NodeId {
        let node_id = self.cities.len();
        self.index.insert(city.name().to_string(), node_id);
        self.cities.push(city);
        self.adjacency_list.push(vec![]);
        node_id
    }

    pub(crate) fn add_edge(
        &mut self,
        start_node: NodeId,
        end_node: NodeId,
        distance: Distance,
        cost: Cost,
    ) -> EdgeId {
        let edge_id = self.edges.len();
        self.edges.push(GraphEdge {
            start_node,
            end_node,
            distance,
            cost,
        });
        self.adjacency_list[start_node].push(edge_id);
        self.adjacency_list[end_node].push(edge_id);
        edge_id
    }

    pub fn node_count(&self) -> usize {
        self.cities.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn city(&self, node: NodeId) -> &City {
        &self.cities[node]
    }

    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    pub fn edge(&self, edge: EdgeId) -> &GraphEdge {
        &self.edges[edge]
    }

    pub fn edges(&self) -> &[GraphEdge] {
        &self.edges
    }

    /// Edges incident to `node`, in insertion order.
    pub fn node_edges(&self, node: NodeId) -> &[EdgeId] {
        &self.adjacency_list[node]
    }

    pub fn node_id(&self, name: &str) -> Option<NodeId> {
        self.index.get(name).copied()
    }

    pub fn contains_node(&self, node: NodeId) -> bool {
        node < self.cities.len()
    }

    pub fn city_names_sorted(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.cities.iter().map(City::name).collect();
        names.sort_unstable();
        names
    }

    pub fn route(&self, source: &str, target: &str) -> Result<RoutingPath, RoutingError> {
        let mut dijkstra = Dijkstra::new(self);
        self.route_with(&mut dijkstra, source, target)
    }

    /// Validates the city names, then runs `algorithm`. The search never
    /// starts for an invalid query.
    pub fn route_with(
        &self,
        algorithm: &mut impl ShortestPathAlgorithm,
        source: &str,
        target: &str,
    ) -> Result<RoutingPath, RoutingError> {
        let query = RouteQuery::resolve(self, source, target)?;
        algorithm.calc_path(self, query.source(), query.target())
    }
}

#[cfg(test)]
mod tests {
    use crate::test_graph_utils::test_graph::france_graph;

    #[test]
    fn looks_up_cities_by_name() {
        let graph = france_graph();

        let paris = graph.node_id("Paris").unwrap();
        assert_eq!(graph.city(paris).name(), "Paris");
        assert!(graph.city(paris).is_hub());
        assert_eq!(graph.node_id("Berlin"), None);
    }

    #[test]
    fn edges_are_undirected() {
        let graph = france_graph();
        let paris = graph.node_id("Paris").unwrap();
        let lyon = graph.node_id("Lyon").unwrap();

        let edge_id = graph.node_edges(paris)[0];
        assert!(graph.node_edges(lyon).contains(&edge_id));

        let edge = graph.edge(edge_id);
        assert_eq!(edge.adj_node(paris), lyon);
        assert_eq!(edge.adj_node(lyon), paris);
    }

    #[test]
    fn city_names_are_sorted() {
        let graph = france_graph();

        assert_eq!(
            graph.city_names_sorted(),
            vec!["Ajaccio", "Bastia", "Lyon", "Marseille", "Paris"]
        );
    }
}
