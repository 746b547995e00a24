use crate::error::{InvalidQueryReason, RoutingError};
use crate::graph::Graph;
use crate::types::NodeId;

/// A pair of distinct cities known to the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteQuery {
    source: NodeId,
    target: NodeId,
}

impl RouteQuery {
    pub fn resolve(graph: &Graph, source: &str, target: &str) -> Result<RouteQuery, RoutingError> {
        if source == target {
            return Err(InvalidQueryReason::SameCity(source.to_string()).into());
        }

        let lookup = |name: &str| {
            graph
                .node_id(name)
                .ok_or_else(|| InvalidQueryReason::UnknownCity(name.to_string()))
        };

        Ok(RouteQuery {
            source: lookup(source)?,
            target: lookup(target)?,
        })
    }

    pub fn source(&self) -> NodeId {
        self.source
    }

    pub fn target(&self) -> NodeId {
        self.target
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::routing_path::RoutingPath;
    use crate::routing::shortest_path_algorithm::ShortestPathAlgorithm;
    use crate::test_graph_utils::test_graph::france_graph;

    #[derive(Default)]
    struct CountingAlgorithm {
        calls: usize,
    }

    impl ShortestPathAlgorithm for CountingAlgorithm {
        fn calc_path(
            &mut self,
            _graph: &Graph,
            start: NodeId,
            _end: NodeId,
        ) -> Result<RoutingPath, RoutingError> {
            self.calls += 1;
            Ok(RoutingPath::new(start, vec![]))
        }
    }

    #[test]
    fn resolves_known_cities() {
        let graph = france_graph();
        let query = RouteQuery::resolve(&graph, "Paris", "Marseille").unwrap();

        assert_eq!(query.source(), graph.node_id("Paris").unwrap());
        assert_eq!(query.target(), graph.node_id("Marseille").unwrap());
    }

    #[test]
    fn same_city_is_rejected_before_search() {
        let graph = france_graph();
        let mut algorithm = CountingAlgorithm::default();

        let result = graph.route_with(&mut algorithm, "Lyon", "Lyon");

        assert_eq!(
            result,
            Err(RoutingError::InvalidQuery(InvalidQueryReason::SameCity(
                "Lyon".to_string()
            )))
        );
        assert_eq!(algorithm.calls, 0);
    }

    #[test]
    fn unknown_city_is_rejected_before_search() {
        let graph = france_graph();
        let mut algorithm = CountingAlgorithm::default();

        let result = graph.route_with(&mut algorithm, "Paris", "Berlin");

        assert_eq!(
            result,
            Err(RoutingError::InvalidQuery(InvalidQueryReason::UnknownCity(
                "Berlin".to_string()
            )))
        );
        assert_eq!(algorithm.calls, 0);
    }

    #[test]
    fn valid_query_runs_search_once() {
        let graph = france_graph();
        let mut algorithm = CountingAlgorithm::default();

        graph.route_with(&mut algorithm, "Paris", "Lyon").unwrap();
        assert_eq!(algorithm.calls, 1);
    }
}
