use std::fmt;

use serde::Serialize;

use crate::{graph::Graph, types::Distance, weighting::Cost};

use super::routing_path::RoutingPath;

/// Presentation-ready view of a [`RoutingPath`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteSummary {
    path: Vec<String>,
    total_cost: Cost,
    total_distance: Distance,
}

impl RouteSummary {
    pub fn new(graph: &Graph, routing_path: &RoutingPath) -> RouteSummary {
        RouteSummary {
            path: routing_path
                .city_names(graph)
                .into_iter()
                .map(String::from)
                .collect(),
            total_cost: routing_path.cost(),
            total_distance: routing_path.distance(),
        }
    }

    pub fn path(&self) -> &[String] {
        &self.path
    }

    pub fn total_cost(&self) -> Cost {
        self.total_cost
    }

    pub fn total_distance(&self) -> Distance {
        self.total_distance
    }

    pub fn headline(&self) -> String {
        format!("Route found: {}", self.path.join(" → "))
    }

    pub fn cost_line(&self) -> String {
        format!("Total cost: {:.2} units", self.total_cost)
    }

    pub fn distance_line(&self) -> String {
        format!("Total distance: {:.0} km", self.total_distance)
    }
}

impl fmt::Display for RouteSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.headline())?;
        writeln!(f, "- {}", self.cost_line())?;
        write!(f, "- {}", self.distance_line())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_graph_utils::test_graph::france_graph;

    #[test]
    fn formats_route() {
        let graph = france_graph();
        let path = graph.route("Paris", "Marseille").unwrap();

        let summary = RouteSummary::new(&graph, &path);

        assert_eq!(summary.path(), ["Paris", "Lyon", "Marseille"]);
        assert_eq!(
            summary.to_string(),
            "Route found: Paris → Lyon → Marseille\n- Total cost: 620.00 units\n- Total distance: 700 km"
        );
    }
}
