use crate::{error::RoutingError, graph::Graph, types::NodeId};

use super::routing_path::RoutingPath;

pub trait ShortestPathAlgorithm {
    fn calc_path(
        &mut self,
        graph: &Graph,
        start: NodeId,
        end: NodeId,
    ) -> Result<RoutingPath, RoutingError>;
}
