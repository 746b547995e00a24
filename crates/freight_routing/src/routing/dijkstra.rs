use std::cmp::Ordering;
use std::collections::BinaryHeap;

use tracing::debug;

use crate::constants::{INVALID_EDGE, INVALID_NODE, MAX_COST};
use crate::error::{InvalidQueryReason, RoutingError};
use crate::graph::Graph;
use crate::types::{EdgeId, NodeId};
use crate::weighting::Cost;

use super::routing_path::{RoutingPath, RoutingPathLeg};
use super::shortest_path_algorithm::ShortestPathAlgorithm;

/// https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm

#[derive(Copy, Clone, Debug)]
struct HeapItem {
    node_id: NodeId,
    cost: Cost,
}

impl PartialEq for HeapItem {
    fn eq(&self, other: &HeapItem) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapItem {}

impl PartialOrd for HeapItem {
    fn partial_cmp(&self, other: &HeapItem) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapItem {
    fn cmp(&self, other: &Self) -> Ordering {
        // Flip cost to make this a min-heap, lowest node id wins ties
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.node_id.cmp(&self.node_id))
    }
}

#[derive(Clone)]
struct NodeData {
    settled: bool,
    cost: Cost,
    parent: NodeId,
    edge_id: EdgeId, // Edge ID from parent to current node
}

impl NodeData {
    fn new() -> Self {
        NodeData {
            settled: false,
            cost: MAX_COST,
            parent: INVALID_NODE,
            edge_id: INVALID_EDGE,
        }
    }
}

/// Search state is owned by the instance and reset on every call, so
/// concurrent queries each use their own `Dijkstra`.
pub struct Dijkstra {
    heap: BinaryHeap<HeapItem>,
    data: Vec<NodeData>,
}

impl Dijkstra {
    pub fn new(graph: &Graph) -> Dijkstra {
        Dijkstra {
            heap: BinaryHeap::with_capacity(graph.node_count()),
            data: vec![NodeData::new(); graph.node_count()],
        }
    }

    fn init(&mut self, graph: &Graph, start: NodeId) {
        self.heap.clear();
        self.data.clear();
        self.data.resize(graph.node_count(), NodeData::new());

        self.data[start].cost = 0.0;
        self.heap.push(HeapItem {
            node_id: start,
            cost: 0.0,
        });
    }

    fn build_path(&self, graph: &Graph, start: NodeId, end: NodeId) -> RoutingPath {
        let mut legs: Vec<RoutingPathLeg> = Vec::new();

        let mut node = end;
        while self.data[node].parent != INVALID_NODE {
            let node_data = &self.data[node];
            let edge = graph.edge(node_data.edge_id);

            legs.push(RoutingPathLeg::new(
                node_data.edge_id,
                node_data.parent,
                node,
                edge.cost(),
                edge.distance(),
            ));
            node = node_data.parent;
        }

        legs.reverse();

        RoutingPath::new(start, legs)
    }
}

impl ShortestPathAlgorithm for Dijkstra {
    fn calc_path(
        &mut self,
        graph: &Graph,
        start: NodeId,
        end: NodeId,
    ) -> Result<RoutingPath, RoutingError> {
        for node in [start, end] {
            if !graph.contains_node(node) {
                return Err(InvalidQueryReason::UnknownNode(node).into());
            }
        }

        self.init(graph, start);

        let mut settled_nodes = 0;

        while let Some(HeapItem { node_id, cost }) = self.heap.pop() {
            if self.data[node_id].settled {
                continue;
            }

            self.data[node_id].settled = true;
            settled_nodes += 1;

            if node_id == end {
                debug!(start, end, cost, settled_nodes, "Dijkstra found a path");
                return Ok(self.build_path(graph, start, end));
            }

            for &edge_id in graph.node_edges(node_id) {
                let edge = graph.edge(edge_id);
                let adj_node = edge.adj_node(node_id);

                let adj_data = &mut self.data[adj_node];
                if adj_data.settled {
                    continue;
                }

                let new_cost = cost + edge.cost();
                // Strictly smaller: the first edge explored wins ties
                if new_cost < adj_data.cost {
                    adj_data.cost = new_cost;
                    adj_data.parent = node_id;
                    adj_data.edge_id = edge_id;
                    self.heap.push(HeapItem {
                        node_id: adj_node,
                        cost: new_cost,
                    });
                }
            }
        }

        debug!(start, end, settled_nodes, "Dijkstra exhausted the component");

        Err(RoutingError::NoPathFound {
            start: graph.city(start).name().to_string(),
            end: graph.city(end).name().to_string(),
        })
    }
}
