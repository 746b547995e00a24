use serde::Serialize;

use crate::{
    geopoint::GeoPoint,
    graph::Graph,
    types::{Distance, EdgeId, NodeId},
    weighting::Cost,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoutingPathLeg {
    edge_id: EdgeId,
    from: NodeId,
    to: NodeId,
    cost: Cost,
    distance: Distance,
}

impl RoutingPathLeg {
    pub fn new(
        edge_id: EdgeId,
        from: NodeId,
        to: NodeId,
        cost: Cost,
        distance: Distance,
    ) -> RoutingPathLeg {
        RoutingPathLeg {
            edge_id,
            from,
            to,
            cost,
            distance,
        }
    }

    pub fn edge_id(&self) -> EdgeId {
        self.edge_id
    }

    pub fn from(&self) -> NodeId {
        self.from
    }

    pub fn to(&self) -> NodeId {
        self.to
    }

    pub fn cost(&self) -> Cost {
        self.cost
    }

    pub fn distance(&self) -> Distance {
        self.distance
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoutingPath {
    nodes: Vec<NodeId>,
    legs: Vec<RoutingPathLeg>,
    cost: Cost,
    distance: Distance,
}

impl RoutingPath {
    pub fn new(start: NodeId, legs: Vec<RoutingPathLeg>) -> RoutingPath {
        let mut nodes = Vec::with_capacity(legs.len() + 1);
        nodes.push(start);
        nodes.extend(legs.iter().map(|leg| leg.to()));

        let cost = legs.iter().map(|leg| leg.cost()).sum();
        let distance = legs.iter().map(|leg| leg.distance()).sum();

        RoutingPath {
            nodes,
            legs,
            cost,
            distance,
        }
    }

    /// Visited nodes, both endpoints included.
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    pub fn legs(&self) -> &[RoutingPathLeg] {
        &self.legs
    }

    pub fn cost(&self) -> Cost {
        self.cost
    }

    /// Sum of the raw distances of the traversed edges.
    pub fn distance(&self) -> Distance {
        self.distance
    }

    pub fn city_names<'a>(&self, graph: &'a Graph) -> Vec<&'a str> {
        self.nodes
            .iter()
            .map(|&node| graph.city(node).name())
            .collect()
    }

    pub fn coordinates(&self, graph: &Graph) -> Vec<GeoPoint> {
        self.nodes
            .iter()
            .map(|&node| graph.city(node).coords())
            .collect()
    }
}
