pub mod city;
pub mod constants;
pub mod dataset;
pub mod error;
pub mod geopoint;
pub mod graph;
pub mod graph_builder;
pub mod map;
pub mod routing;
pub mod types;
pub mod weighting;


pub use dataset::Dataset;
pub use error::{DatasetError, InvalidQueryReason, RoutingError};
pub use graph::Graph;
pub use graph_builder::GraphBuilder;
pub use routing::routing_path::RoutingPath;
pub use routing::shortest_path;
