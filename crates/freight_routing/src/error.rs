use thiserror::Error;

use crate::types::NodeId;

/// The dataset cannot be turned into a graph. Fatal at load time.
#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("Failed to read dataset file")]
    Io(#[from] std::io::Error),
    #[error("Malformed dataset: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("City \"{0}\" is declared more than once")]
    DuplicateCity(String),
    #[error("City \"{city}\" has invalid coordinates [{lat}, {lng}]")]
    InvalidCoordinates { city: String, lat: f64, lng: f64 },
    #[error("Route #{route} references unknown city \"{city}\"")]
    UnknownCity { route: usize, city: String },
    #[error("Route #{route} ({from} - {to}) has invalid distance {distance}")]
    InvalidDistance {
        route: usize,
        from: String,
        to: String,
        distance: f64,
    },
    #[error("Route #{route} ({from} - {to}) makes the total network cost or distance overflow")]
    UnboundedTotal {
        route: usize,
        from: String,
        to: String,
    },
    #[error("Route #{route} connects \"{city}\" to itself")]
    SelfLoop { route: usize, city: String },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidQueryReason {
    #[error("Please select different cities.")]
    SameCity(String),
    #[error("Unknown city \"{0}\"")]
    UnknownCity(String),
    #[error("Unknown node #{0}")]
    UnknownNode(NodeId),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RoutingError {
    /// Expected outcome when both cities exist but are not connected.
    #[error("No path found between the selected cities.")]
    NoPathFound { start: String, end: String },
    #[error(transparent)]
    InvalidQuery(#[from] InvalidQueryReason),
}
