pub type NodeId = usize;
pub type EdgeId = usize;

/// Kilometers
pub type Distance = f64;
