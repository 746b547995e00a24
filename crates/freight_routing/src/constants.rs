use crate::weighting::Cost;

pub const BASE_COST_PER_KM: f64 = 1.0;

/// Multiplier applied to routes touching at least one hub (20% cheaper).
pub const HUB_DISCOUNT: f64 = 0.8;

pub(crate) const INVALID_NODE: usize = usize::MAX;
pub(crate) const INVALID_EDGE: usize = usize::MAX;
pub(crate) const MAX_COST: Cost = f64::INFINITY;

pub(crate) const DEFAULT_MAP_ZOOM: u8 = 5;
