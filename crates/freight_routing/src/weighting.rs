use crate::city::City;
use crate::constants::{BASE_COST_PER_KM, HUB_DISCOUNT};
use crate::types::Distance;

pub type Cost = f64;

pub trait Weighting {
    /// Cost of a route of `distance` km between `from` and `to`. Must be
    /// non-negative and symmetric in its endpoints.
    fn calc_edge_cost(&self, distance: Distance, from: &City, to: &City) -> Cost;
}

/// Flat rate per kilometer, discounted when either endpoint is a hub.
#[derive(Debug, Default, Clone, Copy)]
pub struct HubDiscountWeighting;

impl HubDiscountWeighting {
    pub fn new() -> Self {
        HubDiscountWeighting
    }
}

impl Weighting for HubDiscountWeighting {
    fn calc_edge_cost(&self, distance: Distance, from: &City, to: &City) -> Cost {
        let cost = distance * BASE_COST_PER_KM;

        if from.is_hub() || to.is_hub() {
            return cost * HUB_DISCOUNT;
        }

        cost
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geopoint::GeoPoint;

    fn city(name: &str, is_hub: bool) -> City {
        City::new(name, is_hub, GeoPoint::new(0.0, 0.0))
    }

    #[test]
    fn hub_routes_are_discounted() {
        let weighting = HubDiscountWeighting::new();
        let paris = city("Paris", true);
        let lyon = city("Lyon", false);

        assert_eq!(weighting.calc_edge_cost(400.0, &paris, &lyon), 320.0);
        assert_eq!(weighting.calc_edge_cost(400.0, &lyon, &paris), 320.0);
    }

    #[test]
    fn regular_routes_pay_full_rate() {
        let weighting = HubDiscountWeighting::new();
        let lyon = city("Lyon", false);
        let marseille = city("Marseille", false);

        assert_eq!(weighting.calc_edge_cost(300.0, &lyon, &marseille), 300.0);
    }

    #[test]
    fn hub_to_hub_is_discounted_once() {
        let weighting = HubDiscountWeighting::new();
        let paris = city("Paris", true);
        let frankfurt = city("Frankfurt", true);

        assert_eq!(weighting.calc_edge_cost(500.0, &paris, &frankfurt), 400.0);
    }
}
