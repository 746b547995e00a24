use serde::Serialize;

use crate::geopoint::GeoPoint;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct City {
    name: String,
    is_hub: bool,
    coords: GeoPoint,
}

impl City {
    pub fn new(name: impl Into<String>, is_hub: bool, coords: GeoPoint) -> Self {
        City {
            name: name.into(),
            is_hub,
            coords,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_hub(&self) -> bool {
        self.is_hub
    }

    pub fn coords(&self) -> GeoPoint {
        self.coords
    }
}
