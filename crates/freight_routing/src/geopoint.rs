use serde::{Deserialize, Serialize};

/// A `[latitude, longitude]` pair, in that order on the wire.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct GeoPoint {
    lat: f64,
    lng: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> Self {
        GeoPoint { lat, lng }
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lng(&self) -> f64 {
        self.lng
    }

    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }

    /// GeoJSON positions are `[lng, lat]`
    pub fn to_position(&self) -> Vec<f64> {
        vec![self.lng, self.lat]
    }

    /// Arithmetic mean of the coordinates, `None` when there are no points.
    pub fn centroid<'a>(points: impl IntoIterator<Item = &'a GeoPoint>) -> Option<GeoPoint> {
        let (count, lat, lng) = points
            .into_iter()
            .fold((0usize, 0.0, 0.0), |(count, lat, lng), point| {
                (count + 1, lat + point.lat, lng + point.lng)
            });

        if count == 0 {
            return None;
        }

        Some(GeoPoint::new(lat / count as f64, lng / count as f64))
    }
}

impl From<[f64; 2]> for GeoPoint {
    fn from([lat, lng]: [f64; 2]) -> Self {
        GeoPoint { lat, lng }
    }
}

impl From<GeoPoint> for [f64; 2] {
    fn from(point: GeoPoint) -> Self {
        [point.lat, point.lng]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_lat_lng_array() {
        let point: GeoPoint = serde_json::from_str("[48.8566, 2.3522]").unwrap();
        assert_eq!(point.lat(), 48.8566);
        assert_eq!(point.lng(), 2.3522);
        assert_eq!(point.to_position(), vec![2.3522, 48.8566]);
    }

    #[test]
    fn rejects_out_of_range_coordinates() {
        assert!(GeoPoint::new(45.0, 4.0).is_valid());
        assert!(!GeoPoint::new(91.0, 4.0).is_valid());
        assert!(!GeoPoint::new(45.0, -180.5).is_valid());
        assert!(!GeoPoint::new(f64::NAN, 0.0).is_valid());
    }

    #[test]
    fn centroid() {
        let points = [GeoPoint::new(40.0, 0.0), GeoPoint::new(50.0, 10.0)];
        assert_eq!(GeoPoint::centroid(&points), Some(GeoPoint::new(45.0, 5.0)));

        let empty: [GeoPoint; 0] = [];
        assert_eq!(GeoPoint::centroid(&empty), None);
    }
}
