use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DatasetError;
use crate::geopoint::GeoPoint;

/// Raw locations and routes as handed over by the data provider.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Dataset {
    pub countries: Vec<CountryRecord>,
    pub routes: Vec<RouteRecord>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CountryRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub cities: Vec<CityRecord>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CityRecord {
    pub name: String,
    pub is_hub: bool,
    pub coords: GeoPoint,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RouteRecord {
    pub from: String,
    pub to: String,
    pub distance: f64,
}

impl Dataset {
    pub fn from_reader<R: Read>(reader: R) -> Result<Dataset, DatasetError> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Dataset, DatasetError> {
        let file = File::open(path)?;
        Dataset::from_reader(BufReader::new(file))
    }

    /// Cities in declaration order, countries first to last.
    pub fn cities(&self) -> impl Iterator<Item = &CityRecord> {
        self.countries
            .iter()
            .flat_map(|country| country.cities.iter())
    }

    pub fn city_count(&self) -> usize {
        self.countries.iter().map(|country| country.cities.len()).sum()
    }
}

impl FromStr for Dataset {
    type Err = DatasetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(serde_json::from_str(s)?)
    }
}
