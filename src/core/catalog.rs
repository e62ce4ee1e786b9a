//! Static mapping from city to dataset file.

use crate::errors::{AppError, AppResult};
use crate::models::city::City;
use std::path::PathBuf;

pub const CITY_DATA: [(City, &str); 3] = [
    (City::Chicago, "chicago.csv"),
    (City::NewYorkCity, "new_york_city.csv"),
    (City::Washington, "washington.csv"),
];

/// Dataset files rooted in one data directory. Handed to the loader
/// explicitly instead of living in a global.
#[derive(Debug, Clone)]
pub struct DatasetCatalog {
    data_dir: PathBuf,
    entries: &'static [(City, &'static str)],
}

impl DatasetCatalog {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            entries: &CITY_DATA,
        }
    }

    pub fn file_name(&self, city: City) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(c, _)| *c == city)
            .map(|(_, f)| *f)
    }

    pub fn path_for(&self, city: City) -> AppResult<PathBuf> {
        self.file_name(city)
            .map(|f| self.data_dir.join(f))
            .ok_or_else(|| AppError::DatasetNotFound(city.key().to_string()))
    }

    /// Resolve a free-text dataset identifier ("Chicago", "new york city").
    pub fn resolve(&self, identifier: &str) -> AppResult<(City, PathBuf)> {
        let city = City::from_input(identifier)
            .ok_or_else(|| AppError::DatasetNotFound(identifier.to_string()))?;
        Ok((city, self.path_for(city)?))
    }
}
