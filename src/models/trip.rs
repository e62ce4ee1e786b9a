use crate::models::city::City;
use crate::models::filter::TripFilter;
use crate::utils::time::weekday_name;
use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};

/// One ride, with the month / weekday / hour derived from `start_time`
/// when the record is built.
#[derive(Debug, Clone, PartialEq)]
pub struct Trip {
    pub id: u64,
    pub start_time: NaiveDateTime,
    pub end_time: Option<NaiveDateTime>,
    pub duration_secs: f64,
    /// `None` when the cell is empty.
    pub start_station: Option<String>,
    pub end_station: Option<String>,
    pub user_type: Option<String>,
    pub gender: Option<String>,
    pub birth_year: Option<i32>,

    month: u32,
    weekday: Weekday,
    hour: u32,
}

impl Trip {
    pub fn new(
        id: u64,
        start_time: NaiveDateTime,
        start_station: impl Into<String>,
        end_station: impl Into<String>,
        duration_secs: f64,
    ) -> Self {
        Self {
            id,
            start_time,
            end_time: None,
            duration_secs,
            start_station: non_empty(start_station.into()),
            end_station: non_empty(end_station.into()),
            user_type: None,
            gender: None,
            birth_year: None,
            month: start_time.month(),
            weekday: start_time.weekday(),
            hour: start_time.hour(),
        }
    }

    pub fn with_end_time(mut self, end_time: Option<NaiveDateTime>) -> Self {
        self.end_time = end_time;
        self
    }

    pub fn with_user_type(mut self, user_type: Option<String>) -> Self {
        self.user_type = user_type;
        self
    }

    pub fn with_gender(mut self, gender: Option<String>) -> Self {
        self.gender = gender;
        self
    }

    pub fn with_birth_year(mut self, birth_year: Option<i32>) -> Self {
        self.birth_year = birth_year;
        self
    }

    /// Month of year, 1-12.
    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn weekday(&self) -> Weekday {
        self.weekday
    }

    pub fn weekday_name(&self) -> &'static str {
        weekday_name(self.weekday)
    }

    /// Hour of day, 0-23.
    pub fn hour(&self) -> u32 {
        self.hour
    }

    /// Key used to count start/end combinations; `None` if either side is missing.
    pub fn station_pair(&self) -> Option<String> {
        match (&self.start_station, &self.end_station) {
            (Some(start), Some(end)) => Some(format!("{} / {}", start, end)),
            _ => None,
        }
    }
}

fn non_empty(s: String) -> Option<String> {
    if s.is_empty() { None } else { Some(s) }
}

/// All trips loaded for one city. `has_gender` / `has_birth_year` record
/// whether the dataset carries those columns at all.
#[derive(Debug, Clone, PartialEq)]
pub struct TripTable {
    pub city: City,
    pub has_gender: bool,
    pub has_birth_year: bool,
    trips: Vec<Trip>,
}

impl TripTable {
    pub fn new(city: City, has_gender: bool, has_birth_year: bool, trips: Vec<Trip>) -> Self {
        Self {
            city,
            has_gender,
            has_birth_year,
            trips,
        }
    }

    pub fn trips(&self) -> &[Trip] {
        &self.trips
    }

    pub fn len(&self) -> usize {
        self.trips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }

    /// Copy of the table holding only the trips that satisfy `filter`.
    pub fn filtered(&self, filter: &TripFilter) -> TripTable {
        let trips = self
            .trips
            .iter()
            .filter(|t| filter.matches(t))
            .cloned()
            .collect();

        TripTable {
            city: self.city,
            has_gender: self.has_gender,
            has_birth_year: self.has_birth_year,
            trips,
        }
    }
}
