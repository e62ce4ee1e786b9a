//! Reads a city's CSV file into a typed [`TripTable`] and applies the filter.

use crate::core::catalog::DatasetCatalog;
use crate::errors::{AppError, AppResult};
use crate::models::city::City;
use crate::models::filter::TripFilter;
use crate::models::trip::{Trip, TripTable};
use crate::utils::time::parse_timestamp;
use csv::{ReaderBuilder, StringRecord};
use std::fs::File;
use std::io::Read;
use std::path::Path;

const COL_START_TIME: &str = "Start Time";
const COL_END_TIME: &str = "End Time";
const COL_DURATION: &str = "Trip Duration";
const COL_START_STATION: &str = "Start Station";
const COL_END_STATION: &str = "End Station";
const COL_USER_TYPE: &str = "User Type";
const COL_GENDER: &str = "Gender";
const COL_BIRTH_YEAR: &str = "Birth Year";

/// Header positions, resolved once per file.
#[derive(Debug)]
struct Columns {
    id: Option<usize>,
    start_time: usize,
    end_time: Option<usize>,
    duration: usize,
    start_station: usize,
    end_station: usize,
    user_type: usize,
    gender: Option<usize>,
    birth_year: Option<usize>,
}

impl Columns {
    fn resolve(headers: &StringRecord, dataset: &str) -> AppResult<Self> {
        let find = |name: &str| headers.iter().position(|h| h.trim() == name);
        let require = |name: &str| {
            find(name).ok_or_else(|| AppError::MissingColumn {
                dataset: dataset.to_string(),
                column: name.to_string(),
            })
        };

        // pandas writes the index as an unnamed first column
        let id = match headers.get(0).map(str::trim) {
            Some("") | Some("Unnamed: 0") => Some(0),
            _ => None,
        };

        Ok(Self {
            id,
            start_time: require(COL_START_TIME)?,
            end_time: find(COL_END_TIME),
            duration: require(COL_DURATION)?,
            start_station: require(COL_START_STATION)?,
            end_station: require(COL_END_STATION)?,
            user_type: require(COL_USER_TYPE)?,
            gender: find(COL_GENDER),
            birth_year: find(COL_BIRTH_YEAR),
        })
    }
}

fn cell(record: &StringRecord, idx: usize) -> &str {
    record.get(idx).map(str::trim).unwrap_or("")
}

fn optional_text(record: &StringRecord, idx: Option<usize>) -> Option<String> {
    idx.map(|i| cell(record, i))
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Birth years are stored as floats ("1992.0") in the source files.
fn parse_year(s: &str) -> Option<i32> {
    s.parse::<f64>()
        .ok()
        .filter(|y| y.is_finite())
        .map(|y| y as i32)
}

/// Parse a whole dataset. `dataset` only labels errors.
pub fn read_trips<R: Read>(reader: R, city: City, dataset: &str) -> AppResult<TripTable> {
    let mut rdr = ReaderBuilder::new().flexible(true).from_reader(reader);
    let cols = Columns::resolve(rdr.headers()?, dataset)?;

    let mut trips = Vec::new();
    for (idx, result) in rdr.records().enumerate() {
        let record = result?;
        let line = record
            .position()
            .map(|p| p.line() as usize)
            .unwrap_or(idx + 2);

        let raw_start = cell(&record, cols.start_time);
        let start_time = parse_timestamp(raw_start).ok_or_else(|| AppError::InvalidTimestamp {
            line,
            value: raw_start.to_string(),
        })?;

        let raw_duration = cell(&record, cols.duration);
        // NaN / inf parse as f64 but are not durations
        let duration_secs = raw_duration
            .parse::<f64>()
            .ok()
            .filter(|d| d.is_finite())
            .ok_or_else(|| AppError::InvalidNumber {
                line,
                column: COL_DURATION.to_string(),
                value: raw_duration.to_string(),
            })?;

        let id = cols
            .id
            .and_then(|i| cell(&record, i).parse::<u64>().ok())
            .unwrap_or(idx as u64);

        let end_time = cols
            .end_time
            .and_then(|i| parse_timestamp(cell(&record, i)));

        let birth_year = cols.birth_year.and_then(|i| {
            let raw = cell(&record, i);
            let year = parse_year(raw);
            if year.is_none() && !raw.is_empty() {
                tracing::debug!(line, value = raw, "ignoring malformed birth year");
            }
            year
        });

        let trip = Trip::new(
            id,
            start_time,
            cell(&record, cols.start_station),
            cell(&record, cols.end_station),
            duration_secs,
        )
        .with_end_time(end_time)
        .with_user_type(optional_text(&record, Some(cols.user_type)))
        .with_gender(optional_text(&record, cols.gender))
        .with_birth_year(birth_year);

        trips.push(trip);
    }

    Ok(TripTable::new(
        city,
        cols.gender.is_some(),
        cols.birth_year.is_some(),
        trips,
    ))
}

pub fn read_trips_from_path(path: &Path, city: City) -> AppResult<TripTable> {
    let file = File::open(path).map_err(|source| AppError::DatasetOpen {
        path: path.display().to_string(),
        source,
    })?;
    read_trips(file, city, &path.display().to_string())
}

/// Loads datasets listed in a [`DatasetCatalog`].
pub struct Loader<'a> {
    catalog: &'a DatasetCatalog,
}

impl<'a> Loader<'a> {
    pub fn new(catalog: &'a DatasetCatalog) -> Self {
        Self { catalog }
    }

    /// Load the dataset named by `identifier` and keep the trips matching `filter`.
    pub fn load(&self, identifier: &str, filter: &TripFilter) -> AppResult<TripTable> {
        let (city, _) = self.catalog.resolve(identifier)?;
        self.load_city(city, filter)
    }

    pub fn load_city(&self, city: City, filter: &TripFilter) -> AppResult<TripTable> {
        let path = self.catalog.path_for(city)?;
        tracing::debug!(city = city.name(), path = %path.display(), "loading dataset");

        let table = read_trips_from_path(&path, city)?;
        let filtered = if filter.is_all() {
            table
        } else {
            table.filtered(filter)
        };

        tracing::info!(
            city = city.name(),
            month = %filter.month,
            day = %filter.day,
            rows = filtered.len(),
            "dataset loaded"
        );
        Ok(filtered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHICAGO: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year
1423854,2017-06-23 15:09:32,2017-06-23 15:14:53,321,Wood St & Hubbard St,Damen Ave & Chicago Ave,Subscriber,Male,1992.0
955915,2017-05-25 18:19:03,2017-05-25 18:45:53,1610,Theater on the Lake,Sheffield Ave & Waveland Ave,Subscriber,,
9031,2017-01-04 08:27:49,2017-01-04 08:34:45,416,May St & Taylor St,Wood St & Taylor St,,Female,1981.0
";

    const WASHINGTON: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type
1621326,2017-06-21 08:36:34,2017-06-21 08:44:43,489.066,14th & Belmont St NW,15th & K St NW,Subscriber
";

    #[test]
    fn reads_typed_rows() {
        let t = read_trips(CHICAGO.as_bytes(), City::Chicago, "chicago.csv").unwrap();
        assert_eq!(t.len(), 3);
        assert!(t.has_gender);
        assert!(t.has_birth_year);

        let first = &t.trips()[0];
        assert_eq!(first.id, 1423854);
        assert_eq!(first.month(), 6);
        assert_eq!(first.weekday_name(), "Friday");
        assert_eq!(first.hour(), 15);
        assert_eq!(first.duration_secs, 321.0);
        assert_eq!(first.gender.as_deref(), Some("Male"));
        assert_eq!(first.birth_year, Some(1992));
        assert!(first.end_time.is_some());

        let second = &t.trips()[1];
        assert_eq!(second.gender, None);
        assert_eq!(second.birth_year, None);
        assert_eq!(t.trips()[2].user_type, None);
    }

    #[test]
    fn optional_columns_may_be_absent() {
        let t = read_trips(WASHINGTON.as_bytes(), City::Washington, "washington.csv").unwrap();
        assert!(!t.has_gender);
        assert!(!t.has_birth_year);
        assert_eq!(t.trips()[0].duration_secs, 489.066);
    }

    #[test]
    fn missing_required_column_is_fatal() {
        let data = "Start Time,Trip Duration,Start Station,End Station\n2017-01-01 00:00:00,1,a,b\n";
        let err = read_trips(data.as_bytes(), City::Chicago, "x.csv").unwrap_err();
        assert!(matches!(err, AppError::MissingColumn { column, .. } if column == "User Type"));
    }

    #[test]
    fn malformed_timestamp_is_fatal() {
        let data = "Start Time,Trip Duration,Start Station,End Station,User Type\n\
                    2017-01-01 00:00:00,1,a,b,Subscriber\n\
                    yesterday,1,a,b,Subscriber\n";
        let err = read_trips(data.as_bytes(), City::Chicago, "x.csv").unwrap_err();
        assert!(
            matches!(err, AppError::InvalidTimestamp { line, value } if line == 3 && value == "yesterday")
        );
    }

    #[test]
    fn malformed_duration_is_fatal() {
        let data = "Start Time,Trip Duration,Start Station,End Station,User Type\n\
                    2017-01-01 00:00:00,abc,a,b,Subscriber\n";
        let err = read_trips(data.as_bytes(), City::Chicago, "x.csv").unwrap_err();
        assert!(matches!(err, AppError::InvalidNumber { .. }));
    }

    #[test]
    fn non_finite_duration_is_fatal() {
        for bad in ["NaN", "nan", "inf", "-infinity"] {
            let data = format!(
                "Start Time,Trip Duration,Start Station,End Station,User Type\n\
                 2017-01-01 00:00:00,3600,a,b,Subscriber\n\
                 2017-01-01 01:00:00,{bad},a,b,Subscriber\n"
            );
            let err = read_trips(data.as_bytes(), City::Chicago, "x.csv").unwrap_err();
            assert!(
                matches!(&err, AppError::InvalidNumber { line, value, .. } if *line == 3 && value == bad),
                "{bad}: {err}"
            );
        }
    }

    #[test]
    fn empty_station_cells_load_as_none() {
        let data = "Start Time,Trip Duration,Start Station,End Station,User Type\n\
                    2017-01-01 00:00:00,60,,Canal,Subscriber\n";
        let t = read_trips(data.as_bytes(), City::Chicago, "x.csv").unwrap();
        assert_eq!(t.trips()[0].start_station, None);
        assert_eq!(t.trips()[0].end_station.as_deref(), Some("Canal"));
    }

    #[test]
    fn row_position_is_used_without_index_column() {
        let data = "Start Time,Trip Duration,Start Station,End Station,User Type\n\
                    2017-01-01 00:00:00,1,a,b,Subscriber\n\
                    2017-01-01 01:00:00,1,a,b,Subscriber\n";
        let t = read_trips(data.as_bytes(), City::Chicago, "x.csv").unwrap();
        let ids: Vec<u64> = t.trips().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![0, 1]);
    }
}
