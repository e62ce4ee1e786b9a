use crate::core::stats::mode::mode;
use crate::models::trip::TripTable;

/// Empty station cells are skipped, so a field is `None` only when no trip
/// in the table has a value for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationStats {
    pub start_station: Option<String>,
    pub end_station: Option<String>,
    /// "{start} / {end}"
    pub trip: Option<String>,
}

pub fn station_stats(table: &TripTable) -> Option<StationStats> {
    if table.is_empty() {
        return None;
    }
    let trips = table.trips();
    Some(StationStats {
        start_station: mode(trips.iter().filter_map(|t| t.start_station.as_deref()))
            .map(str::to_string),
        end_station: mode(trips.iter().filter_map(|t| t.end_station.as_deref()))
            .map(str::to_string),
        trip: mode(trips.iter().filter_map(|t| t.station_pair())),
    })
}
