use crate::core::stats::mode::mode;
use crate::models::trip::TripTable;
use crate::utils::time::{hour_label, month_name};

/// Most frequent month, weekday and start hour.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeStats {
    pub month: u32,
    pub weekday: String,
    pub hour: u32,
}

impl TimeStats {
    pub fn month_name(&self) -> &'static str {
        month_name(self.month)
    }

    pub fn hour_label(&self) -> String {
        hour_label(self.hour)
    }
}

pub fn time_stats(table: &TripTable) -> Option<TimeStats> {
    let trips = table.trips();
    Some(TimeStats {
        month: mode(trips.iter().map(|t| t.month()))?,
        weekday: mode(trips.iter().map(|t| t.weekday_name()))?.to_string(),
        hour: mode(trips.iter().map(|t| t.hour()))?,
    })
}
