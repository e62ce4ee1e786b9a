use crate::models::trip::TripTable;
use crate::utils::formatting::{Hms, secs2hms};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DurationStats {
    pub total_secs: f64,
    pub mean_secs: f64,
}

impl DurationStats {
    pub fn total(&self) -> Hms {
        secs2hms(self.total_secs)
    }

    pub fn mean(&self) -> Hms {
        secs2hms(self.mean_secs)
    }
}

pub fn duration_stats(table: &TripTable) -> Option<DurationStats> {
    if table.is_empty() {
        return None;
    }
    let total_secs: f64 = table.trips().iter().map(|t| t.duration_secs).sum();
    Some(DurationStats {
        total_secs,
        mean_secs: total_secs / table.len() as f64,
    })
}
