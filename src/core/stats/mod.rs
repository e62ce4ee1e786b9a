//! Read-only aggregate queries over a [`TripTable`](crate::models::TripTable).
//! Each query returns `None` for an empty table.

pub mod duration;
pub mod mode;
pub mod station;
pub mod time;
pub mod users;

pub use duration::{DurationStats, duration_stats};
pub use station::{StationStats, station_stats};
pub use time::{TimeStats, time_stats};
pub use users::{Availability, BirthYearStats, UserStats, user_stats};
