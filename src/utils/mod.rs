pub mod colors;
pub mod formatting;
pub mod table;
pub mod time;

pub use formatting::{secs2hms, secs2readable};
pub use time::{hour_label, month_name, weekday_name};
