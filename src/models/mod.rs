pub mod city;
pub mod filter;
pub mod trip;

pub use city::City;
pub use filter::{DayFilter, MonthFilter, TripFilter};
pub use trip::{Trip, TripTable};
