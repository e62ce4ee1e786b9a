//! Month / weekday filters applied to a trip table.

use crate::errors::{AppError, AppResult};
use crate::models::trip::Trip;
use crate::utils::time::{WEEKDAYS, month_name, weekday_name};
use chrono::{Month, Weekday};
use std::fmt;

/// Months the datasets cover (January to June).
pub const FILTER_MONTHS: [Month; 6] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MonthFilter {
    #[default]
    All,
    Only(Month),
}

impl MonthFilter {
    pub fn from_input(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase();
        if s == "all" {
            return Some(MonthFilter::All);
        }
        FILTER_MONTHS
            .into_iter()
            .find(|m| m.name().to_lowercase() == s)
            .map(MonthFilter::Only)
    }

    pub fn parse(s: &str) -> AppResult<Self> {
        Self::from_input(s).ok_or_else(|| AppError::InvalidMonth(s.to_string()))
    }

    pub fn matches(&self, month: u32) -> bool {
        match self {
            MonthFilter::All => true,
            MonthFilter::Only(m) => m.number_from_month() == month,
        }
    }
}

impl fmt::Display for MonthFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonthFilter::All => f.write_str("All"),
            MonthFilter::Only(m) => f.write_str(month_name(m.number_from_month())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DayFilter {
    #[default]
    All,
    Only(Weekday),
}

impl DayFilter {
    pub fn from_input(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase();
        if s == "all" {
            return Some(DayFilter::All);
        }
        WEEKDAYS
            .into_iter()
            .find(|d| weekday_name(*d).to_lowercase() == s)
            .map(DayFilter::Only)
    }

    pub fn parse(s: &str) -> AppResult<Self> {
        Self::from_input(s).ok_or_else(|| AppError::InvalidDay(s.to_string()))
    }

    pub fn matches(&self, weekday: Weekday) -> bool {
        match self {
            DayFilter::All => true,
            DayFilter::Only(d) => *d == weekday,
        }
    }
}

impl fmt::Display for DayFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DayFilter::All => f.write_str("All"),
            DayFilter::Only(d) => f.write_str(weekday_name(*d)),
        }
    }
}

/// A month/weekday pair. A trip must satisfy both dimensions to be kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TripFilter {
    pub month: MonthFilter,
    pub day: DayFilter,
}

impl TripFilter {
    pub fn new(month: MonthFilter, day: DayFilter) -> Self {
        Self { month, day }
    }

    pub fn is_all(&self) -> bool {
        self.month == MonthFilter::All && self.day == DayFilter::All
    }

    pub fn matches(&self, trip: &Trip) -> bool {
        self.month.matches(trip.month()) && self.day.matches(trip.weekday())
    }
}
