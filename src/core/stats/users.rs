use crate::core::stats::mode::{mode, value_counts};
use crate::models::trip::TripTable;

/// A column that may be missing from a dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Availability<T> {
    Available(T),
    NotAvailable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthYearStats {
    /// Oldest rider (smallest year).
    pub earliest: i32,
    /// Youngest rider (largest year).
    pub latest: i32,
    pub most_common: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserStats {
    pub user_types: Vec<(String, usize)>,
    pub genders: Availability<Vec<(String, usize)>>,
    pub birth_years: Availability<BirthYearStats>,
}

pub fn user_stats(table: &TripTable) -> Option<UserStats> {
    if table.is_empty() {
        return None;
    }
    let trips = table.trips();

    let user_types = value_counts(trips.iter().filter_map(|t| t.user_type.as_deref()))
        .into_iter()
        .map(|(k, n)| (k.to_string(), n))
        .collect();

    let genders = if table.has_gender {
        let counts: Vec<(String, usize)> =
            value_counts(trips.iter().filter_map(|t| t.gender.as_deref()))
                .into_iter()
                .map(|(k, n)| (k.to_string(), n))
                .collect();
        if counts.is_empty() {
            Availability::NotAvailable
        } else {
            Availability::Available(counts)
        }
    } else {
        Availability::NotAvailable
    };

    let birth_years = if table.has_birth_year {
        let years = || trips.iter().filter_map(|t| t.birth_year);
        match (years().min(), years().max(), mode(years())) {
            (Some(earliest), Some(latest), Some(most_common)) => {
                Availability::Available(BirthYearStats {
                    earliest,
                    latest,
                    most_common,
                })
            }
            _ => Availability::NotAvailable,
        }
    } else {
        Availability::NotAvailable
    };

    Some(UserStats {
        user_types,
        genders,
        birth_years,
    })
}
