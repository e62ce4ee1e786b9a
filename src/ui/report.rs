//! Renders the statistics blocks and raw-row pages as text.

use crate::core::stats::{
    Availability, duration_stats, station_stats, time_stats, user_stats,
};
use crate::models::trip::{Trip, TripTable};
use crate::utils::formatting::{format_duration_cell, pad_left, pad_right, secs2readable};
use crate::utils::table::{Column, Table};
use std::time::Instant;
use unicode_width::UnicodeWidthStr;

const NO_TRIPS: &str = "No trips match the selected filters.";
const TIMESTAMP_FMT: &str = "%Y-%m-%d %H:%M:%S";

pub struct Report<'a> {
    table: &'a TripTable,
    separator: String,
}

impl<'a> Report<'a> {
    pub fn new(table: &'a TripTable, separator: impl Into<String>) -> Self {
        Self {
            table,
            separator: separator.into(),
        }
    }

    fn block(&self, title: &str, body: impl FnOnce(&TripTable) -> Option<String>) -> String {
        let started = Instant::now();
        let body = body(self.table).unwrap_or_else(|| NO_TRIPS.to_string());
        let elapsed = started.elapsed().as_secs_f64();

        format!(
            "\n{}\n\n{}\n\nThis took {:.6} seconds.\n{}\n",
            title, body, elapsed, self.separator
        )
    }

    pub fn time_block(&self) -> String {
        self.block("Calculating The Most Frequent Times of Travel...", |t| {
            let s = time_stats(t)?;
            Some(format!(
                "Most common month: {}\nMost common day: {}\nMost common hour: {}",
                s.month_name(),
                s.weekday,
                s.hour_label()
            ))
        })
    }

    pub fn station_block(&self) -> String {
        self.block("Calculating The Most Popular Stations and Trip...", |t| {
            let s = station_stats(t)?;
            Some(format!(
                "Most commonly used start station: {}\n\
                 Most commonly used end station: {}\n\
                 Most commonly used start and end station combination: {}",
                or_not_available(s.start_station),
                or_not_available(s.end_station),
                or_not_available(s.trip)
            ))
        })
    }

    pub fn duration_block(&self) -> String {
        self.block("Calculating Trip Duration Statistics...", |t| {
            let s = duration_stats(t)?;
            Some(format!(
                "Total travel time: {}\nMean travel time: {}",
                secs2readable(s.total_secs),
                secs2readable(s.mean_secs)
            ))
        })
    }

    pub fn user_block(&self) -> String {
        let city = self.table.city;
        self.block("Calculating User Stats...", |t| {
            let s = user_stats(t)?;
            let mut out = String::from("Number of Users by Type:\n");
            out.push_str(&counts_list(&s.user_types));

            match &s.genders {
                Availability::Available(genders) => {
                    out.push_str("\n\nNumber of Users by Gender:\n");
                    out.push_str(&counts_list(genders));
                }
                Availability::NotAvailable => {
                    out.push_str(&format!("\n\nGender data not available for {}.", city));
                }
            }

            match &s.birth_years {
                Availability::Available(years) => {
                    out.push_str(&format!(
                        "\n\nYoungest customer's birth year: {}\n\
                         Oldest customer's birth year: {}\n\
                         Most common birth year: {}",
                        years.latest, years.earliest, years.most_common
                    ));
                }
                Availability::NotAvailable => {
                    out.push_str(&format!(
                        "\n\nBirth year data is not available for {}.",
                        city
                    ));
                }
            }
            Some(out)
        })
    }

    /// All four blocks in display order.
    pub fn render(&self) -> String {
        [
            self.time_block(),
            self.station_block(),
            self.duration_block(),
            self.user_block(),
        ]
        .concat()
    }
}

fn or_not_available(v: Option<String>) -> String {
    v.unwrap_or_else(|| "not available".to_string())
}

/// "  Subscriber  1234" lines, aligned on the longest label.
fn counts_list(counts: &[(String, usize)]) -> String {
    if counts.is_empty() {
        return "  (none)".to_string();
    }
    let label_w = counts
        .iter()
        .map(|(k, _)| UnicodeWidthStr::width(k.as_str()))
        .max()
        .unwrap_or(0);
    let count_w = counts
        .iter()
        .map(|(_, n)| n.to_string().len())
        .max()
        .unwrap_or(0);

    counts
        .iter()
        .map(|(k, n)| {
            format!(
                "  {}  {}",
                pad_right(k, label_w),
                pad_left(&n.to_string(), count_w)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn opt_cell<T: ToString>(v: Option<T>) -> String {
    v.map(|v| v.to_string()).unwrap_or_else(|| "--".to_string())
}

/// Raw rows as an aligned table. Gender / birth year columns appear only
/// when the dataset has them.
pub fn raw_rows(table: &TripTable, rows: &[Trip]) -> String {
    let mut headers = vec![
        "",
        "Start Time",
        "End Time",
        "Trip Duration",
        "Start Station",
        "End Station",
        "User Type",
    ];
    if table.has_gender {
        headers.push("Gender");
    }
    if table.has_birth_year {
        headers.push("Birth Year");
    }

    let mut out = Table::new(headers.into_iter().map(Column::new).collect());
    for trip in rows {
        let mut row = vec![
            trip.id.to_string(),
            trip.start_time.format(TIMESTAMP_FMT).to_string(),
            opt_cell(trip.end_time.map(|t| t.format(TIMESTAMP_FMT))),
            format_duration_cell(trip.duration_secs),
            opt_cell(trip.start_station.as_deref()),
            opt_cell(trip.end_station.as_deref()),
            opt_cell(trip.user_type.as_deref()),
        ];
        if table.has_gender {
            row.push(opt_cell(trip.gender.as_deref()));
        }
        if table.has_birth_year {
            row.push(opt_cell(trip.birth_year));
        }
        out.add_row(row);
    }
    out.render()
}
