use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::catalog::DatasetCatalog;
use crate::core::loader::Loader;
use crate::errors::AppResult;
use crate::models::filter::{DayFilter, MonthFilter, TripFilter};
use crate::ui::messages::{header_line, warning};
use crate::ui::report::{Report, raw_rows};

/// Handle the `stats` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Stats {
        city,
        month,
        day,
        raw,
    } = cmd
    {
        let filter = TripFilter::new(MonthFilter::parse(month)?, DayFilter::parse(day)?);

        let catalog = DatasetCatalog::new(&cfg.data_dir);
        let table = Loader::new(&catalog).load(city, &filter)?;

        println!(
            "{}",
            header_line(format!(
                "{} | month: {} | day: {} | {} trips",
                table.city,
                filter.month,
                filter.day,
                table.len()
            ))
        );
        if table.is_empty() {
            warning("No trips match the selected filters.");
        }

        print!("{}", Report::new(&table, cfg.separator()).render());

        if let Some(n) = raw {
            let rows = &table.trips()[..(*n).min(table.len())];
            if !rows.is_empty() {
                print!("\n{}", raw_rows(&table, rows));
            }
        }
    }

    Ok(())
}
