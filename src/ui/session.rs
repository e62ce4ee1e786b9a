//! The interactive explore loop: filters, statistics, raw rows, restart.

use crate::config::Config;
use crate::core::loader::Loader;
use crate::core::paginator::Paginator;
use crate::errors::AppResult;
use crate::models::filter::TripFilter;
use crate::models::trip::TripTable;
use crate::ui::messages::info_line;
use crate::ui::prompt::Prompter;
use crate::ui::report::{Report, raw_rows};
use std::io::{BufRead, Write};

pub struct Session<'a, R, W> {
    prompter: Prompter<R, W>,
    loader: Loader<'a>,
    cfg: &'a Config,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(prompter: Prompter<R, W>, loader: Loader<'a>, cfg: &'a Config) -> Self {
        Self {
            prompter,
            loader,
            cfg,
        }
    }

    pub fn into_output(self) -> W {
        self.prompter.into_output()
    }

    /// Run cycles until the user declines to restart.
    pub fn run(&mut self) -> AppResult<()> {
        loop {
            self.run_once()?;

            let answer = self
                .prompter
                .ask("\nWould you like to restart? Enter yes or no.\n")?;
            if answer.to_lowercase() != "yes" {
                return Ok(());
            }
        }
    }

    fn run_once(&mut self) -> AppResult<()> {
        writeln!(
            self.prompter.output(),
            "\nHello! Let's explore some US bikeshare data!"
        )?;

        let city = self.prompter.ask_city()?;
        let month = self.prompter.ask_month()?;
        let day = self.prompter.ask_day()?;
        writeln!(self.prompter.output(), "{}", self.cfg.separator())?;

        let filter = TripFilter::new(month, day);
        let table = self.loader.load_city(city, &filter)?;

        let report = Report::new(&table, self.cfg.separator());
        write!(self.prompter.output(), "{}", report.render())?;

        self.show_raw_rows(&table)
    }

    fn show_raw_rows(&mut self, table: &TripTable) -> AppResult<()> {
        let page_size = self.cfg.page_size;
        let mut pages = Paginator::new(table.trips(), page_size);

        let mut wanted = self.prompter.ask_yes_no(&format!(
            "\nWould you like to see the first {} rows of raw data ('y' or 'n')? ",
            page_size
        ))?;

        while wanted {
            let page = pages.next_page();
            if page.is_empty() {
                writeln!(self.prompter.output(), "{}", info_line("No more rows to display."))?;
                break;
            }
            write!(self.prompter.output(), "\n{}", raw_rows(table, page))?;

            if !pages.has_more() {
                writeln!(self.prompter.output(), "{}", info_line("No more rows to display."))?;
                break;
            }
            wanted = self.prompter.ask_yes_no(&format!(
                "\nWould you like to see the next {} rows of raw data ('y' or 'n')? ",
                page_size
            ))?;
        }
        Ok(())
    }
}
