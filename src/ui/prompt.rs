//! Validated line input: ask, and ask again until the answer parses.

use crate::errors::{AppError, AppResult};
use crate::models::city::City;
use crate::models::filter::{DayFilter, MonthFilter};
use std::io::{BufRead, Write};

pub const CITY_QUESTION: &str =
    "\nWhich one of these cities would you like more information on: Chicago, New York City, or Washington? ";
pub const MONTH_QUESTION: &str =
    "\nWhich month are you interested in exploring: January, February, March, April, May, June, or all? ";
pub const DAY_QUESTION: &str = "\nAnd which day of the week are you interested in exploring: Monday, Tuesday, Wednesday, Thursday, Friday, Saturday, Sunday, or all? ";

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Print `question` and read one trimmed line. End of input is `InputClosed`.
    pub fn ask(&mut self, question: &str) -> AppResult<String> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(AppError::InputClosed);
        }
        Ok(line.trim().to_string())
    }

    /// Ask until `parse` accepts the answer; `complaint` builds the message
    /// printed for a rejected answer.
    pub fn ask_until<T>(
        &mut self,
        question: &str,
        parse: impl Fn(&str) -> Option<T>,
        complaint: impl Fn(&str) -> String,
    ) -> AppResult<T> {
        loop {
            let answer = self.ask(question)?;
            if let Some(value) = parse(&answer) {
                return Ok(value);
            }
            tracing::debug!(answer = answer.as_str(), "rejected input");
            writeln!(self.output, "{}", complaint(&answer))?;
        }
    }

    pub fn ask_city(&mut self) -> AppResult<City> {
        self.ask_until(CITY_QUESTION, City::from_input, |a| {
            format!("\nI don't have information on {}.", a)
        })
    }

    pub fn ask_month(&mut self) -> AppResult<MonthFilter> {
        self.ask_until(MONTH_QUESTION, MonthFilter::from_input, |a| {
            format!("\nI don't have any data for {}.", a)
        })
    }

    pub fn ask_day(&mut self) -> AppResult<DayFilter> {
        self.ask_until(DAY_QUESTION, DayFilter::from_input, |a| {
            format!("\nI don't have any data for {}.", a)
        })
    }

    /// Strict 'y' / 'n' question.
    pub fn ask_yes_no(&mut self, question: &str) -> AppResult<bool> {
        self.ask_until(
            question,
            |a| match a.to_lowercase().as_str() {
                "y" => Some(true),
                "n" => Some(false),
                _ => None,
            },
            |_| "Please enter 'y' or 'n'.".to_string(),
        )
    }
}
