//! The date list: one `YYYY-MM-DD` per line.
//!
//! This is the format read back by the effort tracker for holidays and days
//! off, so `Display` and `FromStr` follow its reader exactly: `\n`
//! separators, no trailing newline when written, empty lines skipped when
//! read.

use crate::error::{Ics2DatesError, Ics2DatesResult};
use crate::event::{Calendar, Event};
use chrono::NaiveDate;
use std::fmt;
use std::str::FromStr;

/// Date format of every line in a date list
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// An ordered list of calendar days. Duplicates are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateList {
    dates: Vec<NaiveDate>,
}

impl DateList {
    pub fn new(dates: Vec<NaiveDate>) -> Self {
        DateList { dates }
    }

    /// Sort ascending. For four-digit years this is also the lexicographic
    /// order of the rendered lines.
    pub fn sort(&mut self) {
        self.dates.sort();
    }

    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    pub fn first(&self) -> Option<NaiveDate> {
        self.dates.first().copied()
    }

    pub fn last(&self) -> Option<NaiveDate> {
        self.dates.last().copied()
    }
}

impl FromIterator<NaiveDate> for DateList {
    fn from_iter<I: IntoIterator<Item = NaiveDate>>(iter: I) -> Self {
        DateList::new(iter.into_iter().collect())
    }
}

impl fmt::Display for DateList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, date) in self.dates.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{}", date.format(DATE_FORMAT))?;
        }
        Ok(())
    }
}

impl FromStr for DateList {
    type Err = Ics2DatesError;

    fn from_str(s: &str) -> Ics2DatesResult<Self> {
        s.split('\n')
            .enumerate()
            .filter(|(_, line)| !line.is_empty())
            .map(|(i, line)| {
                NaiveDate::parse_from_str(line, DATE_FORMAT).map_err(|_| {
                    Ics2DatesError::InvalidDateLine {
                        line: i + 1,
                        value: line.to_string(),
                    }
                })
            })
            .collect()
    }
}

/// Start day of every event, in calendar order (unsorted).
pub fn extract_dates(calendar: &Calendar) -> DateList {
    calendar.events.iter().map(Event::start_date).collect()
}
