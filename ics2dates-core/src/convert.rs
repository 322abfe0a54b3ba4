//! The .ics to date list pipeline.

use crate::dates::{DateList, extract_dates};
use crate::error::{Ics2DatesError, Ics2DatesResult};
use crate::ics::parse_calendar;
use chrono::NaiveDate;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Summary of a finished conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionReport {
    /// Number of dates written, one per event
    pub dates: usize,
    pub first: Option<NaiveDate>,
    pub last: Option<NaiveDate>,
}

impl ConversionReport {
    fn from_dates(dates: &DateList) -> Self {
        ConversionReport {
            dates: dates.len(),
            first: dates.first(),
            last: dates.last(),
        }
    }
}

/// Parse ICS content and return the sorted start dates of its events.
pub fn convert_str(content: &str) -> Ics2DatesResult<DateList> {
    let calendar = parse_calendar(content)?;
    let mut dates = extract_dates(&calendar);
    dates.sort();
    Ok(dates)
}

/// Read `input`, convert it, and write the date list to `output`.
///
/// `output` is created or truncated only once the calendar has been read and
/// parsed successfully.
pub fn convert_file(input: &Path, output: &Path) -> Ics2DatesResult<ConversionReport> {
    debug!(path = %input.display(), "reading calendar");
    let content = fs::read_to_string(input).map_err(|source| Ics2DatesError::Read {
        path: input.to_path_buf(),
        source,
    })?;

    let dates = convert_str(&content)?;

    debug!(path = %output.display(), dates = dates.len(), "writing dates");
    fs::write(output, dates.to_string()).map_err(|source| Ics2DatesError::Write {
        path: output.to_path_buf(),
        source,
    })?;

    Ok(ConversionReport::from_dates(&dates))
}
