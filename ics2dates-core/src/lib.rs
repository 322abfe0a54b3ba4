//! Core types for ics2dates.
//!
//! - `ics` parses iCalendar text into a [`Calendar`] of [`Event`]s
//! - `dates` holds the one-date-per-line [`DateList`] format
//! - `convert` runs the whole file-to-file pipeline

pub mod convert;
pub mod dates;
pub mod error;
pub mod event;
pub mod ics;

pub use convert::{ConversionReport, convert_file, convert_str};
pub use dates::{DATE_FORMAT, DateList, extract_dates};
pub use error::{Ics2DatesError, Ics2DatesResult};
pub use event::{Calendar, Event, EventStart};
