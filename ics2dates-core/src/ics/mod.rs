//! ICS file parsing.
//!
//! This module reads .ics content according to RFC 5545 and keeps only
//! what the date list needs from each VEVENT.

mod parse;

pub use parse::parse_calendar;
