//! Calendar and event types produced by the ICS parser.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// A parsed calendar: its events in document order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Calendar {
    pub events: Vec<Event>,
}

impl Calendar {
    pub fn new(events: Vec<Event>) -> Self {
        Calendar { events }
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

/// A single VEVENT
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub uid: Option<String>,
    /// SUMMARY, kept for error messages
    pub summary: Option<String>,
    pub start: EventStart,
}

impl Event {
    /// Calendar day the event starts on
    pub fn start_date(&self) -> NaiveDate {
        self.start.date()
    }
}

/// The DTSTART value of an event, as written in the file.
#[derive(Debug, Clone, PartialEq)]
pub enum EventStart {
    /// All-day event (VALUE=DATE)
    Date(NaiveDate),
    /// Absolute time, written with a `Z` suffix
    DateTimeUtc(DateTime<Utc>),
    /// Local time with no timezone attached
    DateTimeFloating(NaiveDateTime),
    /// Local time in the zone named by the TZID parameter
    DateTimeZoned { datetime: NaiveDateTime, tzid: String },
}

impl EventStart {
    /// Date portion of the start. Time of day and zone are dropped, no
    /// conversion between zones happens.
    pub fn date(&self) -> NaiveDate {
        match self {
            EventStart::Date(d) => *d,
            EventStart::DateTimeUtc(dt) => dt.date_naive(),
            EventStart::DateTimeFloating(dt) => dt.date(),
            EventStart::DateTimeZoned { datetime, .. } => datetime.date(),
        }
    }
}
