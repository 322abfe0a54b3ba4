//! ICS parsing using the icalendar crate's parser.

use crate::error::{Ics2DatesError, Ics2DatesResult};
use crate::event::{Calendar, Event, EventStart};
use icalendar::{
    CalendarDateTime, DatePerhapsTime,
    parser::{Component, Property, read_calendar, unfold},
};
use tracing::{debug, trace};

/// Parse ICS content into a Calendar holding every VEVENT in document order.
///
/// Fails if the content is not a VCALENDAR document, or if any event lacks a
/// readable DTSTART. Component and property names match case-insensitively.
pub fn parse_calendar(content: &str) -> Ics2DatesResult<Calendar> {
    let unfolded = unfold(content.trim_start_matches('\u{feff}'));
    ensure_vcalendar(&unfolded)?;

    let parsed =
        read_calendar(&unfolded).map_err(|e| Ics2DatesError::IcsParse(e.to_string()))?;

    let mut events = Vec::new();
    for component in &parsed.components {
        if !component.name.as_ref().eq_ignore_ascii_case("VEVENT") {
            trace!(component = %component.name, "skipping non-event component");
            continue;
        }
        events.push(parse_event(events.len() + 1, component)?);
    }

    debug!(events = events.len(), "parsed calendar");
    Ok(Calendar::new(events))
}

/// The first content line must open a VCALENDAR.
fn ensure_vcalendar(content: &str) -> Ics2DatesResult<()> {
    let first_line = content.lines().map(str::trim).find(|l| !l.is_empty());

    match first_line {
        Some(line) if line.eq_ignore_ascii_case("BEGIN:VCALENDAR") => Ok(()),
        Some(line) => Err(Ics2DatesError::IcsParse(format!(
            "expected BEGIN:VCALENDAR, found '{}'",
            line
        ))),
        None => Err(Ics2DatesError::IcsParse("empty calendar document".to_string())),
    }
}

/// Build an Event from a VEVENT component. `position` is 1-based.
fn parse_event(position: usize, vevent: &Component) -> Ics2DatesResult<Event> {
    let uid = find_prop(vevent, "UID").map(|p| p.val.to_string());
    let summary = find_prop(vevent, "SUMMARY").map(|p| p.val.to_string());
    let label = || event_label(position, summary.as_deref(), uid.as_deref());

    let dtstart = find_prop(vevent, "DTSTART")
        .ok_or_else(|| Ics2DatesError::MissingStart { event: label() })?;

    let start = DatePerhapsTime::try_from(dtstart)
        .map(to_event_start)
        .map_err(|_| Ics2DatesError::InvalidStart {
            event: label(),
            value: dtstart.val.to_string(),
        })?;

    Ok(Event {
        uid,
        summary,
        start,
    })
}

/// First property called `name`, ignoring ASCII case
fn find_prop<'c, 'a>(component: &'c Component<'a>, name: &str) -> Option<&'c Property<'a>> {
    component
        .properties
        .iter()
        .find(|p| p.name.as_ref().eq_ignore_ascii_case(name))
}

/// Convert icalendar's DatePerhapsTime to our EventStart, keeping timezone info
fn to_event_start(dpt: DatePerhapsTime) -> EventStart {
    match dpt {
        DatePerhapsTime::Date(d) => EventStart::Date(d),
        DatePerhapsTime::DateTime(cal_dt) => match cal_dt {
            CalendarDateTime::Utc(dt) => EventStart::DateTimeUtc(dt),
            CalendarDateTime::Floating(naive) => EventStart::DateTimeFloating(naive),
            CalendarDateTime::WithTimezone { date_time, tzid } => EventStart::DateTimeZoned {
                datetime: date_time,
                tzid,
            },
        },
    }
}

/// `#3 'Easter Monday' (UID holiday@example.com)`, down to just `#3`
fn event_label(position: usize, summary: Option<&str>, uid: Option<&str>) -> String {
    let mut label = format!("#{}", position);
    if let Some(summary) = summary {
        label.push_str(&format!(" '{}'", summary));
    }
    if let Some(uid) = uid {
        label.push_str(&format!(" (UID {})", uid));
    }
    label
}
