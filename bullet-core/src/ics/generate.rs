//! ICS file generation.

use std::collections::HashMap;

use chrono::{DateTime, Duration, NaiveDateTime, TimeZone};
use chrono_tz::Tz;
use icalendar::{Calendar, Component, EventLike, Property};

use crate::event::{Attendee, Event};
use crate::options::CalendarOptions;

/// All club events are on Melbourne wall-clock time.
pub const TIMEZONE: Tz = chrono_tz::Australia::Melbourne;
pub const TZID: &str = "Australia/Melbourne";

/// Generate the full .ics document for a schedule.
///
/// Events and attendees keep their input order. An empty schedule still
/// produces a valid calendar carrying only metadata.
pub fn generate_calendar(events: &[Event], options: &CalendarOptions) -> String {
    let mut cal = Calendar::new();
    cal.append_property(Property::new("X-WR-CALNAME", options.name.as_str()));
    cal.append_property(Property::new("X-WR-TIMEZONE", TZID));

    // Identical rows are still separate events and need separate UIDs.
    let mut seen: HashMap<(&str, NaiveDateTime), usize> = HashMap::new();
    for event in events {
        let occurrence = seen.entry((event.name.as_str(), event.start)).or_default();
        let uid = event_uid(event, &options.domain, *occurrence);
        *occurrence += 1;
        cal.push(build_event(event, &uid, options));
    }

    let cal = cal.done();
    rewrite_header(&cal.to_string(), &options.name)
}

fn build_event(event: &Event, uid: &str, options: &CalendarOptions) -> icalendar::Event {
    let mut ics_event = icalendar::Event::new();
    ics_event.uid(uid);
    ics_event.summary(&format!("Bullet: {}", event.name));

    add_zoned_property(&mut ics_event, "DTSTART", event.start);
    add_zoned_property(&mut ics_event, "DTEND", event.end);

    ics_event.location(&event.location);

    // ATTENDEE (multi-property - one per crew member)
    for attendee in &event.attendees {
        ics_event.append_multi_property(attendee_property(attendee, &options.domain));
    }

    ics_event.done()
}

/// The file is informational: nobody is asked to reply.
fn attendee_property(attendee: &Attendee, domain: &str) -> Property {
    let address = synthetic_address(&attendee.name, domain);
    let mut prop = Property::new("ATTENDEE", format!("mailto:{address}"));
    prop.add_parameter("CN", &attendee.name);
    prop.add_parameter("ROLE", "REQ-PARTICIPANT");
    prop.add_parameter("PARTSTAT", attendee.status.as_partstat());
    prop.add_parameter("RSVP", "FALSE");
    prop
}

/// Stable stand-in address for a crew member: md5 of the name at `domain`.
///
/// Crew have no real addresses, but calendar clients key attendees on one.
pub fn synthetic_address(name: &str, domain: &str) -> String {
    format!("{:x}@{}", md5::compute(name.as_bytes()), domain)
}

/// Stable UID so a refreshed file updates events instead of duplicating them.
///
/// `occurrence` counts earlier events with the same name and start; the first
/// one keeps the plain key.
pub fn event_uid(event: &Event, domain: &str, occurrence: usize) -> String {
    let mut key = format!("{}|{}", event.name, event.start.format("%Y%m%dT%H%M%S"));
    if occurrence > 0 {
        key.push_str(&format!("|{occurrence}"));
    }
    format!("{:x}@{}", md5::compute(key.as_bytes()), domain)
}

/// Interpret a civil date-time as Melbourne wall-clock time.
///
/// Repeated times at the end of daylight saving resolve to standard time;
/// times skipped at its start move forward an hour.
pub fn localize(naive: NaiveDateTime) -> DateTime<Tz> {
    TIMEZONE
        .from_local_datetime(&naive)
        .latest()
        .or_else(|| {
            TIMEZONE
                .from_local_datetime(&(naive + Duration::hours(1)))
                .earliest()
        })
        .unwrap_or_else(|| TIMEZONE.from_utc_datetime(&naive))
}

/// Add a datetime property with a TZID parameter
fn add_zoned_property(ics_event: &mut icalendar::Event, name: &str, time: NaiveDateTime) {
    let local = localize(time);
    let mut prop = Property::new(name, local.format("%Y%m%dT%H%M%S").to_string());
    prop.add_parameter("TZID", TZID);
    ics_event.append_property(prop);
}

/// Replace the icalendar crate's PRODID with ours and drop CALSCALE:GREGORIAN
/// (it's the default).
fn rewrite_header(ics: &str, calendar_name: &str) -> String {
    let mut result = String::with_capacity(ics.len());

    for line in ics.lines() {
        if line.starts_with("PRODID:") {
            result.push_str(&format!("PRODID:-//{calendar_name}//Calendar//EN\r\n"));
            continue;
        }

        if line == "CALSCALE:GREGORIAN" {
            continue;
        }

        result.push_str(line);
        result.push_str("\r\n");
    }

    result
}
