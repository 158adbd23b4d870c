//! Schedule entities: events and their crew attendance.
//!
//! These are built once per document by the schedule builder and handed to
//! the ICS generator. Times are civil (timezone-naive) until serialization.

use std::fmt;
use std::str::FromStr;

use chrono::{Duration, NaiveDateTime};
use thiserror::Error;

/// Every race day is booked as a fixed six hour block.
pub const EVENT_DURATION_HOURS: i64 = 6;

/// Where every Bullet event takes place.
pub const EVENT_LOCATION: &str =
    "Sandringham Yacht Club, 36 Jetty Rd, Sandringham VIC 3191, Australia";

/// A crew member's answer for one race day, as written in the sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AttendanceStatus {
    Confirmed,
    Declined,
    Maybe,
    #[default]
    NoResponse,
}

impl AttendanceStatus {
    /// The raw code used for this status in the schedule sheet.
    pub fn as_code(&self) -> &'static str {
        match self {
            AttendanceStatus::Confirmed => "Y",
            AttendanceStatus::Declined => "N",
            AttendanceStatus::Maybe => "Maybe",
            AttendanceStatus::NoResponse => "",
        }
    }

    /// RFC 5545 PARTSTAT value. Maybe and no answer both read as tentative.
    pub fn as_partstat(&self) -> &'static str {
        match self {
            AttendanceStatus::Confirmed => "ACCEPTED",
            AttendanceStatus::Declined => "DECLINED",
            AttendanceStatus::Maybe | AttendanceStatus::NoResponse => "TENTATIVE",
        }
    }
}

/// A sheet cell that is not one of the known attendance codes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unrecognised attendance code {0:?} (expected \"Y\", \"N\", \"Maybe\" or empty)")]
pub struct UnknownStatus(pub String);

impl FromStr for AttendanceStatus {
    type Err = UnknownStatus;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        match code {
            "Y" => Ok(AttendanceStatus::Confirmed),
            "N" => Ok(AttendanceStatus::Declined),
            "Maybe" => Ok(AttendanceStatus::Maybe),
            "" => Ok(AttendanceStatus::NoResponse),
            other => Err(UnknownStatus(other.to_string())),
        }
    }
}

impl fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            AttendanceStatus::Confirmed => "confirmed",
            AttendanceStatus::Declined => "declined",
            AttendanceStatus::Maybe => "maybe",
            AttendanceStatus::NoResponse => "no response",
        };
        f.write_str(label)
    }
}

/// A crew member on the roster. Identity is the name; there is no id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attendee {
    pub name: String,
    pub status: AttendanceStatus,
}

impl Attendee {
    pub fn new(name: impl Into<String>) -> Self {
        Attendee {
            name: name.into(),
            status: AttendanceStatus::NoResponse,
        }
    }
}

/// A race day on the schedule.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub name: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub location: String,
    /// Roster order; position is the only link between a sheet cell and a person.
    pub attendees: Vec<Attendee>,
}

impl Event {
    /// Create an event at the club with the fixed duration.
    pub fn new(name: impl Into<String>, start: NaiveDateTime, attendees: Vec<Attendee>) -> Self {
        Event {
            name: name.into(),
            start,
            end: start + Duration::hours(EVENT_DURATION_HOURS),
            location: EVENT_LOCATION.to_string(),
            attendees,
        }
    }
}
