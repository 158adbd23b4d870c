//! Core pipeline for the Bullet crew calendar.
//!
//! Turns the crew schedule exported from the club spreadsheet into an
//! iCalendar file with each crew member's availability as attendee status:
//! - `reader` splits the CSV export into rows
//! - `schedule` builds events, using `datetime` and `roster`
//! - `ics` serializes the events
//! - `pipeline` ties them together and writes the file

pub mod datetime;
pub mod error;
pub mod event;
pub mod ics;
pub mod layout;
pub mod options;
pub mod pipeline;
pub mod reader;
pub mod roster;
pub mod schedule;

pub use error::{BulletError, BulletResult};
pub use event::{AttendanceStatus, Attendee, Event, UnknownStatus};
pub use options::{CalendarOptions, DEFAULT_CALENDAR_NAME};
pub use pipeline::{parse_schedule, publish};
