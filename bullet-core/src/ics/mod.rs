//! ICS calendar generation.
//!
//! Produces the subscribed calendar file from the built schedule according to
//! RFC 5545.

mod generate;

pub use generate::{TIMEZONE, TZID, event_uid, generate_calendar, localize, synthetic_address};
