//! Crew roster taken from the first row of the sheet.

use crate::event::Attendee;
use crate::layout;

/// Build the roster from the crew columns of `row`.
///
/// Names are taken verbatim and everyone starts with no response. A short
/// row yields a correspondingly short roster.
pub fn extract_roster(row: &[String]) -> Vec<Attendee> {
    layout::crew_cells(row)
        .iter()
        .map(|name| Attendee::new(name.as_str()))
        .collect()
}
