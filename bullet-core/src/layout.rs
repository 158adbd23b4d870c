//! Column positions in the schedule export.
//!
//! The sheet has no header contract, only positions. Everything that indexes
//! into a row goes through these constants.

use std::ops::Range;

pub const NAME_COLUMN: usize = 0;
pub const DATE_COLUMN: usize = 1;
pub const TIME_COLUMN: usize = 2;

/// First crew column. Column 3 is unused by the calendar.
pub const CREW_START: usize = 4;

/// Largest crew the sheet supports.
pub const MAX_CREW: usize = 9;

/// Crew columns, 4 through 12 inclusive.
pub const CREW_COLUMNS: Range<usize> = CREW_START..CREW_START + MAX_CREW;

/// The crew cells present in `row`: the full crew range, or fewer on a short row.
pub fn crew_cells(row: &[String]) -> &[String] {
    let end = row.len().min(CREW_COLUMNS.end);
    row.get(CREW_COLUMNS.start..end).unwrap_or(&[])
}
