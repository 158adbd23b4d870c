//! Turn sheet rows into race-day events.

use tracing::debug;

use crate::datetime::{parse_date, parse_time};
use crate::error::{BulletError, BulletResult};
use crate::event::{AttendanceStatus, Attendee, Event};
use crate::layout::{self, DATE_COLUMN, NAME_COLUMN, TIME_COLUMN};
use crate::roster::extract_roster;

/// Build the schedule from rows in document order.
///
/// The first row always provides the roster, whether or not it is also a
/// dated entry. Rows whose date cell does not parse are skipped. Any other
/// problem with a row aborts the whole build.
pub fn build_schedule<I>(rows: I) -> BulletResult<Vec<Event>>
where
    I: IntoIterator<Item = BulletResult<Vec<String>>>,
{
    let mut roster: Option<Vec<Attendee>> = None;
    let mut events = Vec::new();

    for (idx, row) in rows.into_iter().enumerate() {
        let row = row?;
        let row_number = idx + 1;
        let crew = roster.get_or_insert_with(|| extract_roster(&row));

        if let Some(event) = build_event(&row, row_number, crew)? {
            events.push(event);
        }
    }

    Ok(events)
}

/// Build one event, or `None` when the row has no usable date.
fn build_event(row: &[String], row_number: usize, roster: &[Attendee]) -> BulletResult<Option<Event>> {
    let date_cell = cell(row, DATE_COLUMN, row_number)?;
    let Some(date) = parse_date(date_cell) else {
        debug!(row = row_number, cell = %date_cell, "Skipping row without a date");
        return Ok(None);
    };

    let time = parse_time(cell(row, TIME_COLUMN, row_number)?);
    let name = cell(row, NAME_COLUMN, row_number)?;

    let attendees = apply_statuses(row, row_number, roster)?;

    Ok(Some(Event::new(name, date.and_time(time), attendees)))
}

/// Copy the roster and fill in this row's answers, matched by position.
fn apply_statuses(row: &[String], row_number: usize, roster: &[Attendee]) -> BulletResult<Vec<Attendee>> {
    let cells = layout::crew_cells(row);
    if cells.len() != roster.len() {
        return Err(BulletError::StatusCount {
            row: row_number,
            expected: roster.len(),
            found: cells.len(),
        });
    }

    let mut attendees = roster.to_vec();
    for (attendee, code) in attendees.iter_mut().zip(cells) {
        attendee.status = code
            .trim()
            .parse::<AttendanceStatus>()
            .map_err(|source| BulletError::Status {
                row: row_number,
                source,
            })?;
    }

    Ok(attendees)
}

fn cell(row: &[String], column: usize, row_number: usize) -> BulletResult<&str> {
    row.get(column)
        .map(String::as_str)
        .ok_or_else(|| BulletError::ShortRow {
            row: row_number,
            expected: column + 1,
            found: row.len(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};

    fn row(cells: &[&str]) -> BulletResult<Vec<String>> {
        Ok(cells.iter().map(|c| c.to_string()).collect())
    }

    fn header(names: &[&str]) -> BulletResult<Vec<String>> {
        let mut cells = vec!["Race", "Date", "Time", "Notes"];
        cells.extend_from_slice(names);
        row(&cells)
    }

    fn race(name: &str, date: &str, time: &str, statuses: &[&str]) -> BulletResult<Vec<String>> {
        let mut cells = vec![name, date, time, ""];
        cells.extend_from_slice(statuses);
        row(&cells)
    }

    const JUNE_14: &str = "Sat Jun 14 2025 00:00:00 GMT+1000 (Australian Eastern Standard Time)";
    const JUNE_21: &str = "Sat Jun 21 2025 00:00:00 GMT+1000 (Australian Eastern Standard Time)";

    #[test]
    fn builds_events_with_independent_attendees() {
        let rows = vec![
            header(&["A", "B"]),
            race("Winter 1", JUNE_14, "12:30", &["Y", "N"]),
            race("Winter 2", JUNE_21, "13:00", &["Maybe", ""]),
        ];

        let mut events = build_schedule(rows).unwrap();
        assert_eq!(events.len(), 2);

        let statuses = |event: &Event| -> Vec<(String, AttendanceStatus)> {
            event
                .attendees
                .iter()
                .map(|a| (a.name.clone(), a.status))
                .collect()
        };

        assert_eq!(
            statuses(&events[0]),
            vec![
                ("A".to_string(), AttendanceStatus::Confirmed),
                ("B".to_string(), AttendanceStatus::Declined),
            ]
        );
        assert_eq!(
            statuses(&events[1]),
            vec![
                ("A".to_string(), AttendanceStatus::Maybe),
                ("B".to_string(), AttendanceStatus::NoResponse),
            ]
        );

        // Mutating one event's copy leaves the other untouched
        events[1].attendees[0].status = AttendanceStatus::Declined;
        assert_eq!(events[0].attendees[0].status, AttendanceStatus::Confirmed);
    }

    #[test]
    fn event_fields_come_from_fixed_columns() {
        let rows = vec![header(&["A"]), race("Winter 1", JUNE_14, "13:15", &["Y"])];

        let events = build_schedule(rows).unwrap();
        let event = &events[0];

        let start = NaiveDate::from_ymd_opt(2025, 6, 14)
            .unwrap()
            .and_hms_opt(13, 15, 0)
            .unwrap();
        assert_eq!(event.name, "Winter 1");
        assert_eq!(event.start, start);
        assert_eq!(event.end - event.start, Duration::hours(6));
    }

    #[test]
    fn unreadable_time_uses_default() {
        let rows = vec![header(&["A"]), race("Winter 1", JUNE_14, "TBC", &[""])];

        let events = build_schedule(rows).unwrap();
        assert_eq!(events[0].start.format("%H:%M").to_string(), "12:30");
    }

    #[test]
    fn roster_and_order_are_the_same_for_every_event() {
        let rows = vec![
            header(&["A", "B", "C"]),
            race("R1", JUNE_14, "12:00", &["Y", "Y", "N"]),
            race("R2", JUNE_21, "12:00", &["", "Maybe", "Y"]),
            race("R3", "2025-06-28", "12:00", &["N", "N", "N"]),
        ];

        let events = build_schedule(rows).unwrap();
        assert_eq!(events.len(), 3);
        for event in &events {
            let names: Vec<_> = event.attendees.iter().map(|a| a.name.as_str()).collect();
            assert_eq!(names, ["A", "B", "C"]);
        }
    }

    #[test]
    fn events_keep_row_order() {
        let rows = vec![
            header(&["A"]),
            race("Later", JUNE_21, "12:00", &["Y"]),
            race("Earlier", JUNE_14, "12:00", &["Y"]),
        ];

        let events = build_schedule(rows).unwrap();
        assert_eq!(events[0].name, "Later");
        assert_eq!(events[1].name, "Earlier");
    }

    #[test]
    fn undated_rows_are_skipped() {
        let rows = vec![
            header(&["A"]),
            race("Social night", "", "", &["Y"]),
            race("Winter 1", JUNE_14, "12:00", &["N"]),
        ];

        let events = build_schedule(rows).unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].name, "Winter 1");
    }

    #[test]
    fn roster_comes_from_first_row_even_when_dated() {
        // A first row that is itself a race contributes both names and an event
        let rows = vec![
            race("Opening", JUNE_14, "12:00", &["Y", "N"]),
            race("Winter 1", JUNE_21, "12:00", &["Y", "N"]),
        ];

        let events = build_schedule(rows).unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[1].attendees[0].name, "Y");
        assert_eq!(events[1].attendees[1].name, "N");
    }

    #[test]
    fn no_dated_rows_gives_empty_schedule() {
        let rows = vec![header(&["A", "B"]), race("TBA", "", "", &["", ""])];
        assert!(build_schedule(rows).unwrap().is_empty());
        assert!(build_schedule(Vec::new()).unwrap().is_empty());
    }

    #[test]
    fn unknown_status_code_fails_the_run() {
        let rows = vec![
            header(&["A", "B"]),
            race("Winter 1", JUNE_14, "12:00", &["Y", "yes"]),
        ];

        let err = build_schedule(rows).unwrap_err();
        match err {
            BulletError::Status { row, source } => {
                assert_eq!(row, 2);
                assert_eq!(source.0, "yes");
            }
            other => panic!("Expected status error, got {other:?}"),
        }
    }

    #[test]
    fn status_cells_are_trimmed() {
        let rows = vec![header(&["A", "B"]), race("R", JUNE_14, "12:00", &[" Y ", "Maybe "])];

        let events = build_schedule(rows).unwrap();
        assert_eq!(events[0].attendees[0].status, AttendanceStatus::Confirmed);
        assert_eq!(events[0].attendees[1].status, AttendanceStatus::Maybe);
    }

    #[test]
    fn too_few_status_cells_is_an_error() {
        let rows = vec![header(&["A", "B", "C"]), race("R", JUNE_14, "12:00", &["Y"])];

        assert!(matches!(
            build_schedule(rows),
            Err(BulletError::StatusCount { row: 2, expected: 3, found: 1 })
        ));
    }

    #[test]
    fn too_many_status_cells_is_an_error() {
        let rows = vec![header(&["A"]), race("R", JUNE_14, "12:00", &["Y", "N"])];

        assert!(matches!(
            build_schedule(rows),
            Err(BulletError::StatusCount { row: 2, expected: 1, found: 2 })
        ));
    }

    #[test]
    fn cells_past_the_crew_range_are_ignored() {
        let names = ["A", "B", "C", "D", "E", "F", "G", "H", "I"];
        let mut statuses = vec!["Y"; 9];
        statuses.push("a note");

        let mut head = names.to_vec();
        head.push("Comments");

        let rows = vec![header(&head), race("R", JUNE_14, "12:00", &statuses)];

        let events = build_schedule(rows).unwrap();
        assert_eq!(events[0].attendees.len(), 9);
    }

    #[test]
    fn row_without_date_column_is_malformed() {
        let rows = vec![header(&["A"]), row(&["lonely"])];

        assert!(matches!(
            build_schedule(rows),
            Err(BulletError::ShortRow { row: 2, expected: 2, found: 1 })
        ));
    }

    #[test]
    fn dated_row_without_time_column_is_malformed() {
        let rows = vec![header(&["A"]), row(&["R", JUNE_14])];

        assert!(matches!(
            build_schedule(rows),
            Err(BulletError::ShortRow { row: 2, expected: 3, .. })
        ));
    }
}
