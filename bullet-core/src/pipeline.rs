//! Document in, calendar file out.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::BulletResult;
use crate::event::Event;
use crate::ics::generate_calendar;
use crate::options::CalendarOptions;
use crate::reader::read_rows;
use crate::schedule::build_schedule;

/// Read and build the schedule without writing anything.
pub fn parse_schedule(document: &str) -> BulletResult<Vec<Event>> {
    build_schedule(read_rows(document))
}

/// Run the whole pipeline and write `<name>.ics` into `output_dir`.
///
/// The file is overwritten in place. Nothing is written if parsing fails, but
/// a failure during the write itself can leave a truncated file behind.
pub fn publish(document: &str, options: &CalendarOptions, output_dir: &Path) -> BulletResult<PathBuf> {
    options.validate()?;

    let events = parse_schedule(document)?;
    let ics = generate_calendar(&events, options);

    let path = options.output_path(output_dir);
    std::fs::write(&path, ics.as_bytes())?;

    debug!(path = %path.display(), events = events.len(), "Wrote calendar");
    Ok(path)
}
