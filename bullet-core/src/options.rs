//! Calendar output options shared by the server and the CLI.

use std::path::{Path, PathBuf};

use crate::error::{BulletError, BulletResult};

pub const DEFAULT_CALENDAR_NAME: &str = "Bullet Sailing Schedule";

/// How the generated calendar is named and addressed.
#[derive(Debug, Clone)]
pub struct CalendarOptions {
    /// Calendar title; also names the output file.
    pub name: String,
    /// Domain for synthetic attendee addresses and event UIDs.
    pub domain: String,
}

impl CalendarOptions {
    pub fn new(name: impl Into<String>, domain: impl Into<String>) -> BulletResult<Self> {
        let options = CalendarOptions {
            name: name.into(),
            domain: domain.into(),
        };
        options.validate()?;
        Ok(options)
    }

    pub fn validate(&self) -> BulletResult<()> {
        if self.name.trim().is_empty() {
            return Err(BulletError::Config("calendar name must not be empty".into()));
        }
        if self.name.contains(['/', '\\']) {
            return Err(BulletError::Config(format!(
                "calendar name '{}' cannot contain path separators",
                self.name
            )));
        }
        if self.domain.trim().is_empty() || self.domain.contains('@') {
            return Err(BulletError::Config(format!(
                "'{}' is not a usable attendee domain",
                self.domain
            )));
        }
        Ok(())
    }

    /// File name of the generated calendar, e.g. `Bullet Sailing Schedule.ics`.
    pub fn file_name(&self) -> String {
        format!("{}.ics", self.name)
    }

    pub fn output_path(&self, dir: &Path) -> PathBuf {
        dir.join(self.file_name())
    }
}
