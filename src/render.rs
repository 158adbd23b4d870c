//! Terminal rendering for schedule types.

use bullet_core::{AttendanceStatus, Attendee, Event};
use owo_colors::OwoColorize;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for AttendanceStatus {
    fn render(&self) -> String {
        let label = self.to_string();
        match self {
            AttendanceStatus::Confirmed => label.green().to_string(),
            AttendanceStatus::Declined => label.red().to_string(),
            AttendanceStatus::Maybe => label.yellow().to_string(),
            AttendanceStatus::NoResponse => label.dimmed().to_string(),
        }
    }
}

impl Render for Attendee {
    fn render(&self) -> String {
        format!("{}: {}", self.name, self.status.render())
    }
}

impl Render for Event {
    fn render(&self) -> String {
        let when = format!(
            "{} to {}",
            self.start.format("%a %-d %b %Y %H:%M"),
            self.end.format("%H:%M")
        );
        let crew: Vec<String> = self.attendees.iter().map(Render::render).collect();

        format!(
            "{}\n   {}\n   {}\n   {}",
            self.name.bold(),
            when,
            self.location.dimmed(),
            crew.join(", ")
        )
    }
}
