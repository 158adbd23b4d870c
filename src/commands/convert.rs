use std::path::Path;

use anyhow::{Context, Result};
use bullet_core::{CalendarOptions, publish};
use owo_colors::OwoColorize;

use super::read_document;

pub fn run(input: &Path, name: String, domain: String, output_dir: &Path) -> Result<()> {
    let document = read_document(input)?;
    let options = CalendarOptions::new(name, domain)?;

    let path = publish(&document, &options, output_dir)
        .with_context(|| format!("Could not convert {}", input.display()))?;

    println!("{} {}", "Wrote".green(), path.display());
    Ok(())
}
