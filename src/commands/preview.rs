use std::path::Path;

use anyhow::Result;
use bullet_core::parse_schedule;

use super::read_document;
use crate::render::Render;

pub fn run(input: &Path) -> Result<()> {
    let document = read_document(input)?;
    let events = parse_schedule(&document)?;

    if events.is_empty() {
        println!("No dated rows found in {}", input.display());
        return Ok(());
    }

    for event in &events {
        println!("{}\n", event.render());
    }

    println!("{} events", events.len());
    Ok(())
}
