use anyhow::Result;
use kinder_core::Event;
use owo_colors::OwoColorize;

use crate::app::App;
use crate::dates::parse_event_time;

pub fn run(
    app: &App,
    id: &str,
    title: Option<String>,
    date: Option<String>,
    description: Option<String>,
) -> Result<()> {
    if title.is_none() && date.is_none() && description.is_none() {
        println!("{}", "Nothing to update (use --title, --date or --description)".dimmed());
        return Ok(());
    }

    let existing = app.find_event(id)?;

    let date = match date {
        Some(d) => parse_event_time(&d)?,
        None => existing.date.clone(),
    };
    let description = match description {
        Some(d) if d.is_empty() => None,
        Some(d) => Some(d),
        None => existing.description.clone(),
    };
    let title = title.unwrap_or_else(|| existing.title.clone());

    let updated = Event::with_id(existing.id, &title, date, description)?;
    app.service.update(updated)?;

    Ok(())
}
