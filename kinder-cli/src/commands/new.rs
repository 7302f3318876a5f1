use anyhow::Result;
use dialoguer::Input;
use kinder_core::{Event, EventTime};
use owo_colors::OwoColorize;

use crate::app::App;
use crate::dates::parse_event_time;

pub fn run(
    app: &App,
    title: Option<String>,
    date: Option<String>,
    description: Option<String>,
) -> Result<()> {
    let interactive = title.is_none() || date.is_none();

    let title = match title {
        Some(t) => t,
        None => Input::<String>::new()
            .with_prompt("  Title")
            .interact_text()?,
    };

    let date = match date {
        Some(d) => parse_event_time(&d)?,
        None => prompt_date("  When?")?,
    };

    let description = match description {
        Some(d) => Some(d),
        None if interactive => {
            let d: String = Input::new()
                .with_prompt("  Description (skip)")
                .default(String::new())
                .show_default(false)
                .interact_text()?;
            Some(d)
        }
        None => None,
    }
    .filter(|d| !d.is_empty());

    let event = Event::new(&title, date, description)?;

    if interactive {
        println!();
    }
    app.service.create(event)?;

    Ok(())
}

/// Ask until the answer parses.
fn prompt_date(prompt: &str) -> Result<EventTime> {
    loop {
        let input: String = Input::new().with_prompt(prompt).interact_text()?;
        match parse_event_time(&input) {
            Ok(time) => return Ok(time),
            Err(e) => eprintln!("  {}", e.to_string().red()),
        }
    }
}
