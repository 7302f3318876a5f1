use anyhow::Result;
use dialoguer::Confirm;
use owo_colors::OwoColorize;

use crate::app::App;
use crate::render::render_event_details;

pub fn run(app: &App, id: &str, yes: bool) -> Result<()> {
    let event = app.find_event(id)?;

    if !yes {
        println!("{}", render_event_details(&event));
        println!();
        let confirmed = Confirm::new()
            .with_prompt("Delete this event?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".dimmed());
            return Ok(());
        }
    }

    app.service.delete(&event.id)?;
    Ok(())
}
