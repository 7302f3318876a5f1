use anyhow::{Context, Result};
use owo_colors::OwoColorize;

use crate::app::App;
use crate::render::render_upcoming;

pub fn run(app: &App, limit: Option<usize>, json: bool) -> Result<()> {
    let vm = app.view_model()?;

    let mut upcoming = vm.upcoming();
    if let Some(limit) = limit.or(app.config.upcoming_limit) {
        upcoming.truncate(limit);
    }

    if json {
        let out = serde_json::to_string_pretty(&upcoming).context("Failed to serialize events")?;
        println!("{}", out);
        return Ok(());
    }

    if upcoming.is_empty() {
        println!("{}", "No upcoming events".dimmed());
        return Ok(());
    }

    println!(
        "{}",
        render_upcoming(&upcoming, vm.today(), &vm.timezone(), app.locale())
    );
    Ok(())
}
