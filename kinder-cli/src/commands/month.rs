use anyhow::{Context, Result};
use kinder_core::{CalendarCell, MonthCursor};
use owo_colors::OwoColorize;
use serde::Serialize;

use crate::app::App;
use crate::render::{render_grid, render_month_events, render_month_title};

#[derive(Serialize)]
struct MonthView {
    month: MonthCursor,
    today: chrono::NaiveDate,
    cells: Vec<CalendarCell>,
}

pub fn run(app: &App, month: Option<&str>, offset: i32, json: bool) -> Result<()> {
    let mut vm = app.view_model()?;

    if let Some(month) = month {
        vm = vm.with_month(MonthCursor::parse(month)?);
    }

    for _ in 0..offset.unsigned_abs() {
        if offset > 0 {
            vm.go_to_next_month()?;
        } else {
            vm.go_to_previous_month()?;
        }
    }

    let cells = vm.grid();

    if json {
        let view = MonthView {
            month: vm.month(),
            today: vm.today(),
            cells,
        };
        let out = serde_json::to_string_pretty(&view).context("Failed to serialize month")?;
        println!("{}", out);
        return Ok(());
    }

    println!("{}", render_month_title(vm.month(), app.locale()).bold());
    println!("{}", render_grid(&cells, app.locale()));

    let listed = render_month_events(&cells, &vm.timezone());
    if listed.is_empty() {
        println!("\n{}", "No events this month".dimmed());
    } else {
        println!();
        for line in listed {
            println!("{}", line);
        }
    }

    Ok(())
}
