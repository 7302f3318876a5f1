mod app;
mod commands;
mod dates;
mod notify;
mod render;
mod telemetry;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::app::App;

#[derive(Parser)]
#[command(name = "kinder")]
#[command(about = "KinderCRM calendar: monthly view, upcoming events and event editing")]
struct Cli {
    /// Open this user's calendar instead of the configured one
    #[arg(short, long, global = true)]
    user: Option<String>,

    /// Pretend today is this date (YYYY-MM-DD)
    #[arg(long, global = true)]
    today: Option<String>,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a month grid with its events
    Month {
        /// Month to show (YYYY-MM). Defaults to the current month
        month: Option<String>,

        /// Move this many months forward (negative for back)
        #[arg(short, long, default_value_t = 0, allow_hyphen_values = true)]
        offset: i32,

        /// Print the grid as JSON
        #[arg(long)]
        json: bool,
    },
    /// List events from today on
    Upcoming {
        /// Show at most this many events
        #[arg(short, long)]
        limit: Option<usize>,

        /// Print the list as JSON
        #[arg(long)]
        json: bool,
    },
    /// Create an event (prompts for anything missing)
    New {
        title: Option<String>,

        /// Date or date/time (e.g. "2025-06-17", "2025-06-17T09:30", "next friday")
        #[arg(short, long)]
        date: Option<String>,

        #[arg(long)]
        description: Option<String>,
    },
    /// Change an existing event
    Update {
        id: String,

        #[arg(short, long)]
        title: Option<String>,

        #[arg(short, long)]
        date: Option<String>,

        /// New description ("" to clear)
        #[arg(long)]
        description: Option<String>,
    },
    /// Delete an event
    Delete {
        id: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Show configuration paths and settings, or change them
    Config {
        /// Change a setting, e.g. `--set locale=es` (repeatable; `key=` resets)
        #[arg(long = "set", value_name = "KEY=VALUE")]
        set: Vec<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    telemetry::init(cli.verbose);

    let user = cli.user;
    let today = cli.today;
    let load = || App::load(user.clone(), today.as_deref());

    match cli.command {
        Commands::Month {
            month,
            offset,
            json,
        } => commands::month::run(&load()?, month.as_deref(), offset, json),
        Commands::Upcoming { limit, json } => commands::upcoming::run(&load()?, limit, json),
        Commands::New {
            title,
            date,
            description,
        } => commands::new::run(&load()?, title, date, description),
        Commands::Update {
            id,
            title,
            date,
            description,
        } => commands::update::run(&load()?, &id, title, date, description),
        Commands::Delete { id, yes } => commands::delete::run(&load()?, &id, yes),
        Commands::Config { set } => commands::config::run(user.as_deref(), &set),
    }
}
