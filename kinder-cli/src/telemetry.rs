//! Log output to stderr.
//!
//! The level comes from `-v` unless `KINDER_LOG` holds a filter directive
//! (e.g. `KINDER_LOG=kinder_core=debug`).

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

const LOG_ENV_VAR: &str = "KINDER_LOG";

fn level_from_verbosity(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

pub fn init(verbosity: u8) {
    let filter = EnvFilter::builder()
        .with_default_directive(level_from_verbosity(verbosity).into())
        .with_env_var(LOG_ENV_VAR)
        .from_env_lossy();

    // A subscriber may already be installed (tests); keep it.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init();
}
