//! Everything a command needs: config, clock, and the user's event service.

use anyhow::{Context, Result};
use chrono::{DateTime, TimeZone};
use chrono_tz::Tz;
use kinder_core::config::KinderConfig;
use kinder_core::locale::Locale;
use kinder_core::service::EventService;
use kinder_core::store::EventStore;
use kinder_core::{
    CalendarViewModel, Clock, Event, EventTime, FixedClock, KinderError, SystemClock,
};

use crate::notify::TerminalNotifier;

#[derive(Debug, Clone)]
pub enum CliClock {
    System(SystemClock),
    /// `--today` override
    Fixed(FixedClock),
}

impl Clock for CliClock {
    fn now(&self) -> DateTime<Tz> {
        match self {
            CliClock::System(clock) => clock.now(),
            CliClock::Fixed(clock) => clock.now(),
        }
    }
}

pub struct App {
    pub config: KinderConfig,
    pub clock: CliClock,
    pub service: EventService<TerminalNotifier>,
}

impl App {
    pub fn load(user: Option<String>, today: Option<&str>) -> Result<Self> {
        let mut config = KinderConfig::load().context("Failed to load configuration")?;
        if let Some(user) = user {
            config.user = user;
        }

        let tz = config.timezone()?;
        let clock = match today {
            Some(input) => CliClock::Fixed(FixedClock(start_of(input, tz)?)),
            None => CliClock::System(SystemClock::new(tz)),
        };

        let store = EventStore::open(&config.data_path(), &config.user)?;
        let service = EventService::new(store, TerminalNotifier);
        tracing::debug!(dir = %service.store().dir().display(), %tz, "opened event store");

        Ok(App {
            config,
            clock,
            service,
        })
    }

    pub fn locale(&self) -> Locale {
        self.config.locale
    }

    /// A view model on the current month, holding every stored event.
    pub fn view_model(&self) -> Result<CalendarViewModel<CliClock>> {
        let events = self
            .service
            .events()
            .with_context(|| format!("Failed to read events for '{}'", self.config.user))?;

        let mut vm = CalendarViewModel::new(self.clock.clone());
        vm.set_events(events)?;
        Ok(vm)
    }

    /// Look up an event by its full id or by a unique prefix of it.
    pub fn find_event(&self, id: &str) -> Result<Event> {
        match self.service.get(id) {
            Err(KinderError::EventNotFound(_)) => {
                let events = self.service.events()?;
                resolve_id(&events, id).cloned()
            }
            found => Ok(found?),
        }
    }
}

fn resolve_id<'a>(events: &'a [Event], id: &str) -> Result<&'a Event> {
    if let Some(exact) = events.iter().find(|e| e.id == id) {
        return Ok(exact);
    }

    let matches: Vec<&Event> = events.iter().filter(|e| e.id.starts_with(id)).collect();
    match matches.as_slice() {
        [] => anyhow::bail!("No event with id '{}'", id),
        [only] => Ok(*only),
        many => anyhow::bail!(
            "'{}' matches {} events, use more of the id: {}",
            id,
            many.len(),
            many.iter().map(|e| e.id.as_str()).collect::<Vec<_>>().join(", ")
        ),
    }
}

/// `input` (date or date/time) as an instant in `tz`.
fn start_of(input: &str, tz: Tz) -> Result<DateTime<Tz>> {
    let local = EventTime::parse(input)?.local_datetime_in(&tz);
    tz.from_local_datetime(&local)
        .earliest()
        .with_context(|| format!("{} does not exist in {}", local, tz))
}
