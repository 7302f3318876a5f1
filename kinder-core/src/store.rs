//! Event storage: one .ics file per event, one directory per user.

use std::path::{Path, PathBuf};

use crate::error::{KinderError, KinderResult};
use crate::event::{Event, EventTime};
use crate::ics::{generate_ics, parse_event};
use crate::utils::slugify;

/// An event together with the file it was read from.
#[derive(Debug, Clone)]
pub struct StoredEvent {
    pub event: Event,
    pub path: PathBuf,
}

/// Events of a single user under `<data_dir>/<user-slug>/`.
#[derive(Debug, Clone)]
pub struct EventStore {
    dir: PathBuf,
}

impl EventStore {
    pub fn open(data_dir: &Path, owner: &str) -> KinderResult<Self> {
        let slug = slugify(owner);
        if slug.is_empty() {
            return Err(KinderError::Store(format!(
                "'{}' cannot be used as a user name",
                owner
            )));
        }

        Ok(EventStore {
            dir: data_dir.join(slug),
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// All events, ordered by file name (date first). A missing directory is an
    /// empty calendar; an unreadable file is an error.
    pub fn load(&self) -> KinderResult<Vec<Event>> {
        Ok(self.entries()?.into_iter().map(|e| e.event).collect())
    }

    pub fn get(&self, id: &str) -> KinderResult<Event> {
        self.find(id)?
            .map(|stored| stored.event)
            .ok_or_else(|| KinderError::EventNotFound(id.to_string()))
    }

    /// Write a new event. Fails if an event with the same id is already stored.
    pub fn create(&self, event: &Event) -> KinderResult<PathBuf> {
        if self.find(&event.id)?.is_some() {
            return Err(KinderError::DuplicateEventId(event.id.clone()));
        }
        self.write(event)
    }

    /// Rewrite an existing event. The file is renamed when date or title change.
    pub fn update(&self, event: &Event) -> KinderResult<PathBuf> {
        let existing = self
            .find(&event.id)?
            .ok_or_else(|| KinderError::EventNotFound(event.id.clone()))?;

        std::fs::remove_file(&existing.path)?;
        self.write(event)
    }

    /// Remove an event and return what was stored.
    pub fn delete(&self, id: &str) -> KinderResult<Event> {
        let existing = self
            .find(id)?
            .ok_or_else(|| KinderError::EventNotFound(id.to_string()))?;

        std::fs::remove_file(&existing.path)?;
        tracing::debug!(id, path = %existing.path.display(), "deleted event file");
        Ok(existing.event)
    }

    fn find(&self, id: &str) -> KinderResult<Option<StoredEvent>> {
        Ok(self.entries()?.into_iter().find(|e| e.event.id == id))
    }

    fn entries(&self) -> KinderResult<Vec<StoredEvent>> {
        if !self.dir.exists() {
            return Ok(Vec::new());
        }

        let mut paths: Vec<PathBuf> = std::fs::read_dir(&self.dir)?
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.extension().is_some_and(|e| e == "ics"))
            .collect();
        paths.sort();

        paths
            .into_iter()
            .map(|path| {
                let content = std::fs::read_to_string(&path)?;
                let event = parse_event(&content).map_err(|e| {
                    KinderError::IcsParse(format!("{}: {}", path.display(), e))
                })?;
                Ok(StoredEvent { event, path })
            })
            .collect()
    }

    fn write(&self, event: &Event) -> KinderResult<PathBuf> {
        std::fs::create_dir_all(&self.dir)?;

        let content = generate_ics(event)?;
        let path = self.dir.join(filename_for(event, &self.dir)?);

        std::fs::write(&path, content)?;
        tracing::debug!(id = %event.id, path = %path.display(), "wrote event file");
        Ok(path)
    }
}

// =============================================================================
// Filename generation
// =============================================================================

/// Generate a unique filename for an event, handling collisions.
fn filename_for(event: &Event, dir: &Path) -> KinderResult<String> {
    let base = base_filename(event);
    let stem = base.trim_end_matches(".ics");

    if !dir.join(&base).exists() {
        return Ok(base);
    }

    for n in 2..=100 {
        let suffixed = format!("{}-{}.ics", stem, n);
        if !dir.join(&suffixed).exists() {
            return Ok(suffixed);
        }
    }

    Err(KinderError::Store(format!(
        "Too many filename collisions for {}",
        base
    )))
}

/// `YYYY-MM-DD__slug.ics`, or `YYYY-MM-DDTHHMM__slug.ics` for timed events
fn base_filename(event: &Event) -> String {
    let slug = slugify(&event.title);
    let slug = if slug.is_empty() { "event".to_string() } else { slug };

    let date = match &event.date {
        EventTime::Date(d) => d.format("%Y-%m-%d").to_string(),
        EventTime::DateTimeUtc(dt) => dt.format("%Y-%m-%dT%H%M").to_string(),
        EventTime::DateTimeFloating(dt) => dt.format("%Y-%m-%dT%H%M").to_string(),
        EventTime::DateTimeZoned { datetime, .. } => datetime.format("%Y-%m-%dT%H%M").to_string(),
    };

    format!("{}__{}.ics", date, slug)
}
