//! Copy-on-write helpers over event collections.
//!
//! The calendar never edits an event in place: every change produces a new
//! collection, which is then handed back to the view model wholesale.

use std::collections::HashSet;

use crate::error::{KinderError, KinderResult};
use crate::event::Event;

/// Fail on the first id that appears twice.
pub fn ensure_unique_ids(events: &[Event]) -> KinderResult<()> {
    let mut seen = HashSet::with_capacity(events.len());
    for event in events {
        if !seen.insert(event.id.as_str()) {
            return Err(KinderError::DuplicateEventId(event.id.clone()));
        }
    }
    Ok(())
}

pub fn find_event<'a>(events: &'a [Event], id: &str) -> Option<&'a Event> {
    events.iter().find(|e| e.id == id)
}

/// New collection with `event` appended.
pub fn insert_event(events: &[Event], event: Event) -> KinderResult<Vec<Event>> {
    if find_event(events, &event.id).is_some() {
        return Err(KinderError::DuplicateEventId(event.id));
    }

    let mut next = events.to_vec();
    next.push(event);
    Ok(next)
}

/// New collection with the element sharing `event.id` swapped for `event`, in place.
pub fn replace_event(events: &[Event], event: Event) -> KinderResult<Vec<Event>> {
    let position = events
        .iter()
        .position(|e| e.id == event.id)
        .ok_or_else(|| KinderError::EventNotFound(event.id.clone()))?;

    let mut next = events.to_vec();
    next[position] = event;
    Ok(next)
}

/// New collection without the event `id`.
pub fn remove_event(events: &[Event], id: &str) -> KinderResult<Vec<Event>> {
    if find_event(events, id).is_none() {
        return Err(KinderError::EventNotFound(id.to_string()));
    }

    Ok(events.iter().filter(|e| e.id != id).cloned().collect())
}
