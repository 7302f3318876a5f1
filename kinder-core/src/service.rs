//! Event CRUD on top of the store, with user notifications.
//!
//! Each mutation is checked against the current snapshot first, then written
//! to the store. The refreshed collection is returned so the caller can hand
//! it to `CalendarViewModel::set_events`.

use crate::collection::{find_event, insert_event, remove_event, replace_event};
use crate::error::{KinderError, KinderResult};
use crate::event::Event;
use crate::notify::{Action, Notification, Notifier};
use crate::store::EventStore;

pub struct EventService<N: Notifier> {
    store: EventStore,
    notifier: N,
}

impl<N: Notifier> EventService<N> {
    pub fn new(store: EventStore, notifier: N) -> Self {
        EventService { store, notifier }
    }

    pub fn store(&self) -> &EventStore {
        &self.store
    }

    pub fn events(&self) -> KinderResult<Vec<Event>> {
        self.store.load()
    }

    pub fn get(&self, id: &str) -> KinderResult<Event> {
        self.store.get(id)
    }

    pub fn create(&self, event: Event) -> KinderResult<Vec<Event>> {
        let result = self.events().and_then(|current| {
            let title = event.title.clone();
            let next = insert_event(&current, event)?;
            if let Some(created) = next.last() {
                self.store.create(created)?;
            }
            Ok((title, next))
        });
        self.finish(Action::Create, result)
    }

    pub fn update(&self, event: Event) -> KinderResult<Vec<Event>> {
        let result = self.events().and_then(|current| {
            let (id, title) = (event.id.clone(), event.title.clone());
            let next = replace_event(&current, event)?;
            if let Some(updated) = find_event(&next, &id) {
                self.store.update(updated)?;
            }
            Ok((title, next))
        });
        self.finish(Action::Update, result)
    }

    pub fn delete(&self, id: &str) -> KinderResult<Vec<Event>> {
        let result = self.events().and_then(|current| {
            let title = find_event(&current, id)
                .map(|e| e.title.clone())
                .ok_or_else(|| KinderError::EventNotFound(id.to_string()))?;
            let next = remove_event(&current, id)?;
            self.store.delete(id)?;
            Ok((title, next))
        });
        self.finish(Action::Delete, result)
    }

    fn finish(
        &self,
        action: Action,
        result: KinderResult<(String, Vec<Event>)>,
    ) -> KinderResult<Vec<Event>> {
        match result {
            Ok((title, events)) => {
                let notification = match action {
                    Action::Create => Notification::Created { title },
                    Action::Update => Notification::Updated { title },
                    Action::Delete => Notification::Deleted { title },
                };
                self.notifier.notify(&notification);
                Ok(events)
            }
            Err(e) => {
                self.notifier.notify(&Notification::Failed {
                    action,
                    reason: e.to_string(),
                });
                Err(e)
            }
        }
    }
}
