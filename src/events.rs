//! Typed UI events and the dispatcher routing them to registered handlers
//!
//! Handlers are registered per [`EventKind`] and receive events in
//! registration order. Registration hands back a [`HandlerId`] used to tear
//! the handler down again.

use std::{
    collections::HashMap,
    fmt::Display,
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc,
    },
};

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::FilterForm;

/// Something the user did on the page
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    /// Initial page load
    PageLoaded,
    /// Preference form submitted; `count` is the raw control value
    RecommendationSubmitted { preferences: String, count: String },
    /// Explicit "Apply Filters" action
    FiltersApplied(FilterForm),
    /// One of the filter controls changed
    FilterChanged(FilterForm),
    ThemeToggled,
    ToastDismissed(Uuid),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    PageLoaded,
    RecommendationSubmitted,
    FiltersApplied,
    FilterChanged,
    ThemeToggled,
    ToastDismissed,
}

impl EventKind {
    pub const ALL: [EventKind; 6] = [
        EventKind::PageLoaded,
        EventKind::RecommendationSubmitted,
        EventKind::FiltersApplied,
        EventKind::FilterChanged,
        EventKind::ThemeToggled,
        EventKind::ToastDismissed,
    ];
}

impl UiEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            UiEvent::PageLoaded => EventKind::PageLoaded,
            UiEvent::RecommendationSubmitted { .. } => EventKind::RecommendationSubmitted,
            UiEvent::FiltersApplied(_) => EventKind::FiltersApplied,
            UiEvent::FilterChanged(_) => EventKind::FilterChanged,
            UiEvent::ThemeToggled => EventKind::ThemeToggled,
            UiEvent::ToastDismissed(_) => EventKind::ToastDismissed,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HandlerId(u64);

impl Display for HandlerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "handler-{}", self.0)
    }
}

/// Receives dispatched events; failures are the handler's to report
#[async_trait::async_trait]
pub trait EventHandler: Send + Sync {
    async fn handle(&self, event: &UiEvent);
}

type Registry = HashMap<EventKind, Vec<(HandlerId, Arc<dyn EventHandler>)>>;

#[derive(Default)]
pub struct Dispatcher {
    handlers: RwLock<Registry>,
    next_id: AtomicU64,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn register(&self, kind: EventKind, handler: Arc<dyn EventHandler>) -> HandlerId {
        let id = HandlerId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.handlers
            .write()
            .await
            .entry(kind)
            .or_default()
            .push((id, handler));

        tracing::debug!(handler = %id, kind = ?kind, "Handler registered");
        id
    }

    /// Removes one handler; false if it was not registered
    pub async fn unregister(&self, id: HandlerId) -> bool {
        let mut handlers = self.handlers.write().await;
        let mut removed = false;
        for entries in handlers.values_mut() {
            let before = entries.len();
            entries.retain(|(entry_id, _)| *entry_id != id);
            removed |= entries.len() != before;
        }
        if removed {
            tracing::debug!(handler = %id, "Handler unregistered");
        }
        removed
    }

    /// Removes a batch of handlers, returning how many were still registered
    pub async fn teardown(&self, ids: &[HandlerId]) -> usize {
        let mut count = 0;
        for id in ids {
            if self.unregister(*id).await {
                count += 1;
            }
        }
        count
    }

    /// Runs every handler registered for the event's kind; returns how many ran
    pub async fn dispatch(&self, event: &UiEvent) -> usize {
        // Snapshot so handlers may (un)register without deadlocking.
        let targets: Vec<Arc<dyn EventHandler>> = self
            .handlers
            .read()
            .await
            .get(&event.kind())
            .map(|entries| entries.iter().map(|(_, h)| Arc::clone(h)).collect())
            .unwrap_or_default();

        if targets.is_empty() {
            tracing::warn!(kind = ?event.kind(), "No handler registered for event");
        }

        for handler in &targets {
            handler.handle(event).await;
        }
        targets.len()
    }

    pub async fn handler_count(&self, kind: EventKind) -> usize {
        self.handlers
            .read()
            .await
            .get(&kind)
            .map(Vec::len)
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct Recorder {
        name: &'static str,
        log: Arc<Mutex<Vec<String>>>,
    }

    #[async_trait::async_trait]
    impl EventHandler for Recorder {
        async fn handle(&self, event: &UiEvent) {
            self.log
                .lock()
                .unwrap()
                .push(format!("{}:{:?}", self.name, event.kind()));
        }
    }

    fn recorder(name: &'static str, log: &Arc<Mutex<Vec<String>>>) -> Arc<dyn EventHandler> {
        Arc::new(Recorder {
            name,
            log: Arc::clone(log),
        })
    }

    #[tokio::test]
    async fn test_dispatch_in_registration_order() {
        let dispatcher = Dispatcher::new();
        let log = Arc::new(Mutex::new(Vec::new()));
        dispatcher
            .register(EventKind::ThemeToggled, recorder("first", &log))
            .await;
        dispatcher
            .register(EventKind::ThemeToggled, recorder("second", &log))
            .await;
        dispatcher
            .register(EventKind::PageLoaded, recorder("other", &log))
            .await;

        let ran = dispatcher.dispatch(&UiEvent::ThemeToggled).await;

        assert_eq!(ran, 2);
        assert_eq!(
            *log.lock().unwrap(),
            vec!["first:ThemeToggled", "second:ThemeToggled"]
        );
    }

    #[tokio::test]
    async fn test_unregistered_handler_stops_receiving() {
        let dispatcher = Dispatcher::new();
        let log = Arc::new(Mutex::new(Vec::new()));
        let id = dispatcher
            .register(EventKind::PageLoaded, recorder("loader", &log))
            .await;

        assert!(dispatcher.unregister(id).await);
        assert!(!dispatcher.unregister(id).await);
        assert_eq!(dispatcher.dispatch(&UiEvent::PageLoaded).await, 0);
        assert!(log.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_teardown_removes_batch() {
        let dispatcher = Dispatcher::new();
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut ids = Vec::new();
        for kind in EventKind::ALL {
            ids.push(dispatcher.register(kind, recorder("all", &log)).await);
        }

        assert_eq!(dispatcher.teardown(&ids).await, EventKind::ALL.len());
        for kind in EventKind::ALL {
            assert_eq!(dispatcher.handler_count(kind).await, 0);
        }
    }

    #[test]
    fn test_event_kinds() {
        assert_eq!(
            UiEvent::FilterChanged(FilterForm::default()).kind(),
            EventKind::FilterChanged
        );
        assert_eq!(
            UiEvent::ToastDismissed(Uuid::nil()).kind(),
            EventKind::ToastDismissed
        );
    }
}
