//! Event Bus implementation.
//!
//! Each editor owns its own bus; there is no global instance, so several
//! editors can coexist without seeing each other's notifications.

use std::sync::Arc;
use std::time::Instant;
use uuid::Uuid;

use super::events::{EditorEvent, EventKind};
use crate::listener::{dispatch_to_listener, PolygonEditorListener};
use crate::types::{
    thread_safe_deque, thread_safe_rw_map, thread_safe_vec, ThreadSafeDeque, ThreadSafeRwMap,
    ThreadSafeVec,
};

/// Subscription handle for unsubscribing from events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(Uuid);

impl SubscriptionId {
    /// Create a new unique subscription ID
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Sub({})", &self.0.to_string()[..8])
    }
}

/// Filter to receive only specific event types
#[derive(Debug, Clone, Default)]
pub enum EventFilter {
    /// Receive all events.
    #[default]
    All,
    /// Receive events matching any of these kinds.
    Kinds(Vec<EventKind>),
}

impl EventFilter {
    /// Check if an event matches this filter
    pub fn matches(&self, event: &EditorEvent) -> bool {
        match self {
            EventFilter::All => true,
            EventFilter::Kinds(kinds) => kinds.contains(&event.kind()),
        }
    }
}

/// Type alias for event handler functions
type EventHandler = Box<dyn Fn(&EditorEvent) + Send + Sync>;

/// Configuration for the event bus
#[derive(Debug, Clone)]
pub struct EventBusConfig {
    /// Whether to keep event history.
    pub enable_history: bool,
    /// Maximum number of events to retain in history.
    pub max_history_size: usize,
}

impl Default for EventBusConfig {
    fn default() -> Self {
        Self {
            enable_history: false,
            max_history_size: 1000,
        }
    }
}

/// Event with timestamp for history
#[derive(Debug, Clone)]
struct TimestampedEvent {
    event: EditorEvent,
    timestamp: Instant,
}

/// Error types for event bus operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EventBusError {
    /// No subscribers are listening
    #[error("No active subscribers")]
    NoSubscribers,
}

/// Synchronous publish/subscribe hub for editor notifications
///
/// Handlers run on the publishing thread, in no particular order relative to
/// each other, before `publish` returns. A handler must not subscribe or
/// unsubscribe on the bus that is calling it.
pub struct EventBus {
    /// Registered synchronous handlers
    handlers: ThreadSafeRwMap<SubscriptionId, (EventFilter, EventHandler)>,
    /// Event history (optional)
    history: ThreadSafeDeque<TimestampedEvent>,
    /// Configuration
    config: EventBusConfig,
}

impl EventBus {
    /// Create a new event bus with default configuration
    pub fn new() -> Self {
        Self::with_config(EventBusConfig::default())
    }

    /// Create a new event bus with custom configuration
    pub fn with_config(config: EventBusConfig) -> Self {
        Self {
            handlers: thread_safe_rw_map(),
            history: thread_safe_deque(),
            config,
        }
    }

    /// Publish an event to all subscribers
    ///
    /// Returns the number of handlers that received the event, or
    /// `NoSubscribers` when nobody is listening. The event is recorded in
    /// history either way.
    pub fn publish(&self, event: EditorEvent) -> Result<usize, EventBusError> {
        if self.config.enable_history {
            self.add_to_history(&event);
        }

        let handlers = self.handlers.read();
        if handlers.is_empty() {
            return Err(EventBusError::NoSubscribers);
        }

        let mut delivered = 0;
        for (filter, handler) in handlers.values() {
            if filter.matches(&event) {
                handler(&event);
                delivered += 1;
            }
        }
        Ok(delivered)
    }

    /// Subscribe to events with a synchronous handler
    pub fn subscribe<F>(&self, filter: EventFilter, handler: F) -> SubscriptionId
    where
        F: Fn(&EditorEvent) + Send + Sync + 'static,
    {
        let id = SubscriptionId::new();
        self.handlers.write().insert(id, (filter, Box::new(handler)));
        tracing::debug!("Subscription {} added", id);
        id
    }

    /// Subscribe a listener to every event
    pub fn subscribe_listener(&self, listener: Arc<dyn PolygonEditorListener>) -> SubscriptionId {
        self.subscribe(EventFilter::All, move |event| {
            dispatch_to_listener(listener.as_ref(), event)
        })
    }

    /// Subscribe a handler that collects matching events into a shared vector
    pub fn record(&self, filter: EventFilter) -> (SubscriptionId, ThreadSafeVec<EditorEvent>) {
        let log = thread_safe_vec();
        let sink = log.clone();
        let id = self.subscribe(filter, move |event| sink.lock().push(event.clone()));
        (id, log)
    }

    /// Unsubscribe from events
    ///
    /// Returns true if the subscription was found and removed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let removed = self.handlers.write().remove(&id).is_some();
        if removed {
            tracing::debug!("Subscription {} removed", id);
        }
        removed
    }

    /// Get the number of active subscriptions
    pub fn subscriber_count(&self) -> usize {
        self.handlers.read().len()
    }

    /// Get recent event history (if enabled)
    ///
    /// Returns events since the given instant, or all history if None.
    pub fn history(&self, since: Option<Instant>) -> Vec<EditorEvent> {
        if !self.config.enable_history {
            return Vec::new();
        }

        let history = self.history.lock();
        match since {
            Some(since) => history
                .iter()
                .filter(|e| e.timestamp >= since)
                .map(|e| e.event.clone())
                .collect(),
            None => history.iter().map(|e| e.event.clone()).collect(),
        }
    }

    /// Clear event history
    pub fn clear_history(&self) {
        self.history.lock().clear();
    }

    /// Get the current configuration
    pub fn config(&self) -> &EventBusConfig {
        &self.config
    }

    /// Add an event to history, maintaining the size limit
    fn add_to_history(&self, event: &EditorEvent) {
        let mut history = self.history.lock();
        history.push_back(TimestampedEvent {
            event: event.clone(),
            timestamp: Instant::now(),
        });

        while history.len() > self.config.max_history_size {
            history.pop_front();
        }
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("subscribers", &self.subscriber_count())
            .field("config", &self.config)
            .finish()
    }
}
