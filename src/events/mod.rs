//! Synchronous publish/subscribe event bus.
//!
//! Named topics map to ordered subscriber lists. Publishing invokes every
//! subscriber for the topic synchronously, in registration order. There is
//! no unsubscribe and no topic-pattern matching; subscribing the same
//! callback twice yields two invocations per publish.

use crate::errors::AgentError;
use parking_lot::RwLock;
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Well-known topic names published by the orchestrator.
pub mod topics {
    /// Published once with `{stage, error}` when the workflow chain aborts.
    pub const WORKFLOW_ERROR: &str = "workflow_error";
    /// Published with the profile payload after the profile stage.
    pub const PROFILE_COMPLETED: &str = "profile_completed";
    /// Published with the assessment report after the assessment stage.
    pub const ASSESSMENT_COMPLETED: &str = "assessment_completed";
    /// Published with the recommendation set after the recommender stage.
    pub const RECOMMENDER_COMPLETED: &str = "recommender_completed";
    /// Published with the tracking plan after the tracker stage.
    pub const TRACKER_COMPLETED: &str = "tracker_completed";
    /// Published with the hackathon board by `run_hackathon_stage`.
    pub const HACKATHON_COMPLETED: &str = "hackathon_completed";
    /// Published with the leaderboard view by `run_leaderboard_stage`.
    pub const LEADERBOARD_COMPLETED: &str = "leaderboard_completed";
}

/// A registered event callback.
pub type Subscriber = Arc<dyn Fn(&Value) -> Result<(), AgentError> + Send + Sync>;

/// A process-wide publish/subscribe registry.
///
/// Shared behind the orchestrator; all mutation goes through
/// [`EventBus::subscribe`]. Subscriber errors propagate fail-fast: the
/// first callback to return `Err` aborts the remaining invocations for
/// that publish call.
#[derive(Default)]
pub struct EventBus {
    subscribers: RwLock<HashMap<String, Vec<Subscriber>>>,
}

impl EventBus {
    /// Creates an empty bus.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `callback` at the end of `topic`'s subscriber list,
    /// creating the topic if absent.
    ///
    /// Registration is additive only; there is no unsubscribe.
    pub fn subscribe<F>(&self, topic: impl Into<String>, callback: F)
    where
        F: Fn(&Value) -> Result<(), AgentError> + Send + Sync + 'static,
    {
        self.subscribers
            .write()
            .entry(topic.into())
            .or_default()
            .push(Arc::new(callback));
    }

    /// Invokes every subscriber for `topic` in registration order.
    ///
    /// The subscriber list is cloned out of the lock before invocation, so
    /// callbacks may subscribe re-entrantly; such additions take effect on
    /// the next publish. The first callback error aborts the rest and
    /// propagates to the publisher.
    pub fn publish(&self, topic: &str, payload: &Value) -> Result<(), AgentError> {
        let callbacks = {
            let table = self.subscribers.read();
            table.get(topic).cloned().unwrap_or_default()
        };
        for callback in callbacks {
            callback(payload)?;
        }
        Ok(())
    }

    /// Number of subscribers registered for `topic`.
    #[must_use]
    pub fn subscriber_count(&self, topic: &str) -> usize {
        self.subscribers
            .read()
            .get(topic)
            .map_or(0, Vec::len)
    }

    /// All topic names with at least one subscriber.
    #[must_use]
    pub fn topics(&self) -> Vec<String> {
        self.subscribers.read().keys().cloned().collect()
    }
}

impl fmt::Debug for EventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let table = self.subscribers.read();
        let mut counts: Vec<(String, usize)> = table
            .iter()
            .map(|(topic, subs)| (topic.clone(), subs.len()))
            .collect();
        counts.sort();
        f.debug_struct("EventBus").field("topics", &counts).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn publish_invokes_subscriber_synchronously() {
        let bus = EventBus::new();
        let seen = Arc::new(Mutex::new(Vec::new()));

        let sink = seen.clone();
        bus.subscribe("profile_completed", move |payload| {
            sink.lock().push(payload.clone());
            Ok(())
        });

        bus.publish("profile_completed", &json!({"skills": ["Rust"]}))
            .unwrap();

        // Delivery happens before publish returns.
        assert_eq!(seen.lock().len(), 1);
        assert_eq!(seen.lock()[0], json!({"skills": ["Rust"]}));
    }

    #[test]
    fn subscribers_fire_in_registration_order() {
        let bus = EventBus::new();
        let order = Arc::new(Mutex::new(Vec::new()));

        for label in ["first", "second", "third"] {
            let sink = order.clone();
            bus.subscribe("t", move |_| {
                sink.lock().push(label);
                Ok(())
            });
        }

        bus.publish("t", &Value::Null).unwrap();
        assert_eq!(*order.lock(), vec!["first", "second", "third"]);
    }

    #[test]
    fn duplicate_subscription_fires_twice() {
        let bus = EventBus::new();
        let count = Arc::new(Mutex::new(0_u32));

        for _ in 0..2 {
            let sink = count.clone();
            bus.subscribe("t", move |_| {
                *sink.lock() += 1;
                Ok(())
            });
        }

        bus.publish("t", &Value::Null).unwrap();
        assert_eq!(*count.lock(), 2);
        assert_eq!(bus.subscriber_count("t"), 2);
    }

    #[test]
    fn publish_to_unknown_topic_is_a_noop() {
        let bus = EventBus::new();
        bus.publish("nobody_listens", &Value::Null).unwrap();
        assert_eq!(bus.subscriber_count("nobody_listens"), 0);
    }

    #[test]
    fn subscriber_error_aborts_remaining_subscribers() {
        let bus = EventBus::new();
        let reached = Arc::new(Mutex::new(false));

        bus.subscribe("t", |_| {
            Err(AgentError::Subscriber {
                topic: "t".to_string(),
                message: "rejected".to_string(),
            })
        });
        let sink = reached.clone();
        bus.subscribe("t", move |_| {
            *sink.lock() = true;
            Ok(())
        });

        let err = bus.publish("t", &Value::Null).unwrap_err();
        assert!(err.to_string().contains("rejected"));
        assert!(!*reached.lock());
    }

    #[test]
    fn reentrant_subscribe_takes_effect_next_publish() {
        let bus = Arc::new(EventBus::new());
        let count = Arc::new(Mutex::new(0_u32));

        let bus_ref = bus.clone();
        let sink = count.clone();
        bus.subscribe("t", move |_| {
            let inner = sink.clone();
            bus_ref.subscribe("t", move |_| {
                *inner.lock() += 1;
                Ok(())
            });
            Ok(())
        });

        bus.publish("t", &Value::Null).unwrap();
        assert_eq!(*count.lock(), 0);

        bus.publish("t", &Value::Null).unwrap();
        assert_eq!(*count.lock(), 1);
    }
}
