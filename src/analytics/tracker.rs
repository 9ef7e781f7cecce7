//! Behavioral analytics emission. The tracker is constructed once and
//! carried in `AppState`; without a project key every call is a no-op, and
//! emission is fire-and-forget so a dead queue can never fail a request.
//! The user identity lives on each cheap `with_identity` handle, never in
//! shared state, so concurrent clients cannot stamp each other's events.

use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::cache::redis as cache;
use crate::config::Config;

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct AnalyticsEvent {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    pub properties: Value,
    pub timestamp: String,
}

enum Sink {
    /// Events queued for the session-replay exporter.
    Redis { client: redis::Client, queue: String },
    /// Test sink; emitted events can be inspected.
    Memory(Mutex<Vec<AnalyticsEvent>>),
}

#[derive(Clone)]
pub struct Tracker {
    sink: Option<Arc<Sink>>,
    identity: Option<String>,
}

impl Tracker {
    pub fn from_config(config: &Config, client: redis::Client) -> Self {
        match config.analytics_project_key {
            Some(ref key) if !key.trim().is_empty() => Tracker {
                sink: Some(Arc::new(Sink::Redis {
                    client,
                    queue: config.analytics_queue.clone(),
                })),
                identity: None,
            },
            _ => {
                tracing::warn!("Analytics project key is not set; tracking disabled");
                Self::disabled()
            }
        }
    }

    pub fn disabled() -> Self {
        Tracker {
            sink: None,
            identity: None,
        }
    }

    pub fn in_memory() -> Self {
        Tracker {
            sink: Some(Arc::new(Sink::Memory(Mutex::new(Vec::new())))),
            identity: None,
        }
    }

    /// Handle sharing this tracker's sink but carrying its own identity.
    /// Events emitted through it are stamped with that user; the base
    /// tracker and other handles are unaffected.
    pub fn with_identity(&self, user: Option<&str>) -> Tracker {
        Tracker {
            sink: self.sink.clone(),
            identity: user.map(str::to_string),
        }
    }

    pub fn current_identity(&self) -> Option<String> {
        self.identity.clone()
    }

    pub fn event(&self, name: &str, properties: Value) {
        let sink = match self.sink {
            Some(ref sink) => Arc::clone(sink),
            None => return,
        };

        let event = AnalyticsEvent {
            name: name.to_string(),
            user_id: self.current_identity(),
            properties,
            timestamp: chrono::Utc::now().to_rfc3339(),
        };

        if let Sink::Memory(ref events) = *sink {
            if let Ok(mut events) = events.lock() {
                events.push(event);
            }
            return;
        }

        tokio::spawn(async move {
            let Sink::Redis {
                ref client,
                ref queue,
            } = *sink
            else {
                return;
            };
            let Ok(payload) = serde_json::to_string(&event) else {
                return;
            };
            if let Err(e) = cache::push_list(client, queue, &payload).await {
                tracing::debug!("Dropped analytics event {}: {}", event.name, e);
            }
        });
    }

    /// Events captured by the in-memory sink; empty for other sinks.
    pub fn captured(&self) -> Vec<AnalyticsEvent> {
        match self.sink {
            Some(ref sink) => match **sink {
                Sink::Memory(ref events) => events.lock().map(|e| e.clone()).unwrap_or_default(),
                Sink::Redis { .. } => Vec::new(),
            },
            None => Vec::new(),
        }
    }
}
