//! Pipeline Event Logger
//!
//! Structured per-request events (extraction, strategy attempts, item outcomes,
//! upstream failures) emitted through `tracing` so they land in the NDJSON log.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;

use crate::redact::redact_sensitive_data;

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PipelineEvent {
    ItemsExtracted {
        count: usize,
        placeholder: bool,
    },
    StrategyAttempt {
        dish: String,
        query: String,
        candidates: usize,
    },
    ItemResolved {
        item: String,
        outcome: String,
        image: Option<String>,
    },
    UpstreamError {
        stage: String,
        error_msg: String,
    },
}

#[derive(Debug, Serialize)]
pub struct EventLogEntry {
    pub request_id: String,
    pub timestamp: DateTime<Utc>,
    pub event: PipelineEvent,
}

impl EventLogEntry {
    /// Build an entry, scrubbing any free-text error message first.
    pub fn new(request_id: &str, mut event: PipelineEvent) -> Self {
        if let PipelineEvent::UpstreamError { error_msg, .. } = &mut event {
            *error_msg = redact_sensitive_data(error_msg);
        }
        Self {
            request_id: request_id.into(),
            timestamp: Utc::now(),
            event,
        }
    }
}

pub struct PipelineEventLogger;

impl PipelineEventLogger {
    /// Logs a pipeline event, immediately serializing it to the tracing system.
    pub fn log_event(request_id: &str, event: PipelineEvent) {
        let entry = EventLogEntry::new(request_id, event);
        let json = serde_json::to_string(&entry).unwrap_or_default();
        info!(target: "menu_events", request_id = %entry.request_id, event = %json, "Pipeline event");
    }
}
