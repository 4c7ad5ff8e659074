//! Telemetry and structured logging components for MenuLens.
//!
//! Handles log redaction, console and rolling NDJSON output, and per-item pipeline event logging.

pub mod event_logger;
pub mod logger;
pub mod redact;

pub use event_logger::{EventLogEntry, PipelineEvent, PipelineEventLogger};
pub use logger::{LoggerGuard, init_logger};
pub use redact::redact_sensitive_data;
