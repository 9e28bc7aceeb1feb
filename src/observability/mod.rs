//! Observability for the trivia service
//!
//! - Structured logging (one JSON object per line)
//! - Monotonic counters, served at `/metrics`
//!
//! # Usage
//!
//! ```ignore
//! use trivia::observability::{log_event_with_fields, Event, MetricsRegistry};
//!
//! log_event_with_fields(Event::QuestionDeleted, &[("id", "2")]);
//!
//! let metrics = MetricsRegistry::new();
//! metrics.increment_questions_deleted();
//! ```

mod events;
mod logger;
mod metrics;

pub use events::Event;
pub use logger::{Logger, Severity};
pub use metrics::{MetricsRegistry, MetricsSnapshot};

/// Log a lifecycle event with fields
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    let severity = if event.is_fatal() {
        Severity::Fatal
    } else {
        Severity::Info
    };
    Logger::log(severity, event.as_str(), fields);
}
