//! Observable events
//!
//! Every structured log line names one of these events.

use std::fmt;

/// Events emitted by the trivia service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Lifecycle
    /// Configuration loaded and validated
    ConfigLoaded,
    /// Store populated from seed data
    StoreSeeded,
    /// Listener bound, serving requests
    ServerStart,
    /// Server failed to start or stopped with an error (FATAL)
    ServerFailed,

    // Catalog writes
    QuestionCreated,
    QuestionDeleted,

    // Quiz
    /// Selector had no unseen question left
    QuizExhausted,

    // Requests
    /// A request was answered with an error envelope
    RequestFailed,
}

impl Event {
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::StoreSeeded => "STORE_SEEDED",
            Event::ServerStart => "SERVER_START",
            Event::ServerFailed => "SERVER_FAILED",
            Event::QuestionCreated => "QUESTION_CREATED",
            Event::QuestionDeleted => "QUESTION_DELETED",
            Event::QuizExhausted => "QUIZ_EXHAUSTED",
            Event::RequestFailed => "REQUEST_FAILED",
        }
    }

    pub fn is_fatal(&self) -> bool {
        matches!(self, Event::ServerFailed)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
