//! Request and operation counters
//!
//! - Counters only, monotonic
//! - Reset only on process start
//! - Relaxed atomics; exactness between counters is not required

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

/// Registry of operational counters shared by all handlers
#[derive(Debug, Default)]
pub struct MetricsRegistry {
    requests_served: AtomicU64,
    requests_failed: AtomicU64,
    questions_created: AtomicU64,
    questions_deleted: AtomicU64,
    quiz_questions_served: AtomicU64,
    quizzes_exhausted: AtomicU64,
}

impl MetricsRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// A request finished with a success envelope
    pub fn increment_requests_served(&self) {
        self.requests_served.fetch_add(1, Ordering::Relaxed);
    }

    /// A request finished with an error envelope
    pub fn increment_requests_failed(&self) {
        self.requests_failed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_questions_created(&self) {
        self.questions_created.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_questions_deleted(&self) {
        self.questions_deleted.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_quiz_questions_served(&self) {
        self.quiz_questions_served.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_quizzes_exhausted(&self) {
        self.quizzes_exhausted.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            requests_served: self.requests_served.load(Ordering::Relaxed),
            requests_failed: self.requests_failed.load(Ordering::Relaxed),
            questions_created: self.questions_created.load(Ordering::Relaxed),
            questions_deleted: self.questions_deleted.load(Ordering::Relaxed),
            quiz_questions_served: self.quiz_questions_served.load(Ordering::Relaxed),
            quizzes_exhausted: self.quizzes_exhausted.load(Ordering::Relaxed),
        }
    }
}

/// A point-in-time copy of every counter
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub requests_served: u64,
    pub requests_failed: u64,
    pub questions_created: u64,
    pub questions_deleted: u64,
    pub quiz_questions_served: u64,
    pub quizzes_exhausted: u64,
}
