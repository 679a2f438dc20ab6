//! Event counters
//!
//! Counts accepted and rejected events per kind. Registered like any other
//! interceptor and read back through `snapshot()`.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;
use types::errors::ScoreboardError;
use types::event::{Event, EventKind};

use crate::interceptor::{Interceptor, Next};

/// Counting interceptor
#[derive(Debug, Default)]
pub struct MetricsInterceptor {
    pub started: AtomicU64,
    pub updated: AtomicU64,
    pub finished: AtomicU64,
    pub rejected_start: AtomicU64,
    pub rejected_update: AtomicU64,
    pub rejected_finish: AtomicU64,
    pub rejected_unknown: AtomicU64,
}

/// Point-in-time counter values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct MetricsSnapshot {
    pub started: u64,
    pub updated: u64,
    pub finished: u64,
    pub rejected_start: u64,
    pub rejected_update: u64,
    pub rejected_finish: u64,
    pub rejected_unknown: u64,
}

impl MetricsSnapshot {
    pub fn accepted(&self) -> u64 {
        self.started + self.updated + self.finished
    }

    /// Rejections across all kinds
    pub fn rejected(&self) -> u64 {
        self.rejected_start + self.rejected_update + self.rejected_finish + self.rejected_unknown
    }
}

impl MetricsInterceptor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            started: self.started.load(Ordering::Relaxed),
            updated: self.updated.load(Ordering::Relaxed),
            finished: self.finished.load(Ordering::Relaxed),
            rejected_start: self.rejected_start.load(Ordering::Relaxed),
            rejected_update: self.rejected_update.load(Ordering::Relaxed),
            rejected_finish: self.rejected_finish.load(Ordering::Relaxed),
            rejected_unknown: self.rejected_unknown.load(Ordering::Relaxed),
        }
    }

    fn record(&self, kind: &EventKind, result: &Result<(), ScoreboardError>) {
        let counter = match (result, kind) {
            (Ok(()), EventKind::Start) => &self.started,
            (Ok(()), EventKind::Update) => &self.updated,
            (Ok(()), EventKind::Finish) => &self.finished,
            (Ok(()), EventKind::Unknown(_)) => return,
            (Err(_), EventKind::Start) => &self.rejected_start,
            (Err(_), EventKind::Update) => &self.rejected_update,
            (Err(_), EventKind::Finish) => &self.rejected_finish,
            (Err(_), EventKind::Unknown(_)) => &self.rejected_unknown,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }
}

impl Interceptor for MetricsInterceptor {
    fn intercept(&self, event: &Event, next: Next<'_>) -> Result<(), ScoreboardError> {
        let result = next.run(event);
        self.record(&event.kind, &result);
        result
    }
}
