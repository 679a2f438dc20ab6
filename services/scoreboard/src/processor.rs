//! Event processor
//!
//! Dispatches one event to the matching registry operation. This is the
//! innermost step of every interception chain.

use std::sync::Arc;

use types::errors::ScoreboardError;
use types::event::{Event, EventKind};

use crate::registry::MatchRegistry;

/// Applies events to a registry
pub struct EventProcessor {
    registry: Arc<MatchRegistry>,
}

impl EventProcessor {
    pub fn new(registry: Arc<MatchRegistry>) -> Self {
        Self { registry }
    }

    /// Apply a single event
    pub fn process(&self, event: &Event) -> Result<(), ScoreboardError> {
        match &event.kind {
            EventKind::Start => self.registry.start(&event.home_team, &event.away_team),
            EventKind::Update => self.registry.update(
                &event.home_team,
                &event.away_team,
                event.home_score,
                event.away_score,
            ),
            EventKind::Finish => self.registry.finish(&event.home_team, &event.away_team),
            EventKind::Unknown(kind) => Err(ScoreboardError::UnknownEventType(kind.as_str().to_string())),
        }
    }

    pub fn registry(&self) -> &Arc<MatchRegistry> {
        &self.registry
    }
}
