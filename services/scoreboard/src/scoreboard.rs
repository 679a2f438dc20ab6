//! Scoreboard facade
//!
//! Entry point for front ends: submit events, register interceptors, read
//! the ranked summary.

use std::sync::Arc;

use tracing::info;
use types::errors::ScoreboardError;
use types::event::Event;
use types::game::Match;

use crate::config::ScoreboardConfig;
use crate::interceptor::{Interceptor, InterceptorChain};
use crate::processor::EventProcessor;
use crate::ranking::{rank, render_summary};
use crate::registry::MatchRegistry;

/// Live scoreboard of ongoing matches
///
/// `handle_event`, `ranked` and `summary` take `&self` and are safe to call
/// from several threads through an `Arc<Scoreboard>`. Interceptors are
/// registered through `&mut self` before the board is shared.
pub struct Scoreboard {
    processor: EventProcessor,
    chain: InterceptorChain,
    config: ScoreboardConfig,
}

impl Scoreboard {
    /// Create an empty scoreboard with default configuration
    pub fn new() -> Self {
        Self::with_config(ScoreboardConfig::default())
    }

    pub fn with_config(config: ScoreboardConfig) -> Self {
        info!(tie_break = ?config.tie_break, "Scoreboard initialized");

        Self {
            processor: EventProcessor::new(Arc::new(MatchRegistry::new())),
            chain: InterceptorChain::new(),
            config,
        }
    }

    /// Append an interceptor to the chain
    ///
    /// The first registered interceptor is the outermost.
    pub fn register_interceptor<I: Interceptor + 'static>(&mut self, interceptor: I) {
        self.chain.push(interceptor);
    }

    /// Apply one event through the interception chain
    ///
    /// An error means no state change happened.
    pub fn handle_event(&self, event: &Event) -> Result<(), ScoreboardError> {
        self.chain.dispatch(&self.processor, event)
    }

    /// Ongoing matches in summary order
    pub fn ranked(&self) -> Vec<Match> {
        rank(self.processor.registry().snapshot(), self.config.tie_break)
    }

    /// Textual report of all ongoing matches
    pub fn summary(&self) -> String {
        render_summary(&self.config.summary_header, &self.ranked())
    }

    pub fn registry(&self) -> &Arc<MatchRegistry> {
        self.processor.registry()
    }

    pub fn interceptor_count(&self) -> usize {
        self.chain.len()
    }

    pub fn len(&self) -> usize {
        self.registry().len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry().is_empty()
    }
}

impl Default for Scoreboard {
    fn default() -> Self {
        Self::new()
    }
}
