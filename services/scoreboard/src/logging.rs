//! Logging interceptor
//!
//! Records the outcome of every event with `tracing`. Never alters the
//! result returned by the rest of the chain.

use tracing::{info, warn};
use types::errors::ScoreboardError;
use types::event::{Event, EventKind};

use crate::interceptor::{Interceptor, Next};

/// Logs accepted and rejected events
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingInterceptor;

impl Interceptor for LoggingInterceptor {
    fn intercept(&self, event: &Event, next: Next<'_>) -> Result<(), ScoreboardError> {
        let result = next.run(event);

        let home = event.home_team.as_str();
        let away = event.away_team.as_str();
        match (&result, &event.kind) {
            (Err(err), kind) => {
                warn!(kind = %kind, home, away, error = %err, "Can't handle event");
            }
            (Ok(()), EventKind::Start) => {
                info!(home, away, "Started game: {} vs {}", home, away);
            }
            (Ok(()), EventKind::Update) => {
                info!(
                    home,
                    away,
                    home_score = event.home_score,
                    away_score = event.away_score,
                    "Updated score: {} vs {} - {}:{}",
                    home,
                    away,
                    event.home_score,
                    event.away_score
                );
            }
            (Ok(()), EventKind::Finish) => {
                info!(home, away, "Finished game: {} vs {}", home, away);
            }
            // Something downstream accepted a kind the processor doesn't know
            (Ok(()), EventKind::Unknown(kind)) => {
                info!(kind = %kind, home, away, "Handled event");
            }
        }

        result
    }
}
