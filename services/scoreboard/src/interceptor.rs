//! Interception chain
//!
//! Interceptors run around every processed event without the processor or
//! the registry knowing about them. Registration order defines nesting: the
//! first registered interceptor is the outermost one, so it sees the event
//! first and the result last.
//!
//! ```text
//!   handle_event(e)
//!        │
//!   ┌────▼────┐   ┌─────────┐
//!   │ first   ├──►│ second  ├──► ... ──► EventProcessor::process(e)
//!   └────▲────┘   └────┬────┘                    │
//!        └─────────────┴──────── result ◄────────┘
//! ```
//!
//! The chain is walked from the current interceptor list on every call, so
//! registering another interceptor takes effect on the next event.

use std::sync::Arc;

use types::errors::ScoreboardError;
use types::event::Event;

use crate::processor::EventProcessor;

/// Observer / augmenter invoked around event processing
///
/// Implementations call `next.run(event)` to continue down the chain and
/// return its result. Calling it exactly once keeps normal semantics.
/// Interceptors that only observe must return the downstream result
/// unchanged.
pub trait Interceptor: Send + Sync {
    fn intercept(&self, event: &Event, next: Next<'_>) -> Result<(), ScoreboardError>;
}

impl<T: Interceptor + ?Sized> Interceptor for Arc<T> {
    fn intercept(&self, event: &Event, next: Next<'_>) -> Result<(), ScoreboardError> {
        (**self).intercept(event, next)
    }
}

/// Continuation representing the rest of the chain
#[derive(Clone, Copy)]
pub struct Next<'a> {
    remaining: &'a [Arc<dyn Interceptor>],
    processor: &'a EventProcessor,
}

impl<'a> Next<'a> {
    pub(crate) fn new(remaining: &'a [Arc<dyn Interceptor>], processor: &'a EventProcessor) -> Self {
        Self {
            remaining,
            processor,
        }
    }

    /// Run the rest of the chain, ending in the processor
    pub fn run(self, event: &Event) -> Result<(), ScoreboardError> {
        match self.remaining.split_first() {
            Some((current, rest)) => current.intercept(event, Next::new(rest, self.processor)),
            None => self.processor.process(event),
        }
    }
}

/// Interceptor built from a closure, see [`from_fn`]
pub struct FromFn<F> {
    f: F,
}

/// Turn a closure into an interceptor
///
/// ```rust,ignore
/// board.register_interceptor(from_fn(|event, next| {
///     let result = next.run(event);
///     audit.record(event, &result);
///     result
/// }));
/// ```
pub fn from_fn<F>(f: F) -> FromFn<F>
where
    F: for<'a> Fn(&Event, Next<'a>) -> Result<(), ScoreboardError> + Send + Sync,
{
    FromFn { f }
}

impl<F> Interceptor for FromFn<F>
where
    F: for<'a> Fn(&Event, Next<'a>) -> Result<(), ScoreboardError> + Send + Sync,
{
    fn intercept(&self, event: &Event, next: Next<'_>) -> Result<(), ScoreboardError> {
        (self.f)(event, next)
    }
}

/// Ordered list of registered interceptors
#[derive(Default)]
pub struct InterceptorChain {
    interceptors: Vec<Arc<dyn Interceptor>>,
}

impl InterceptorChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an interceptor; it nests inside all previously registered ones
    pub fn push<I: Interceptor + 'static>(&mut self, interceptor: I) {
        self.interceptors.push(Arc::new(interceptor));
    }

    /// Run `event` through every interceptor, then the processor
    pub fn dispatch(&self, processor: &EventProcessor, event: &Event) -> Result<(), ScoreboardError> {
        Next::new(&self.interceptors, processor).run(event)
    }

    pub fn len(&self) -> usize {
        self.interceptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.interceptors.is_empty()
    }
}
