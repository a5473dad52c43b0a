//! Deadline enforcement for wrapped handlers.
//!
//! What this module provides
//! - `TimeoutLayer` / `Timeout<S>`: a decorator bounding the wrapped
//!   handler's execution time
//! - `with_timeout(dur, handler)`: constructor sugar for wrapping a single
//!   handler without going through `Layer`
//!
//! Implementation strategy
//! - The inner future is spawned on its own task and raced against the
//!   deadline. When the deadline fires first the wrapper returns immediately
//!   with a deadline-exceeded error and *abandons* the task: the handler
//!   keeps running in the background until it completes naturally, and its
//!   result is discarded. Abandonment is logged at `warn!` so it is
//!   auditable.
//! - Dropping the `JoinHandle` detaches the task; it is never aborted. Side
//!   effects the handler performs after abandonment are its own
//!   responsibility.
//!
//! Composition
//! - `Timeout<S>` implements the handler capability, so it wraps leaves,
//!   routers, or other `Timeout`s. Nested wrappers compose with the tightest
//!   deadline winning, because the outer race bounds the entire inner
//!   future. The wrapper supplies its own bound even when nothing above it
//!   carries a deadline.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use std::time::Duration;

use tower::{BoxError, Layer, Service};
use tracing::warn;

use crate::error::MuxError;

/// Layer applying a [`Timeout`] to the wrapped service.
#[derive(Debug, Clone, Copy)]
pub struct TimeoutLayer {
    dur: Duration,
}

impl TimeoutLayer {
    #[must_use]
    pub fn new(dur: Duration) -> Self {
        Self { dur }
    }
}

impl<S> Layer<S> for TimeoutLayer {
    type Service = Timeout<S>;

    fn layer(&self, inner: S) -> Self::Service {
        Timeout {
            inner,
            dur: self.dur,
        }
    }
}

/// Bounds the wrapped handler's execution time; see the module docs for the
/// abandonment policy.
#[derive(Debug, Clone)]
pub struct Timeout<S> {
    inner: S,
    dur: Duration,
}

/// Wrap a handler with a per-invocation timeout.
#[must_use]
pub fn with_timeout<S>(dur: Duration, inner: S) -> Timeout<S> {
    Timeout { inner, dur }
}

impl<S, Req> Service<Req> for Timeout<S>
where
    S: Service<Req, Error = BoxError>,
    S::Future: Send + 'static,
    S::Response: Send + 'static,
{
    type Response = S::Response;
    type Error = BoxError;
    type Future = Pin<Box<dyn Future<Output = Result<S::Response, BoxError>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Req) -> Self::Future {
        let dur = self.dur;
        let fut = self.inner.call(req);
        Box::pin(async move {
            // Independent unit of concurrency, so a late handler cannot hold
            // up the caller past the deadline.
            let handle = tokio::spawn(fut);
            match tokio::time::timeout(dur, handle).await {
                Ok(Ok(result)) => result,
                Ok(Err(join_err)) => Err(MuxError::HandlerPanic(join_err.to_string()).into()),
                Err(_elapsed) => {
                    warn!(
                        timeout_ms = dur.as_millis() as u64,
                        "deadline exceeded; abandoning in-flight handler"
                    );
                    Err(MuxError::DeadlineExceeded { timeout: dur }.into())
                }
            }
        })
    }
}
