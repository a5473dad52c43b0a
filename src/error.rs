//! Error types for the mux.

use std::time::Duration;

use thiserror::Error;

/// Errors produced by the mux itself.
///
/// Routing misses and deadline expiry are ordinary, recoverable failures; a
/// boundary can map them to 404/504 responses. Errors returned by a
/// successfully dispatched handler are never wrapped in this type — routers
/// and the timeout wrapper forward them unchanged as `BoxError`, so callers
/// that need the taxonomy can `downcast_ref::<MuxError>()`.
#[derive(Debug, Error)]
pub enum MuxError {
    /// No handler registered for the request's resource identifier.
    #[error("resource handler not found for {resource}")]
    UnhandledResource { resource: String },

    /// No handler registered for the request's HTTP method under a known
    /// resource.
    #[error("method handler not found for {resource}:{method}")]
    UnhandledMethod { resource: String, method: String },

    /// The wrapped handler did not complete before the configured deadline.
    /// The handler keeps running in the background; its result is discarded.
    #[error("deadline exceeded after {timeout:?}")]
    DeadlineExceeded { timeout: Duration },

    /// The spawned handler task terminated abnormally (panicked).
    #[error("handler task failed: {0}")]
    HandlerPanic(String),

    /// The invoke payload was not a valid API Gateway proxy request.
    #[error("invalid gateway event, expected an API Gateway proxy request: {0}")]
    Decode(#[source] serde_json::Error),

    /// The proxy response could not be serialized back to the wire envelope.
    #[error("failed to serialize gateway response: {0}")]
    Encode(#[source] serde_json::Error),
}
