//! The handler capability.
//!
//! Every participant in the routing tree — leaf handlers, both routers, and
//! the timeout decorator — implements
//! `Service<ProxyRequest, Response = ProxyResponse, Error = BoxError>`.
//! [`HandlerSvc`] is the uniform boxed form stored in router registries; it
//! is `Clone`, so a single handler can be registered under several keys or
//! shared across routers.

use std::future::Future;

use tower::{
    util::BoxCloneService,
    BoxError, Service,
};

use crate::event::{ProxyRequest, ProxyResponse};

/// Boxed handler service type alias.
pub type HandlerSvc = BoxCloneService<ProxyRequest, ProxyResponse, BoxError>;

/// Lift an async function into a [`HandlerSvc`].
///
/// This is the function-adapter for inline handlers:
///
/// ```rust
/// use lambda_mux::{handler_fn, BoxError, ProxyResponse};
///
/// let echo = handler_fn(|req| async move {
///     Ok::<_, BoxError>(ProxyResponse::text(200, req.resource))
/// });
/// # drop(echo);
/// ```
pub fn handler_fn<F, Fut>(f: F) -> HandlerSvc
where
    F: Fn(ProxyRequest) -> Fut + Clone + Send + 'static,
    Fut: Future<Output = Result<ProxyResponse, BoxError>> + Send + 'static,
{
    BoxCloneService::new(tower::service_fn(f))
}

/// Box any conforming service (a router, a timeout-wrapped handler, ...)
/// into a [`HandlerSvc`].
pub fn boxed<S>(svc: S) -> HandlerSvc
where
    S: Service<ProxyRequest, Response = ProxyResponse, Error = BoxError> + Clone + Send + 'static,
    S::Future: Send + 'static,
{
    BoxCloneService::new(svc)
}
