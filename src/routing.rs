//! Resource and method routing over proxied gateway requests.
//!
//! What this module provides
//! - `ResourceRouter`: dispatch on the request's resource template, exact and
//!   case-sensitive (resource identifiers are structural templates, not free
//!   text)
//! - `MethodRouter`: dispatch on the HTTP method, case-insensitive
//!   (upper-cased on registration and lookup)
//!
//! Composition
//! - Both routers implement the handler capability themselves, so they nest
//!   arbitrarily: a `ResourceRouter` entry may be a `MethodRouter`, a
//!   timeout-wrapped handler, or another router
//! - `route()` consumes and returns the router for fluent chaining; build the
//!   whole tree before serving — registries are read-only at dispatch time
//!
//! Registration is last-write-wins: routing the same key twice silently
//! replaces the earlier handler.

use std::collections::HashMap;
use std::task::{Context, Poll};

use futures::future::BoxFuture;
use tower::{BoxError, Service};
use tracing::debug;

use crate::error::MuxError;
use crate::event::{ProxyRequest, ProxyResponse};
use crate::handler::{boxed, HandlerSvc};

/// Routes requests to handlers by exact resource template match.
///
/// The resource must match exactly, including path parameter placeholders
/// (`/orders/{id}` only matches events whose `resource` is `/orders/{id}`).
#[derive(Clone, Default)]
pub struct ResourceRouter {
    resources: HashMap<String, HandlerSvc>,
}

impl ResourceRouter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler for a resource template, replacing any previous
    /// registration for the same template.
    #[must_use]
    pub fn route<S>(mut self, resource: impl Into<String>, handler: S) -> Self
    where
        S: Service<ProxyRequest, Response = ProxyResponse, Error = BoxError>
            + Clone
            + Send
            + 'static,
        S::Future: Send + 'static,
    {
        self.resources.insert(resource.into(), boxed(handler));
        self
    }
}

impl Service<ProxyRequest> for ResourceRouter {
    type Response = ProxyResponse;
    type Error = BoxError;
    type Future = BoxFuture<'static, Result<ProxyResponse, BoxError>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        // Readiness is checked on the selected handler inside `call`.
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: ProxyRequest) -> Self::Future {
        match self.resources.get_mut(req.resource.as_str()) {
            Some(handler) => {
                debug!(resource = %req.resource, "dispatching to resource handler");
                Box::pin(handler.call(req))
            }
            None => Box::pin(async move {
                Err(MuxError::UnhandledResource {
                    resource: req.resource,
                }
                .into())
            }),
        }
    }
}

/// Routes requests to handlers by HTTP method.
///
/// Methods are matched case-insensitively; `get` and `GET` register and
/// dispatch to the same entry.
#[derive(Clone, Default)]
pub struct MethodRouter {
    methods: HashMap<String, HandlerSvc>,
}

impl MethodRouter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler for an HTTP method, replacing any previous
    /// registration for the same (case-folded) method.
    #[must_use]
    pub fn route<S>(mut self, method: impl AsRef<str>, handler: S) -> Self
    where
        S: Service<ProxyRequest, Response = ProxyResponse, Error = BoxError>
            + Clone
            + Send
            + 'static,
        S::Future: Send + 'static,
    {
        self.methods
            .insert(method.as_ref().to_ascii_uppercase(), boxed(handler));
        self
    }
}

impl Service<ProxyRequest> for MethodRouter {
    type Response = ProxyResponse;
    type Error = BoxError;
    type Future = BoxFuture<'static, Result<ProxyResponse, BoxError>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: ProxyRequest) -> Self::Future {
        let method = req.http_method.to_ascii_uppercase();
        match self.methods.get_mut(&method) {
            Some(handler) => {
                debug!(resource = %req.resource, method = %method, "dispatching to method handler");
                Box::pin(handler.call(req))
            }
            None => Box::pin(async move {
                Err(MuxError::UnhandledMethod {
                    resource: req.resource,
                    method: req.http_method,
                }
                .into())
            }),
        }
    }
}
