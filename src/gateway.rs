//! Lambda invoke boundary for API Gateway proxy events.
//!
//! [`ApiGatewayProxy`] owns the top-level handler (typically a
//! [`crate::ResourceRouter`]) and translates between the opaque invoke
//! payload and the canonical [`ProxyRequest`]/[`ProxyResponse`] pivot:
//! decode, dispatch exactly once, encode. Decode and encode failures are
//! reported as [`MuxError::Decode`]/[`MuxError::Encode`]; handler errors are
//! returned to the runtime unchanged.

use futures::future::BoxFuture;
use std::task::{Context, Poll};
use tower::{BoxError, Service, ServiceExt};
use tracing::debug;

use crate::error::MuxError;
use crate::event::{ProxyRequest, ProxyResponse};

/// Lambda handler for proxied invokes from API Gateway.
#[derive(Debug, Clone)]
pub struct ApiGatewayProxy<S> {
    handler: S,
}

impl<S> ApiGatewayProxy<S>
where
    S: Service<ProxyRequest, Response = ProxyResponse, Error = BoxError>,
{
    pub fn new(handler: S) -> Self {
        Self { handler }
    }

    /// Invoke the API Gateway API call.
    ///
    /// Deserializes the payload as a [`ProxyRequest`], dispatches it to the
    /// handler, and serializes the resulting [`ProxyResponse`].
    pub async fn invoke(&mut self, payload: &[u8]) -> Result<Vec<u8>, BoxError> {
        let mut req: ProxyRequest =
            serde_json::from_slice(payload).map_err(MuxError::Decode)?;
        req.hydrate_http_headers();
        debug!(resource = %req.resource, method = %req.http_method, "decoded gateway event");

        let mut resp = self.handler.ready().await?.call(req).await?;

        resp.fold_http_headers();
        let out = serde_json::to_vec(&resp).map_err(MuxError::Encode)?;
        Ok(out)
    }
}

/// Bytes-in/bytes-out service form of the adapter, for runtimes that drive a
/// `Service` per invoke.
impl<S> Service<Vec<u8>> for ApiGatewayProxy<S>
where
    S: Service<ProxyRequest, Response = ProxyResponse, Error = BoxError>
        + Clone
        + Send
        + 'static,
    S::Future: Send + 'static,
{
    type Response = Vec<u8>;
    type Error = BoxError;
    type Future = BoxFuture<'static, Result<Vec<u8>, BoxError>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.handler.poll_ready(cx)
    }

    fn call(&mut self, payload: Vec<u8>) -> Self::Future {
        let mut proxy = Self {
            handler: self.handler.clone(),
        };
        Box::pin(async move { proxy.invoke(&payload).await })
    }
}
