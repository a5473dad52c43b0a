//! # lambda-mux
//!
//! A Tower-based request mux for API Gateway proxied Lambda invokes. One
//! inbound proxy event is routed to exactly one registered handler, and any
//! handler can be wrapped with a per-invocation timeout that abandons (never
//! blocks on) slow work.
//!
//! ## Core Concepts
//!
//! - **Handler capability**: every participant implements
//!   `Service<ProxyRequest, Response = ProxyResponse, Error = BoxError>` —
//!   leaf handlers, routers, and decorators alike
//! - **Routers**: [`ResourceRouter`] matches the resource template exactly;
//!   [`MethodRouter`] matches the HTTP method case-insensitively; routers are
//!   handlers themselves, so they nest arbitrarily
//! - **Timeout**: [`TimeoutLayer`]/[`with_timeout`] race the wrapped handler
//!   against a deadline on its own task; a late handler is abandoned and its
//!   result discarded
//! - **Gateway boundary**: [`ApiGatewayProxy`] decodes the invoke payload,
//!   dispatches once, and encodes the response
//!
//! ## Getting Started
//!
//! ```rust,no_run
//! use std::time::Duration;
//!
//! use lambda_mux::{
//!     handler_fn, with_timeout, ApiGatewayProxy, BoxError, MethodRouter, ProxyResponse,
//!     ResourceRouter,
//! };
//!
//! # async fn example() -> Result<(), BoxError> {
//! let orders = MethodRouter::new()
//!     .route("GET", handler_fn(|_req| async {
//!         Ok::<_, BoxError>(ProxyResponse::json(200, serde_json::json!({ "orders": [] })))
//!     }))
//!     .route("POST", handler_fn(|_req| async {
//!         Ok::<_, BoxError>(ProxyResponse::new(201))
//!     }));
//!
//! let mux = ResourceRouter::new()
//!     .route("/orders", with_timeout(Duration::from_secs(3), orders));
//!
//! let mut proxy = ApiGatewayProxy::new(mux);
//! let out = proxy
//!     .invoke(br#"{"resource":"/orders","httpMethod":"GET"}"#)
//!     .await?;
//! # drop(out);
//! # Ok(())
//! # }
//! ```
//!
//! Registries are read-only at dispatch time: build the full routing tree
//! before serving. Registration is last-write-wins.

pub mod error;
pub mod event;
pub mod gateway;
pub mod handler;
pub mod resilience;
pub mod routing;

pub use error::MuxError;
pub use event::{ProxyRequest, ProxyResponse};
pub use gateway::ApiGatewayProxy;
pub use handler::{boxed, handler_fn, HandlerSvc};
pub use resilience::{with_timeout, Timeout, TimeoutLayer};
pub use routing::{MethodRouter, ResourceRouter};

// Re-export the Tower traits users need to drive handlers directly.
pub use tower::{BoxError, Layer, Service, ServiceExt};
