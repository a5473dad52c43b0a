//! Canonical request/response shapes for API Gateway proxy invokes.
//!
//! The wire envelope keeps headers as string maps (single- and multi-value);
//! that is awkward to consume, so both shapes carry a typed
//! [`http::HeaderMap`] view alongside the raw maps. The gateway adapter
//! hydrates the request view from `multiValueHeaders` after decoding, and
//! folds the response view back into `multiValueHeaders` before encoding.
//!
//! Routers only ever read [`ProxyRequest::resource`] and
//! [`ProxyRequest::http_method`]; every other field is opaque payload passed
//! through to the matched handler unchanged.

use std::collections::HashMap;

use http::header::{HeaderMap, HeaderName, HeaderValue};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

/// A proxied API Gateway request, as delivered to the Lambda invoke.
///
/// All fields default, so partial events (common in tests and console test
/// invokes) decode cleanly; unknown fields in the envelope are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProxyRequest {
    /// The resource template the request matched, e.g. `/orders/{id}`.
    /// This is the dispatch key for [`crate::ResourceRouter`]; it is distinct
    /// from `path`, which carries the literal request path.
    pub resource: String,
    pub path: String,
    /// The dispatch key for [`crate::MethodRouter`]; matched
    /// case-insensitively.
    pub http_method: String,
    pub headers: HashMap<String, String>,
    pub multi_value_headers: HashMap<String, Vec<String>>,
    pub query_string_parameters: HashMap<String, String>,
    pub multi_value_query_string_parameters: HashMap<String, Vec<String>>,
    pub path_parameters: HashMap<String, String>,
    pub stage_variables: HashMap<String, String>,
    pub body: Option<String>,
    pub is_base64_encoded: bool,
    /// Typed view over `multi_value_headers`, populated by
    /// [`hydrate_http_headers`](Self::hydrate_http_headers). Not part of the
    /// wire envelope.
    #[serde(skip)]
    pub http_headers: HeaderMap,
}

impl ProxyRequest {
    /// Rebuild the typed header view from `multi_value_headers`.
    ///
    /// Entries that are not valid HTTP header names/values are skipped; the
    /// raw maps still carry them.
    pub fn hydrate_http_headers(&mut self) {
        let mut map = HeaderMap::with_capacity(self.multi_value_headers.len());
        for (name, values) in &self.multi_value_headers {
            let Ok(header) = HeaderName::from_bytes(name.as_bytes()) else {
                debug!(header = %name, "skipping invalid header name in gateway event");
                continue;
            };
            for value in values {
                match HeaderValue::from_str(value) {
                    Ok(v) => {
                        map.append(header.clone(), v);
                    }
                    Err(_) => {
                        debug!(header = %name, "skipping invalid header value in gateway event");
                    }
                }
            }
        }
        self.http_headers = map;
    }

    /// Look up a header by name (case-insensitive), first value wins.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.http_headers.get(name).and_then(|v| v.to_str().ok())
    }
}

/// The proxy response serialized back to API Gateway.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProxyResponse {
    pub status_code: u16,
    pub multi_value_headers: HashMap<String, Vec<String>>,
    pub body: String,
    pub is_base64_encoded: bool,
    /// Typed header view, folded into `multi_value_headers` by
    /// [`fold_http_headers`](Self::fold_http_headers). Not part of the wire
    /// envelope.
    #[serde(skip)]
    pub http_headers: HeaderMap,
}

impl ProxyResponse {
    /// Create an empty response with the given status code.
    #[must_use]
    pub fn new(status_code: u16) -> Self {
        Self {
            status_code,
            ..Self::default()
        }
    }

    /// Create a JSON response with a `content-type: application/json` header.
    #[must_use]
    pub fn json(status_code: u16, body: Value) -> Self {
        let mut http_headers = HeaderMap::new();
        http_headers.insert(
            http::header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
        Self {
            status_code,
            body: body.to_string(),
            http_headers,
            ..Self::default()
        }
    }

    /// Create a plain-text response.
    #[must_use]
    pub fn text(status_code: u16, body: impl Into<String>) -> Self {
        let mut http_headers = HeaderMap::new();
        http_headers.insert(
            http::header::CONTENT_TYPE,
            HeaderValue::from_static("text/plain; charset=utf-8"),
        );
        Self {
            status_code,
            body: body.into(),
            http_headers,
            ..Self::default()
        }
    }

    /// Fold the typed header view into `multi_value_headers`.
    ///
    /// Values that cannot be represented as visible ASCII are skipped.
    pub fn fold_http_headers(&mut self) {
        for (name, value) in &self.http_headers {
            let Ok(value) = value.to_str() else {
                debug!(header = %name, "skipping non-ASCII header value in gateway response");
                continue;
            };
            self.multi_value_headers
                .entry(name.as_str().to_string())
                .or_default()
                .push(value.to_string());
        }
    }
}
