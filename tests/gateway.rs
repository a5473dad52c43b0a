//! End-to-end invokes through the gateway boundary: bytes in, bytes out.

use lambda_mux::{
    handler_fn, ApiGatewayProxy, BoxError, MethodRouter, MuxError, ProxyResponse, ResourceRouter,
};

const ORDERS_EVENT: &str = r#"{
    "resource": "/orders",
    "path": "/orders",
    "httpMethod": "GET",
    "multiValueHeaders": {
        "Accept": ["application/json"],
        "X-Request-Id": ["req-42"]
    },
    "queryStringParameters": { "limit": "10" },
    "body": null,
    "isBase64Encoded": false
}"#;

fn orders_mux() -> ResourceRouter {
    ResourceRouter::new().route(
        "/orders",
        MethodRouter::new()
            .route(
                "GET",
                handler_fn(|req| async move {
                    // The request's opaque payload reaches the leaf intact.
                    assert_eq!(req.header("accept"), Some("application/json"));
                    assert_eq!(
                        req.query_string_parameters.get("limit").map(String::as_str),
                        Some("10")
                    );
                    Ok::<_, BoxError>(ProxyResponse::json(
                        200,
                        serde_json::json!({ "orders": [] }),
                    ))
                }),
            )
            .route(
                "DELETE",
                handler_fn(|_| async { Ok::<_, BoxError>(ProxyResponse::new(204)) }),
            ),
    )
}

#[tokio::test]
async fn invoke_routes_a_full_event() {
    let mut proxy = ApiGatewayProxy::new(orders_mux());

    let out = proxy.invoke(ORDERS_EVENT.as_bytes()).await.unwrap();
    let wire: serde_json::Value = serde_json::from_slice(&out).unwrap();

    assert_eq!(wire["statusCode"], 200);
    assert_eq!(wire["body"], r#"{"orders":[]}"#);
    assert_eq!(wire["multiValueHeaders"]["content-type"][0], "application/json");
}

#[tokio::test]
async fn method_miss_surfaces_routing_error() {
    let mut proxy = ApiGatewayProxy::new(orders_mux());

    let err = proxy
        .invoke(br#"{"resource":"/orders","httpMethod":"POST"}"#)
        .await
        .unwrap_err();
    let err = err.downcast_ref::<MuxError>().unwrap();
    assert!(matches!(
        err,
        MuxError::UnhandledMethod { resource, method }
            if resource == "/orders" && method == "POST"
    ));
}

#[tokio::test]
async fn resource_miss_surfaces_routing_error() {
    let mut proxy = ApiGatewayProxy::new(orders_mux());

    let err = proxy
        .invoke(br#"{"resource":"/unknown","httpMethod":"GET"}"#)
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "resource handler not found for /unknown");
}

#[tokio::test]
async fn decode_failure_is_distinct_from_dispatch_failure() {
    let mut proxy = ApiGatewayProxy::new(orders_mux());

    let err = proxy.invoke(br#"{"resource": 7}"#).await.unwrap_err();
    let err = err.downcast_ref::<MuxError>().unwrap();
    assert!(matches!(err, MuxError::Decode(_)));
}

#[tokio::test]
async fn adapter_works_as_a_byte_service() {
    use lambda_mux::{Service, ServiceExt};

    let mut proxy = ApiGatewayProxy::new(orders_mux());
    let out = ServiceExt::ready(&mut proxy)
        .await
        .unwrap()
        .call(ORDERS_EVENT.as_bytes().to_vec())
        .await
        .unwrap();
    let wire: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(wire["statusCode"], 200);
}
