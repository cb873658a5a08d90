#![allow(dead_code, unused_imports)]

use axum::{
    Router,
    body::Body,
    http::{Method, Request},
};
use http_body_util::BodyExt;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tower::ServiceExt;

/// Send a GET request with the given headers and collect the raw response.
async fn send_get(app: &Router, path: &str, headers: &[(&str, &str)]) -> (u16, Vec<u8>) {
    let mut builder = Request::builder().method(Method::GET).uri(path);
    for (name, value) in headers {
        builder = builder.header(*name, *value);
    }

    let response = app
        .clone()
        .oneshot(builder.body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status().as_u16();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, body_bytes.to_vec())
}

/// Deserialize `bytes` into `T`, panicking with a diagnostic message on failure.
fn deserialize_or_panic<T: DeserializeOwned>(status: u16, path: &str, bytes: &[u8]) -> T {
    serde_json::from_slice(bytes).unwrap_or_else(|e| {
        panic!(
            "Failed to deserialize response into {}\n\
             Status: {status} | Path: {path}\n\
             Error : {e}\n\
             Body  : {}",
            std::any::type_name::<T>(),
            String::from_utf8_lossy(bytes)
        )
    })
}

/// Helper to make header-driven GET requests and deserialize the response
pub async fn get_json<T: DeserializeOwned>(
    app: &Router,
    path: &str,
    headers: &[(&str, &str)],
) -> (u16, T) {
    let (status, body_bytes) = send_get(app, path, headers).await;
    let response_body: T = deserialize_or_panic(status, path, &body_bytes);
    (status, response_body)
}

/// Helper to GET and get back a raw `serde_json::Value` (never fails on shape).
pub async fn get_json_value(app: &Router, path: &str, headers: &[(&str, &str)]) -> (u16, Value) {
    let (status, body_bytes) = send_get(app, path, headers).await;
    let value: Value = serde_json::from_slice(&body_bytes).unwrap_or_else(|e| {
        panic!(
            "Response is not valid JSON\nStatus: {status} | Path: {path}\nError: {e}\nBody: {}",
            String::from_utf8_lossy(&body_bytes)
        )
    });
    (status, value)
}
