//! End-to-end tests over a real socket.

use serde_json::{json, Value};
use std::time::Duration;

mod common;

#[tokio::test]
async fn test_root_page() {
    let server = common::start_server().await;
    let res = common::client().get(server.url("/")).send().await.expect("Server unreachable");

    assert_eq!(res.status(), 200);
    assert!(res.headers().contains_key("x-request-id"));
    assert_eq!(res.text().await.unwrap(), "Root page");

    server.shutdown.trigger();
}

#[tokio::test]
async fn test_item_details() {
    let server = common::start_server().await;
    let res = common::client()
        .get(server.url("/items/42/subitems/7"))
        .send()
        .await
        .expect("Server unreachable");

    assert_eq!(res.status(), 200);
    let body: Value = res.json().await.unwrap();
    assert_eq!(
        body,
        json!({
            "title": "Subitem page",
            "details": "Item: 42, Subitem: 7",
            "empty": -1,
            "app": "app-name v.1.0.0",
        })
    );

    server.shutdown.trigger();
}

#[tokio::test]
async fn test_non_numeric_ids_pass_through() {
    let server = common::start_server().await;
    let body: Value = common::client()
        .get(server.url("/items/abc/subitems/-1"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body["details"], "Item: abc, Subitem: -1");
    assert_eq!(body["empty"], -1);

    server.shutdown.trigger();
}

#[tokio::test]
async fn test_unknown_path_is_not_found() {
    let server = common::start_server().await;
    let res = common::client().get(server.url("/items/42")).send().await.unwrap();
    assert_eq!(res.status(), 404);

    server.shutdown.trigger();
}

#[tokio::test]
async fn test_graceful_shutdown() {
    let server = common::start_server().await;
    let res = common::client().get(server.url("/")).send().await.unwrap();
    assert_eq!(res.status(), 200);

    server.shutdown.trigger();
    let result = tokio::time::timeout(Duration::from_secs(5), server.handle)
        .await
        .expect("Server did not stop")
        .expect("Server task panicked");
    assert!(result.is_ok());
}
