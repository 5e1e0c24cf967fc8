//! Concurrent requests must each get their own, independent response.

use serde_json::Value;

mod common;

#[tokio::test]
async fn test_concurrent_requests_are_independent() {
    let server = common::start_server().await;
    let client = common::client();

    let concurrency = 20;
    let requests_per_task = 10;

    let mut handles = Vec::new();
    for task in 0..concurrency {
        let client = client.clone();
        let base = server.url("");
        handles.push(tokio::spawn(async move {
            for n in 0..requests_per_task {
                let item = format!("t{}", task);
                let sub = n.to_string();
                let body: Value = client
                    .get(format!("{}/items/{}/subitems/{}", base, item, sub))
                    .send()
                    .await
                    .unwrap()
                    .json()
                    .await
                    .unwrap();

                assert_eq!(body["details"], format!("Item: {}, Subitem: {}", item, sub));
                assert_eq!(body["empty"], -1);
                assert_eq!(body["title"], "Subitem page");
            }
        }));
    }

    for handle in handles {
        handle.await.expect("Request task panicked");
    }

    server.shutdown.trigger();
}
