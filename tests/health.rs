mod common;

use common::{MockBehavior, MockGenerator, http_client, spawn_app};

#[tokio::test]
async fn test_health_endpoint() {
    let generator = MockGenerator::new(MockBehavior::Reply("unused"));
    let base = spawn_app(generator).await;
    let client = http_client();

    let resp = client.get(format!("{base}/health")).send().await.unwrap();
    assert_eq!(resp.status(), 200);

    let data: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(data["status"], "ok");
    assert!(data["message"].as_str().unwrap().contains("HIV Mate"));
}
