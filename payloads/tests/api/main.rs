mod events;
mod user;

use payloads::{APIClient, ClientError, EventId};
use std::time::Duration;
use test_helpers::{spawn_app, spawn_app_with_timeout};

#[tokio::test]
async fn error_status_carries_response_text() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.mount_status("GET", "/me/", 401).await;

    match app.client.user_profile().await {
        Err(ClientError::APIError(status, _)) => assert_eq!(status, 401),
        other => panic!("expected APIError, got {other:?}"),
    }

    Ok(())
}

#[tokio::test]
async fn slow_backend_times_out() -> anyhow::Result<()> {
    let app = spawn_app_with_timeout(Duration::from_millis(100)).await;
    app.mount_slow("GET", "/api/events/", Duration::from_millis(500))
        .await;

    let err = app.client.list_events().await.unwrap_err();
    match err {
        ClientError::Network(e) => assert!(e.is_timeout()),
        other => panic!("expected a network timeout, got {other:?}"),
    }

    Ok(())
}

#[tokio::test]
async fn timeout_applies_to_each_request() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.mount_slow("GET", "/me/", Duration::from_millis(500)).await;
    app.mount_slow("DELETE", "/api/events/1/", Duration::from_millis(500))
        .await;

    // No client-wide timeout, as on wasm32
    let client = APIClient {
        address: app.server.uri(),
        inner_client: reqwest::Client::new(),
        timeout: Duration::from_millis(100),
    };

    match client.user_profile().await {
        Err(ClientError::Network(e)) => assert!(e.is_timeout()),
        other => panic!("expected a network timeout, got {other:?}"),
    }
    match client.delete_event(&EventId(1)).await {
        Err(ClientError::Network(e)) => assert!(e.is_timeout()),
        other => panic!("expected a network timeout, got {other:?}"),
    }

    Ok(())
}

#[tokio::test]
async fn unreadable_body_is_a_decode_error() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.mount_json("GET", "/api/events/", serde_json::json!({})).await;

    match app.client.list_events().await {
        Err(e @ ClientError::Decode(_)) => {
            assert!(!e.to_string().contains("Network error"));
        }
        other => panic!("expected a decode error, got {other:?}"),
    }

    Ok(())
}

#[tokio::test]
async fn trailing_slash_in_address_is_ignored() -> anyhow::Result<()> {
    let mut app = spawn_app().await;
    app.client.address.push('/');
    app.mount_events(&[]).await;

    assert!(app.client.list_events().await?.is_empty());

    Ok(())
}
