use booking_ui::{EventPatch, mutations};
use payloads::{ClientError, EventId};
use test_helpers::{fixture_start, spawn_app};

#[tokio::test]
async fn patch_contains_only_begin_time() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.mount_ok("PATCH", "/api/events/4/").await;

    let patch = EventPatch {
        begin_time: Some(fixture_start()),
        ..Default::default()
    };
    mutations::update_event(&app.client, EventId(4), &patch).await?;

    let bodies = app.received_json("PATCH", "/api/events/4/").await?;
    assert_eq!(
        bodies,
        vec![serde_json::json!({ "begin_time": "2025-01-01T17:00:00Z" })]
    );

    Ok(())
}

#[tokio::test]
async fn patch_with_both_room_flags_sends_bitmask() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.mount_ok("PATCH", "/api/events/4/").await;

    let patch = EventPatch {
        north: Some(true),
        south: Some(true),
        people: Some(12),
        ..Default::default()
    };
    mutations::update_event(&app.client, EventId(4), &patch).await?;

    let bodies = app.received_json("PATCH", "/api/events/4/").await?;
    assert_eq!(
        bodies,
        vec![serde_json::json!({ "rooms": 3, "people": 12 })]
    );

    Ok(())
}

#[tokio::test]
async fn rejected_update_is_returned_as_error() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.mount_status("PATCH", "/api/events/4/", 404).await;

    let result = mutations::update_event(
        &app.client,
        EventId(4),
        &EventPatch::default(),
    )
    .await;

    assert!(matches!(
        result,
        Err(ClientError::APIError(status, _)) if status == 404
    ));

    Ok(())
}

#[tokio::test]
async fn approve_posts_to_approve_route() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.mount_ok("POST", "/api/events/8/approve/").await;

    mutations::approve_event(&app.client, EventId(8)).await?;

    let route = "/api/events/8/approve/";
    assert_eq!(app.received_count("POST", route).await?, 1);
    // no body
    assert!(app.received_json("POST", route).await.is_err());

    Ok(())
}

#[tokio::test]
async fn disapprove_deletes_event() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.mount_ok("DELETE", "/api/events/8/").await;

    mutations::disapprove_event(&app.client, EventId(8)).await?;
    mutations::delete_event(&app.client, EventId(8)).await?;

    assert_eq!(app.received_count("DELETE", "/api/events/8/").await?, 2);

    Ok(())
}
