use jiff::Span;
use payloads::{EventId, Rooms, requests};
use test_helpers::{
    create_event_a, event_attributes_a, event_records, fixture_start,
    spawn_app,
};

#[tokio::test]
async fn list_events_decodes_key_attribute_pairs() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.mount_events(&event_records()).await;

    let events = app.client.list_events().await?;

    assert_eq!(events, event_records());
    assert_eq!(events[0].0, EventId(1));
    assert_eq!(events[0].1.rooms, Rooms(1));
    assert_eq!(events[1].1.people, Some(120));

    Ok(())
}

#[tokio::test]
async fn create_event_reports_result_code() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.mount_create_result(2, None).await;

    let response = app
        .client
        .create_event(&create_event_a("jane.doe@example.com"))
        .await?;
    assert_eq!(response.result, 2);
    assert_eq!(response.id, None);

    let bodies = app.received_json("POST", "/api/events/").await?;
    assert_eq!(bodies.len(), 1);
    assert_eq!(bodies[0]["rooms"], 1);
    assert_eq!(bodies[0]["author"], "jane.doe@example.com");
    assert_eq!(bodies[0]["people"], 30);
    assert_eq!(bodies[0]["begin_time"], "2025-01-01T17:00:00Z");

    Ok(())
}

#[tokio::test]
async fn update_event_sends_only_present_fields() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.mount_ok("PATCH", "/api/events/7/").await;

    let patch = requests::UpdateEvent {
        end_time: Some(fixture_start() + Span::new().hours(3)),
        ..Default::default()
    };
    app.client.update_event(&EventId(7), &patch).await?;

    let bodies = app.received_json("PATCH", "/api/events/7/").await?;
    assert_eq!(
        bodies,
        vec![serde_json::json!({ "end_time": "2025-01-01T20:00:00Z" })]
    );

    Ok(())
}

#[tokio::test]
async fn approve_and_delete_hit_event_routes() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.mount_ok("POST", "/api/events/3/approve/").await;
    app.mount_ok("DELETE", "/api/events/3/").await;

    app.client.approve_event(&EventId(3)).await?;
    app.client.delete_event(&EventId(3)).await?;

    assert_eq!(app.received_count("POST", "/api/events/3/approve/").await?, 1);
    assert_eq!(app.received_count("DELETE", "/api/events/3/").await?, 1);

    Ok(())
}

#[tokio::test]
async fn get_missing_event_is_an_api_error() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.mount_status("GET", "/api/events/99/", 404).await;

    assert!(app.client.get_event(&EventId(99)).await.is_err());

    Ok(())
}

#[tokio::test]
async fn filter_events_encodes_rooms_and_window() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let begin = fixture_start();
    let end = begin + Span::new().hours(1);
    let route =
        "/api/events/filter/1/2025-01-01T17:00:00Z/2025-01-01T18:00:00Z";
    wiremock::Mock::given(wiremock::matchers::method("GET"))
        .and(wiremock::matchers::path(route))
        .respond_with(
            wiremock::ResponseTemplate::new(200)
                .set_body_json(vec![(EventId(1), event_attributes_a())]),
        )
        .mount(&app.server)
        .await;

    let events = app.client.filter_events(Rooms(1), begin, end).await?;
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].1.name, "Board games night");

    Ok(())
}
