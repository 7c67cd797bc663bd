use payloads::Role;
use test_helpers::{approver_profile, spawn_app};

#[tokio::test]
async fn user_profile_maps_role_code() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.mount_user_profile(&approver_profile()).await;

    let profile = app.client.user_profile().await?;

    assert_eq!(profile.role, Role::Approver);
    assert_eq!(profile.role.label(), Some("Soulis"));
    assert_eq!(profile.email.as_deref(), Some("jane.doe@example.com"));

    Ok(())
}

#[tokio::test]
async fn unknown_role_code_has_no_label() -> anyhow::Result<()> {
    let app = spawn_app().await;
    wiremock::Mock::given(wiremock::matchers::method("GET"))
        .and(wiremock::matchers::path("/me/"))
        .respond_with(wiremock::ResponseTemplate::new(200).set_body_json(
            serde_json::json!({
                "name": "Pat",
                "email": "pat@example.com",
                "role": "facilitymanager",
            }),
        ))
        .mount(&app.server)
        .await;

    let profile = app.client.user_profile().await?;

    assert_eq!(profile.role, Role::Other("facilitymanager".into()));
    assert_eq!(profile.role.label(), None);

    Ok(())
}

#[tokio::test]
async fn role_codes_are_case_sensitive() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.mount_json(
        "GET",
        "/me/",
        serde_json::json!({ "email": "pat@example.com", "role": "Approver" }),
    )
    .await;

    let profile = app.client.user_profile().await?;

    assert_eq!(profile.role, Role::Other("Approver".into()));
    assert_eq!(profile.role.label(), None);

    Ok(())
}

#[tokio::test]
async fn missing_role_falls_back_to_lowest() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.mount_json(
        "GET",
        "/me/",
        serde_json::json!({ "email": "pat@example.com" }),
    )
    .await;

    let profile = app.client.user_profile().await?;

    assert_eq!(profile.role, Role::Noob);
    assert_eq!(profile.role.to_string(), "Kámen");

    Ok(())
}
