use jiff::{Span, Timestamp};
use payloads::{EventId, Role, Rooms, requests, responses};
use serde_json::Value;
use std::time::Duration;
use tracing_log::LogTracer;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Matches the production request timeout.
pub const REQUEST_TIMEOUT: Duration = Duration::from_millis(2000);

/// Timestamp every fixture is anchored on.
pub const FIXTURE_START: &str = "2025-01-01T17:00:00Z";

pub struct TestApp {
    pub server: MockServer,
    pub client: payloads::APIClient,
}

/// Canned backend responses
impl TestApp {
    pub async fn mount_events(&self, events: &[responses::EventRecord]) {
        Mock::given(method("GET"))
            .and(path("/api/events/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(events))
            .mount(&self.server)
            .await;
    }

    /// Answer `POST api/events/` with the given result code.
    pub async fn mount_create_result(&self, result: i64, id: Option<u64>) {
        let body = match id {
            Some(id) => serde_json::json!({ "result": result, "id": id }),
            None => serde_json::json!({ "result": result }),
        };
        Mock::given(method("POST"))
            .and(path("/api/events/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    pub async fn mount_user_profile(&self, profile: &responses::UserProfile) {
        Mock::given(method("GET"))
            .and(path("/me/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(profile))
            .mount(&self.server)
            .await;
    }

    /// Answer `http_method route` with a 200 carrying `body`.
    pub async fn mount_json(
        &self,
        http_method: &str,
        route: &str,
        body: Value,
    ) {
        Mock::given(method(http_method))
            .and(path(route))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Answer `http_method route` with an empty 200.
    pub async fn mount_ok(&self, http_method: &str, route: &str) {
        self.mount_status(http_method, route, 200).await;
    }

    pub async fn mount_status(
        &self,
        http_method: &str,
        route: &str,
        status: u16,
    ) {
        Mock::given(method(http_method))
            .and(path(route))
            .respond_with(ResponseTemplate::new(status))
            .mount(&self.server)
            .await;
    }

    /// Answer `http_method route` only after `delay`.
    pub async fn mount_slow(
        &self,
        http_method: &str,
        route: &str,
        delay: Duration,
    ) {
        Mock::given(method(http_method))
            .and(path(route))
            .respond_with(ResponseTemplate::new(200).set_delay(delay))
            .mount(&self.server)
            .await;
    }

    /// JSON bodies of every request received for `http_method route`, in
    /// arrival order.
    pub async fn received_json(
        &self,
        http_method: &str,
        route: &str,
    ) -> anyhow::Result<Vec<Value>> {
        self.received(http_method, route)
            .await?
            .iter()
            .map(|request| {
                request.body_json::<Value>().map_err(anyhow::Error::from)
            })
            .collect()
    }

    /// Number of requests received for `http_method route`.
    pub async fn received_count(
        &self,
        http_method: &str,
        route: &str,
    ) -> anyhow::Result<usize> {
        Ok(self.received(http_method, route).await?.len())
    }

    async fn received(
        &self,
        http_method: &str,
        route: &str,
    ) -> anyhow::Result<Vec<wiremock::Request>> {
        let requests = self
            .server
            .received_requests()
            .await
            .ok_or_else(|| anyhow::anyhow!("request recording is disabled"))?;
        Ok(requests
            .into_iter()
            .filter(|r| {
                r.method.as_str() == http_method && r.url.path() == route
            })
            .collect())
    }
}

fn init_test_logging() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("error"));
    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_test_writer());
    let _ = LogTracer::init();
    let _ = subscriber.try_init();
}

/// Start a mock backend with a client using the production timeout.
pub async fn spawn_app() -> TestApp {
    spawn_app_with_timeout(REQUEST_TIMEOUT).await
}

pub async fn spawn_app_with_timeout(timeout: Duration) -> TestApp {
    init_test_logging();

    let server = MockServer::start().await;
    let client = payloads::APIClient::new(server.uri(), timeout).unwrap();

    TestApp { server, client }
}

pub fn fixture_start() -> Timestamp {
    FIXTURE_START.parse().unwrap()
}

/// An unapproved two hour reservation of the north room.
pub fn event_attributes_a() -> responses::EventAttributes {
    responses::EventAttributes {
        name: "Board games night".into(),
        description: "Bring your own snacks".into(),
        author: "jane.doe@example.com".into(),
        rooms: Rooms(Rooms::NORTH),
        begin_time: fixture_start(),
        end_time: fixture_start() + Span::new().hours(2),
        layout: 0,
        approved: false,
        people: None,
    }
}

/// An approved all-day reservation of the whole auditorium.
pub fn event_attributes_b() -> responses::EventAttributes {
    responses::EventAttributes {
        name: "Hackathon".into(),
        description: String::new(),
        author: "john.smith@example.com".into(),
        rooms: Rooms(Rooms::NORTH | Rooms::SOUTH),
        begin_time: fixture_start() + Span::new().hours(24),
        end_time: fixture_start() + Span::new().hours(48),
        layout: 2,
        approved: true,
        people: Some(120),
    }
}

pub fn event_records() -> Vec<responses::EventRecord> {
    vec![
        (EventId(1), event_attributes_a()),
        (EventId(2), event_attributes_b()),
    ]
}

pub fn create_event_a(author: &str) -> requests::CreateEvent {
    let attributes = event_attributes_a();
    requests::CreateEvent {
        name: attributes.name,
        description: attributes.description,
        author: author.to_string(),
        rooms: attributes.rooms,
        begin_time: attributes.begin_time,
        end_time: attributes.end_time,
        layout: attributes.layout,
        people: Some(30),
    }
}

pub fn approver_profile() -> responses::UserProfile {
    responses::UserProfile {
        name: Some("Jane Doe".into()),
        email: Some("jane.doe@example.com".into()),
        role: Role::Approver,
    }
}
