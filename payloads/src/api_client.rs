use crate::{EventId, Rooms, requests, responses};
use jiff::Timestamp;
use reqwest::StatusCode;
use serde::Serialize;
use std::time::Duration;

type ReqwestResult = Result<reqwest::Response, reqwest::Error>;

/// An API client for interfacing with the booking backend.
///
/// Built explicitly and handed to whoever needs it; tests point `address`
/// at a mock server.
#[derive(Debug, Clone)]
pub struct APIClient {
    pub address: String,
    pub inner_client: reqwest::Client,
    /// Applied to every request, so it also holds in the browser where
    /// reqwest has no client-wide timeout.
    pub timeout: Duration,
}

impl APIClient {
    /// Build a client for `address` whose requests give up after `timeout`.
    pub fn new(
        address: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, ClientError> {
        Ok(Self {
            address: address.into(),
            inner_client: reqwest::Client::builder().build()?,
            timeout,
        })
    }
}

/// Helper methods for http actions
impl APIClient {
    fn format_url(&self, path: &str) -> String {
        format!("{}/{path}", self.address.trim_end_matches('/'))
    }

    async fn post(&self, path: &str, body: &impl Serialize) -> ReqwestResult {
        let request = self
            .inner_client
            .post(self.format_url(path))
            .timeout(self.timeout)
            .json(body);

        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();

        request.send().await
    }

    async fn empty_post(&self, path: &str) -> ReqwestResult {
        let request = self
            .inner_client
            .post(self.format_url(path))
            .timeout(self.timeout);

        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();

        request.send().await
    }

    async fn patch(&self, path: &str, body: &impl Serialize) -> ReqwestResult {
        let request = self
            .inner_client
            .patch(self.format_url(path))
            .timeout(self.timeout)
            .json(body);

        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();

        request.send().await
    }

    async fn empty_get(&self, path: &str) -> ReqwestResult {
        let request = self
            .inner_client
            .get(self.format_url(path))
            .timeout(self.timeout);

        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();

        request.send().await
    }

    async fn empty_delete(&self, path: &str) -> ReqwestResult {
        let request = self
            .inner_client
            .delete(self.format_url(path))
            .timeout(self.timeout);

        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();

        request.send().await
    }
}

/// Methods on the backend API
impl APIClient {
    /// All reservations, approved or not.
    pub async fn list_events(
        &self,
    ) -> Result<Vec<responses::EventRecord>, ClientError> {
        let response = self.empty_get("api/events/").await?;
        ok_body(response).await
    }

    pub async fn get_event(
        &self,
        event_id: &EventId,
    ) -> Result<responses::EventAttributes, ClientError> {
        let response =
            self.empty_get(&format!("api/events/{event_id}/")).await?;
        ok_body(response).await
    }

    /// Reservations for exactly `rooms` that begin inside `[begin, end]`.
    pub async fn filter_events(
        &self,
        rooms: Rooms,
        begin: Timestamp,
        end: Timestamp,
    ) -> Result<Vec<responses::EventRecord>, ClientError> {
        let path = format!("api/events/filter/{rooms}/{begin}/{end}");
        let response = self.empty_get(&path).await?;
        ok_body(response).await
    }

    /// Request a reservation. Overlaps are reported through the result code,
    /// not the status.
    pub async fn create_event(
        &self,
        details: &requests::CreateEvent,
    ) -> Result<responses::CreateEventResult, ClientError> {
        let response = self.post("api/events/", details).await?;
        ok_body(response).await
    }

    pub async fn update_event(
        &self,
        event_id: &EventId,
        details: &requests::UpdateEvent,
    ) -> Result<(), ClientError> {
        let response =
            self.patch(&format!("api/events/{event_id}/"), details).await?;
        ok_empty(response).await
    }

    /// Approve a reservation (approvers only).
    pub async fn approve_event(
        &self,
        event_id: &EventId,
    ) -> Result<(), ClientError> {
        let response = self
            .empty_post(&format!("api/events/{event_id}/approve/"))
            .await?;
        ok_empty(response).await
    }

    pub async fn delete_event(
        &self,
        event_id: &EventId,
    ) -> Result<(), ClientError> {
        let response =
            self.empty_delete(&format!("api/events/{event_id}/")).await?;
        ok_empty(response).await
    }

    /// Get the current user's profile and role.
    pub async fn user_profile(
        &self,
    ) -> Result<responses::UserProfile, ClientError> {
        let response = self.empty_get("me/").await?;
        ok_body(response).await
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// An unhandled API error to display, containing response text.
    #[error("{1}")]
    APIError(StatusCode, String),
    /// A successful response whose body is not what the endpoint returns.
    #[error("Unexpected response from the server: {0}")]
    Decode(reqwest::Error),
    #[error("Network error. Please check your connection.")]
    Network(#[from] reqwest::Error),
}

/// Deserialize a successful request into the desired type, or return an
/// appropriate error.
pub async fn ok_body<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ClientError> {
    if !response.status().is_success() {
        return Err(ClientError::APIError(
            response.status(),
            response.text().await?,
        ));
    }
    response.json::<T>().await.map_err(|e| {
        if e.is_decode() {
            ClientError::Decode(e)
        } else {
            ClientError::Network(e)
        }
    })
}

/// Check that an empty response is OK, returning a ClientError if not.
pub async fn ok_empty(response: reqwest::Response) -> Result<(), ClientError> {
    if !response.status().is_success() {
        return Err(ClientError::APIError(
            response.status(),
            response.text().await?,
        ));
    }
    Ok(())
}
