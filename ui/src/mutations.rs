//! Write operations against the events API.
//!
//! Failures are logged here. Only [`create_event`] reports back to the
//! caller, through its [`CreateOutcome`].

use payloads::{APIClient, ClientError, CreateFailure, CreateOutcome, EventId};

use crate::events::{EventDraft, EventPatch};

/// Submit a new reservation on behalf of `author`.
#[tracing::instrument(skip(client, draft), fields(name = %draft.name))]
pub async fn create_event(
    client: &APIClient,
    author: &str,
    draft: EventDraft,
) -> CreateOutcome {
    let request = draft.into_request(author);

    match client.create_event(&request).await {
        Ok(response) => {
            let outcome = CreateOutcome::from_result(&response);
            if !outcome.is_created() {
                tracing::warn!(
                    result = response.result,
                    "Event was not created"
                );
            }
            outcome
        }
        Err(ClientError::Decode(e)) => {
            tracing::error!("Unreadable create response: {e}");
            CreateOutcome::Failed(CreateFailure::MalformedBody(e.to_string()))
        }
        Err(e) => {
            tracing::error!("Failed to create event: {e}");
            CreateOutcome::Failed(CreateFailure::Transport(e.to_string()))
        }
    }
}

/// Send the fields present in `patch`.
#[tracing::instrument(skip(client, patch))]
pub async fn update_event(
    client: &APIClient,
    event_id: EventId,
    patch: &EventPatch,
) -> Result<(), ClientError> {
    client
        .update_event(&event_id, &patch.to_request())
        .await
        .inspect_err(|e| tracing::error!("Failed to update event: {e}"))
}

#[tracing::instrument(skip(client))]
pub async fn approve_event(
    client: &APIClient,
    event_id: EventId,
) -> Result<(), ClientError> {
    client
        .approve_event(&event_id)
        .await
        .inspect_err(|e| tracing::error!("Failed to approve event: {e}"))
}

#[tracing::instrument(skip(client))]
pub async fn delete_event(
    client: &APIClient,
    event_id: EventId,
) -> Result<(), ClientError> {
    client
        .delete_event(&event_id)
        .await
        .inspect_err(|e| tracing::error!("Failed to delete event: {e}"))
}

/// Rejecting a reservation removes it; the server keeps no record of
/// disapproval.
pub async fn disapprove_event(
    client: &APIClient,
    event_id: EventId,
) -> Result<(), ClientError> {
    delete_event(client, event_id).await
}
