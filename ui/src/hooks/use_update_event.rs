use payloads::EventId;
use yew::prelude::*;

use super::use_booking_context;
use crate::{events::EventPatch, mutations};

#[hook]
pub fn use_update_event() -> Callback<(EventId, EventPatch)> {
    let client = use_booking_context().client;

    Callback::from(move |(event_id, patch): (EventId, EventPatch)| {
        let client = client.clone();
        yew::platform::spawn_local(async move {
            let _ = mutations::update_event(&client, event_id, &patch).await;
        });
    })
}
