use payloads::EventId;
use yew::prelude::*;

use super::use_booking_context;
use crate::mutations;

#[hook]
pub fn use_approve() -> Callback<EventId> {
    let client = use_booking_context().client;

    Callback::from(move |event_id: EventId| {
        let client = client.clone();
        yew::platform::spawn_local(async move {
            let _ = mutations::approve_event(&client, event_id).await;
        });
    })
}
