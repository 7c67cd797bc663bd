use payloads::EventId;
use yew::prelude::*;

use super::use_booking_context;
use crate::mutations;

#[hook]
pub fn use_delete_event() -> Callback<EventId> {
    let client = use_booking_context().client;

    Callback::from(move |event_id: EventId| {
        let client = client.clone();
        yew::platform::spawn_local(async move {
            let _ = mutations::delete_event(&client, event_id).await;
        });
    })
}

/// Disapproving a reservation deletes it.
#[hook]
pub fn use_disapprove() -> Callback<EventId> {
    use_delete_event()
}
