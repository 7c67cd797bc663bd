use yew::prelude::*;

use super::{use_booking_context, use_polling};
use crate::events::{Event, map_event};

/// All reservations, refreshed in the background.
///
/// Returns the cached list (empty until the first successful fetch) and a
/// callback that refetches right away.
#[hook]
pub fn use_events() -> (Vec<Event>, Callback<()>) {
    let client = use_booking_context().client;

    let events = use_polling(move || async move {
        client
            .list_events()
            .await
            .map(|records| {
                records.into_iter().map(map_event).collect::<Vec<_>>()
            })
            .map_err(|e| e.to_string())
    });

    (events.data.unwrap_or_default(), events.force_refresh)
}
