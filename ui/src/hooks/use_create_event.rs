use payloads::CreateOutcome;
use yew::prelude::*;

use super::{use_booking_context, use_user_email};
use crate::{events::EventDraft, mutations, utils::alert};

/// Returns a callback that submits a draft as the signed-in user.
///
/// A conflict or a rejected request raises a browser alert. `on_finish`
/// is emitted once the request settles, whatever the outcome.
#[hook]
pub fn use_create_event(
    on_finish: Callback<CreateOutcome>,
) -> Callback<EventDraft> {
    let client = use_booking_context().client;
    let email = use_user_email();

    Callback::from(move |draft: EventDraft| {
        let client = client.clone();
        let on_finish = on_finish.clone();
        let author = email.clone().unwrap_or_else(|| {
            tracing::warn!("Creating an event without a signed-in user");
            String::new()
        });

        yew::platform::spawn_local(async move {
            let outcome =
                mutations::create_event(&client, &author, draft).await;
            if let Some(message) = outcome.alert_message() {
                alert(message);
            }
            on_finish.emit(outcome);
        });
    })
}
