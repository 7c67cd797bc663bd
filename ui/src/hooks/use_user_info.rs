use payloads::{Role, responses};
use yew::prelude::*;

use super::{use_booking_context, use_polling};

pub type UserInfo = responses::UserProfile;

/// The signed-in user's profile, refreshed in the background.
///
/// Until the first response arrives this is a placeholder holding only the
/// lowest role.
#[hook]
pub fn use_user_info() -> UserInfo {
    let client = use_booking_context().client;

    let info = use_polling(move || async move {
        client.user_profile().await.map_err(|e| e.to_string())
    });

    info.data.unwrap_or_default()
}

#[hook]
pub fn use_user_role() -> Role {
    use_user_info().role
}
