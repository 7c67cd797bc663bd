use yew::prelude::*;
use yewdux::prelude::*;

use crate::State;

#[hook]
pub fn use_user_email() -> Option<String> {
    let email =
        use_selector(|state: &State| state.user_email().map(str::to_string));
    (*email).clone()
}

#[hook]
pub fn use_user_name() -> Option<String> {
    let name =
        use_selector(|state: &State| state.user_name().map(str::to_string));
    (*name).clone()
}
