pub mod use_approve;
pub mod use_booking_context;
pub mod use_create_event;
pub mod use_delete_event;
pub mod use_events;
pub mod use_identity;
pub mod use_polling;
pub mod use_update_event;
pub mod use_user_info;

pub use use_approve::use_approve;
pub use use_booking_context::{BookingContext, use_booking_context};
pub use use_create_event::use_create_event;
pub use use_delete_event::{use_delete_event, use_disapprove};
pub use use_events::use_events;
pub use use_identity::{use_user_email, use_user_name};
pub use use_polling::{PollingHookReturn, use_polling};
pub use use_update_event::use_update_event;
pub use use_user_info::{UserInfo, use_user_info, use_user_role};
