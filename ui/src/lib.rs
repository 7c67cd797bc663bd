//! Data hooks for the auditorium booking frontend.
//!
//! The read hooks ([`hooks::use_events`], [`hooks::use_user_info`]) poll
//! the backend in the background; the write hooks submit a change and
//! forget about it, except for creation which reports a [`CreateOutcome`].
//! Everything talks to the backend through the [`payloads::APIClient`] of
//! the surrounding [`BookingContext`].

pub mod config;
pub mod events;
pub mod hooks;
mod logs;
pub mod mutations;
pub mod polling;
pub mod state;
pub mod time;
mod utils;

pub use config::Config;
pub use events::{Event, EventDraft, EventPatch};
pub use hooks::BookingContext;
pub use logs::init_logging;
pub use payloads::CreateOutcome;
pub use state::{AuthState, AuthUser, State};
pub use time::TimeSource;
