use crate::{EventId, Role, Rooms};
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// A reservation as stored by the server, without its key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventAttributes {
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Email of the user who requested the reservation.
    pub author: String,
    pub rooms: Rooms,
    pub begin_time: Timestamp,
    pub end_time: Timestamp,
    pub layout: u8,
    #[serde(default)]
    pub approved: bool,
    #[serde(default)]
    pub people: Option<u16>,
}

/// One element of the event list: a `[key, attributes]` JSON pair.
pub type EventRecord = (EventId, EventAttributes);

/// Body returned by `POST api/events/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateEventResult {
    pub result: i64,
    #[serde(default)]
    pub id: Option<EventId>,
}

/// The signed-in user as returned by `GET me/`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Role,
}
