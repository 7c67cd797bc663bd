use crate::Rooms;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// Body of `POST api/events/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateEvent {
    pub name: String,
    pub description: String,
    /// Email of the requesting user.
    pub author: String,
    pub rooms: Rooms,
    pub begin_time: Timestamp,
    pub end_time: Timestamp,
    /// Furniture layout of the auditorium.
    pub layout: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub people: Option<u16>,
}

/// Body of `PATCH api/events/{id}/`.
///
/// Absent fields are left out of the JSON entirely so the server keeps its
/// current value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateEvent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rooms: Option<Rooms>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub begin_time: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub people: Option<u16>,
}

impl UpdateEvent {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
