//! UI-ready reservations and the conversions to and from the wire types.

use jiff::Timestamp;
use payloads::{EventId, Rooms, requests, responses};
use serde::Serialize;

/// A reservation as the views consume it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Event {
    pub id: EventId,
    pub name: String,
    pub description: String,
    pub begin_time: Timestamp,
    pub end_time: Timestamp,
    pub layout: u8,
    pub north: bool,
    pub south: bool,
    pub approved: bool,
    /// Attendee count, or a deterministic stand-in for records that do not
    /// carry one.
    pub people: u16,
    pub author_email: String,
    pub author_name: String,
}

impl Event {
    pub fn rooms(&self) -> Rooms {
        Rooms::from_flags(self.north, self.south)
    }
}

/// Partial record whose JSON length seeds the placeholder attendee count.
/// Field order and value shapes are part of the output.
#[derive(Serialize)]
struct PlaceholderSeed<'a> {
    id: EventId,
    name: &'a str,
    description: &'a str,
    author: &'a str,
    begin_time: i64,
    end_time: i64,
    layout: u8,
    approved: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    people: Option<u16>,
    north: u8,
    south: u8,
    author_email: &'a str,
    author_name: &'a str,
}

/// Turn a `[key, attributes]` pair from the list endpoint into an [`Event`].
pub fn map_event((id, attributes): responses::EventRecord) -> Event {
    let author_name = display_name_from_email(&attributes.author);

    let seed = PlaceholderSeed {
        id,
        name: &attributes.name,
        description: &attributes.description,
        author: &attributes.author,
        begin_time: attributes.begin_time.as_millisecond(),
        end_time: attributes.end_time.as_millisecond(),
        layout: attributes.layout,
        approved: attributes.approved,
        people: attributes.people,
        north: attributes.rooms.bits() & Rooms::NORTH,
        south: attributes.rooms.bits() & Rooms::SOUTH,
        author_email: &attributes.author,
        author_name: &author_name,
    };
    let people = attributes
        .people
        .unwrap_or_else(|| placeholder_attendees(&seed));

    Event {
        id,
        north: attributes.rooms.north(),
        south: attributes.rooms.south(),
        people,
        author_name,
        author_email: attributes.author,
        name: attributes.name,
        description: attributes.description,
        begin_time: attributes.begin_time,
        end_time: attributes.end_time,
        layout: attributes.layout,
        approved: attributes.approved,
    }
}

/// Stand-in attendee count for records without one: the JSON length of
/// `seed` in UTF-16 code units, modulo 170, plus 10. Always in `10..=179`.
///
/// This carries no meaning beyond being stable for the same record.
fn placeholder_attendees(seed: &impl Serialize) -> u16 {
    let len = serde_json::to_string(seed)
        .map(|json| json.encode_utf16().count())
        .unwrap_or_default();
    (len % 170) as u16 + 10
}

/// `"jane.doe@example.com"` -> `"Jane Doe"`.
///
/// Takes the part before the last `@` (nothing when there is no `@`),
/// splits it on `.` and upper-cases the first letter of every segment.
/// Empty segments are kept, so every `.` becomes exactly one space and the
/// name is as long as the local part.
pub fn display_name_from_email(email: &str) -> String {
    let local = email.rsplit_once('@').map_or("", |(local, _)| local);

    local
        .split('.')
        .map(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Input of the create form.
#[derive(Debug, Clone, PartialEq)]
pub struct EventDraft {
    pub name: String,
    pub description: String,
    pub begin_time: Timestamp,
    pub end_time: Timestamp,
    pub layout: u8,
    pub north: bool,
    pub south: bool,
    pub people: Option<u16>,
}

impl EventDraft {
    pub fn into_request(self, author: &str) -> requests::CreateEvent {
        requests::CreateEvent {
            rooms: Rooms::from_flags(self.north, self.south),
            author: author.to_string(),
            name: self.name,
            description: self.description,
            begin_time: self.begin_time,
            end_time: self.end_time,
            layout: self.layout,
            people: self.people,
        }
    }
}

/// Partial edit of an existing reservation. `None` leaves a field as is.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub begin_time: Option<Timestamp>,
    pub end_time: Option<Timestamp>,
    pub layout: Option<u8>,
    pub north: Option<bool>,
    pub south: Option<bool>,
    pub people: Option<u16>,
}

impl EventPatch {
    /// The rooms are only re-encoded when both flags are given; a lone flag
    /// cannot be turned into a bitmask and is dropped.
    pub fn to_request(&self) -> requests::UpdateEvent {
        let rooms = match (self.north, self.south) {
            (Some(north), Some(south)) => {
                Some(Rooms::from_flags(north, south))
            }
            (None, None) => None,
            (north, south) => {
                tracing::debug!(
                    ?north,
                    ?south,
                    "Ignoring room change without both flags"
                );
                None
            }
        };

        requests::UpdateEvent {
            name: self.name.clone(),
            description: self.description.clone(),
            rooms,
            begin_time: self.begin_time,
            end_time: self.end_time,
            layout: self.layout,
            people: self.people,
        }
    }
}
