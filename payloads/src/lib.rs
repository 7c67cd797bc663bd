pub mod api_client;
pub mod requests;
pub mod responses;

pub use api_client::{APIClient, ClientError};

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Server-assigned key of a reservation.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    Serialize,
    Deserialize,
)]
#[serde(transparent)]
pub struct EventId(pub u64);

/// Room selection of a reservation, encoded as a bitmask.
///
/// ```text
/// 0b00 -> no room
/// 0b01 -> north
/// 0b10 -> south
/// 0b11 -> whole auditorium
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Display,
    Serialize,
    Deserialize,
)]
#[serde(transparent)]
pub struct Rooms(pub u8);

impl Rooms {
    pub const NORTH: u8 = 0b01;
    pub const SOUTH: u8 = 0b10;

    pub fn from_flags(north: bool, south: bool) -> Self {
        let mut bits = 0;
        if north {
            bits |= Self::NORTH;
        }
        if south {
            bits |= Self::SOUTH;
        }
        Self(bits)
    }

    pub fn north(&self) -> bool {
        self.0 & Self::NORTH != 0
    }

    pub fn south(&self) -> bool {
        self.0 & Self::SOUTH != 0
    }

    pub fn bits(&self) -> u8 {
        self.0
    }
}

/// Role of the signed-in user as reported by `GET me/`.
///
/// Only the exact codes `noob` and `approver` have a display label. Any
/// other code, including differently cased ones, is kept verbatim in
/// [`Role::Other`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    #[default]
    Noob,
    Approver,
    Other(String),
}

impl Role {
    /// The server's code for this role.
    pub fn code(&self) -> &str {
        match self {
            Self::Noob => "noob",
            Self::Approver => "approver",
            Self::Other(code) => code,
        }
    }

    /// Display label, or `None` for codes without a mapping.
    pub fn label(&self) -> Option<&'static str> {
        match self {
            Self::Noob => Some("Kámen"),
            Self::Approver => Some("Soulis"),
            Self::Other(_) => None,
        }
    }
}

impl From<String> for Role {
    fn from(code: String) -> Self {
        match code.as_str() {
            "noob" => Self::Noob,
            "approver" => Self::Approver,
            _ => Self::Other(code),
        }
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.code().to_string()
    }
}

/// Shows the label, falling back to the raw server code.
impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label().unwrap_or_else(|| self.code()))
    }
}

/// Classification of a create request, as reported to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateOutcome {
    /// Accepted by the server. The key is present when the server sends it.
    Created(Option<EventId>),
    /// Another approved reservation already holds the room in that window.
    Conflict,
    /// Rejected by the server with an unknown result code, or the request
    /// never completed.
    Failed(CreateFailure),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateFailure {
    ResultCode(i64),
    /// The server answered with a success status but no readable result
    /// code.
    MalformedBody(String),
    Transport(String),
}

impl CreateOutcome {
    pub const RESULT_OK: i64 = 0;
    pub const RESULT_CONFLICT: i64 = 2;

    pub fn from_result(response: &responses::CreateEventResult) -> Self {
        match response.result {
            Self::RESULT_OK => Self::Created(response.id),
            Self::RESULT_CONFLICT => Self::Conflict,
            code => Self::Failed(CreateFailure::ResultCode(code)),
        }
    }

    pub fn is_created(&self) -> bool {
        matches!(self, Self::Created(_))
    }

    /// Message for the blocking user alert, if this outcome raises one.
    ///
    /// Transport failures are only logged and never alert.
    pub fn alert_message(&self) -> Option<&'static str> {
        match self {
            Self::Created(_) => None,
            Self::Conflict => Some(
                "2 events cannot use the same auditorium at the same time.",
            ),
            Self::Failed(
                CreateFailure::ResultCode(_) | CreateFailure::MalformedBody(_),
            ) => Some("Whoops. Something is broken. Please try again."),
            Self::Failed(CreateFailure::Transport(_)) => None,
        }
    }
}
