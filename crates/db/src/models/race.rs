//! Race entity, sort keys and list request.

use racebook_core::ordering::{SortKey, SortTerm};
use racebook_core::status::Status;
use racebook_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Entity
// ---------------------------------------------------------------------------

/// A race as returned to callers. `status` is derived at read time.
#[derive(Debug, Clone, Serialize)]
pub struct Race {
    pub id: DbId,
    pub meeting_id: DbId,
    pub name: String,
    pub number: i64,
    pub visible: bool,
    pub advertised_start_time: Timestamp,
    pub status: Status,
}

// ---------------------------------------------------------------------------
// Sort keys
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RaceSortKey {
    AdvertisedStartTime,
    MeetingId,
    Name,
    Number,
}

impl SortKey for RaceSortKey {
    const ALL: &'static [Self] = &[
        Self::AdvertisedStartTime,
        Self::MeetingId,
        Self::Name,
        Self::Number,
    ];

    fn name(&self) -> &'static str {
        match self {
            Self::AdvertisedStartTime => "ADVERTISED_START_TIME",
            Self::MeetingId => "MEETING_ID",
            Self::Name => "NAME",
            Self::Number => "NUMBER",
        }
    }

    fn column(&self) -> &'static str {
        match self {
            Self::AdvertisedStartTime => "advertised_start_time",
            Self::MeetingId => "meeting_id",
            Self::Name => "name",
            Self::Number => "number",
        }
    }
}

// ---------------------------------------------------------------------------
// List request
// ---------------------------------------------------------------------------

/// Body of `POST /list-races`. Every field is optional.
///
/// ```json
/// { "meeting_ids": [1, 2], "visible_only": true, "order_by": ["MEETING_ID_ASC"] }
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ListRacesRequest {
    pub meeting_ids: Vec<DbId>,
    pub visible_only: bool,
    pub order_by: Vec<SortTerm<RaceSortKey>>,
}
