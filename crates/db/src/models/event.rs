//! Sports event entity, sort keys and list request.

use racebook_core::ordering::{SortKey, SortTerm};
use racebook_core::sports::EventCategory;
use racebook_core::status::Status;
use racebook_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};

/// A sports event as returned to callers. `status` is derived at read time.
#[derive(Debug, Clone, Serialize)]
pub struct Event {
    pub id: DbId,
    pub name: String,
    pub category: EventCategory,
    pub competition: String,
    pub visible: bool,
    pub advertised_start_time: Timestamp,
    pub status: Status,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventSortKey {
    AdvertisedStartTime,
    Name,
    Competition,
}

impl SortKey for EventSortKey {
    const ALL: &'static [Self] = &[Self::AdvertisedStartTime, Self::Name, Self::Competition];

    fn name(&self) -> &'static str {
        match self {
            Self::AdvertisedStartTime => "ADVERTISED_START_TIME",
            Self::Name => "NAME",
            Self::Competition => "COMPETITION",
        }
    }

    fn column(&self) -> &'static str {
        match self {
            Self::AdvertisedStartTime => "advertised_start_time",
            Self::Name => "name",
            Self::Competition => "competition",
        }
    }
}

/// Body of `POST /list-events`. Every field is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ListEventsRequest {
    pub categories: Vec<EventCategory>,
    pub visible_only: bool,
    pub order_by: Vec<SortTerm<EventSortKey>>,
}
