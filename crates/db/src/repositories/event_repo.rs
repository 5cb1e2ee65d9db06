//! Catalog descriptor for the `events` table.

use racebook_core::ordering::SortTerm;
use racebook_core::sports::EventCategory;
use racebook_core::status::Status;
use racebook_core::types::Timestamp;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;

use super::catalog_repo::{CatalogRepo, CatalogResource, ListRequest};
use crate::models::event::{Event, EventSortKey, ListEventsRequest};
use crate::query::BindValue;

/// Column list for `events` SELECT queries.
const COLUMNS: &str = "id, name, category, competition, visible, advertised_start_time";

/// Descriptor for the sports events catalog.
pub struct Events;

/// List and lookup operations for sports events.
pub type EventRepo = CatalogRepo<Events>;

impl CatalogResource for Events {
    const ENTITY: &'static str = "Event";
    const TABLE: &'static str = "events";
    const COLUMNS: &'static str = COLUMNS;
    const FILTER_COLUMN: &'static str = "category";

    type Request = ListEventsRequest;
    type Entity = Event;

    fn map_row(row: &SqliteRow, now: Timestamp) -> Result<Event, sqlx::Error> {
        let category: String = row.try_get("category")?;
        let advertised_start_time: Timestamp = row.try_get("advertised_start_time")?;

        Ok(Event {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            category: EventCategory::from_db_str(&category),
            competition: row.try_get("competition")?,
            visible: row.try_get("visible")?,
            advertised_start_time,
            status: Status::at(advertised_start_time, now),
        })
    }
}

impl ListRequest for ListEventsRequest {
    type SortKey = EventSortKey;

    /// Categories are stored by name, so they bind as text.
    fn filter_values(&self) -> Vec<BindValue> {
        self.categories
            .iter()
            .map(|category| BindValue::Text(category.as_str().to_string()))
            .collect()
    }

    fn visible_only(&self) -> bool {
        self.visible_only
    }

    fn order_by(&self) -> &[SortTerm<EventSortKey>] {
        &self.order_by
    }
}
