//! Catalog descriptor for the `races` table.

use racebook_core::ordering::SortTerm;
use racebook_core::status::Status;
use racebook_core::types::Timestamp;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;

use super::catalog_repo::{CatalogRepo, CatalogResource, ListRequest};
use crate::models::race::{ListRacesRequest, Race, RaceSortKey};
use crate::query::BindValue;

/// Column list for `races` SELECT queries.
const COLUMNS: &str = "id, meeting_id, name, number, visible, advertised_start_time";

/// Descriptor for the racing catalog.
pub struct Races;

/// List and lookup operations for races.
pub type RaceRepo = CatalogRepo<Races>;

impl CatalogResource for Races {
    const ENTITY: &'static str = "Race";
    const TABLE: &'static str = "races";
    const COLUMNS: &'static str = COLUMNS;
    const FILTER_COLUMN: &'static str = "meeting_id";

    type Request = ListRacesRequest;
    type Entity = Race;

    fn map_row(row: &SqliteRow, now: Timestamp) -> Result<Race, sqlx::Error> {
        let advertised_start_time: Timestamp = row.try_get("advertised_start_time")?;

        Ok(Race {
            id: row.try_get("id")?,
            meeting_id: row.try_get("meeting_id")?,
            name: row.try_get("name")?,
            number: row.try_get("number")?,
            visible: row.try_get("visible")?,
            advertised_start_time,
            status: Status::at(advertised_start_time, now),
        })
    }
}

impl ListRequest for ListRacesRequest {
    type SortKey = RaceSortKey;

    fn filter_values(&self) -> Vec<BindValue> {
        self.meeting_ids.iter().copied().map(BindValue::BigInt).collect()
    }

    fn visible_only(&self) -> bool {
        self.visible_only
    }

    fn order_by(&self) -> &[SortTerm<RaceSortKey>] {
        &self.order_by
    }
}
