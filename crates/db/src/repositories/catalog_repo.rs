//! Generic listing and lookup over a catalog table.
//!
//! A [`CatalogResource`] describes one table: its columns, the column its
//! set-membership filter applies to, its list request type and how a row
//! becomes an entity. [`CatalogRepo`] turns a request into one parameterized
//! SELECT, streams the rows and maps each one as it arrives.

use std::marker::PhantomData;

use chrono::Utc;
use futures::TryStreamExt;
use racebook_core::error::CoreError;
use racebook_core::ordering::{SortKey, SortTerm};
use racebook_core::types::{DbId, Timestamp};
use sqlx::sqlite::SqliteRow;

use crate::query::{order_by_clause, select_by_id_sql, select_list_sql, BindValue, FilterClause};
use crate::DbPool;

// ---------------------------------------------------------------------------
// Descriptors
// ---------------------------------------------------------------------------

/// Filter and ordering inputs of a list request.
pub trait ListRequest {
    type SortKey: SortKey;

    /// Values of the categorical filter dimension, converted for binding.
    fn filter_values(&self) -> Vec<BindValue>;

    fn visible_only(&self) -> bool;

    fn order_by(&self) -> &[SortTerm<Self::SortKey>];
}

/// Static description of one catalog table.
pub trait CatalogResource {
    /// Label used in not-found errors and logs.
    const ENTITY: &'static str;
    const TABLE: &'static str;
    /// Column list shared by the listing and lookup statements.
    const COLUMNS: &'static str;
    /// Column narrowed by [`ListRequest::filter_values`].
    const FILTER_COLUMN: &'static str;

    type Request: ListRequest + Sync;
    type Entity: Send;

    /// Map one row selected with [`Self::COLUMNS`]. `now` decides the
    /// derived status.
    fn map_row(row: &SqliteRow, now: Timestamp) -> Result<Self::Entity, sqlx::Error>;
}

// ---------------------------------------------------------------------------
// CatalogRepo
// ---------------------------------------------------------------------------

/// Provides read-only list and lookup operations for one catalog.
pub struct CatalogRepo<R>(PhantomData<R>);

impl<R: CatalogResource> CatalogRepo<R> {
    /// List every row matching the request's filters, in the requested order.
    ///
    /// Conflicting ordering fails with a validation error before the database
    /// is touched. Any storage or decode failure discards the rows collected
    /// so far and surfaces as an internal error.
    pub async fn list(pool: &DbPool, request: &R::Request) -> Result<Vec<R::Entity>, CoreError> {
        let filter = FilterClause::build(
            R::FILTER_COLUMN,
            request.filter_values(),
            request.visible_only(),
        );
        let order_by = order_by_clause(request.order_by())?;
        let query = select_list_sql(R::COLUMNS, R::TABLE, &filter, &order_by);

        tracing::debug!(entity = R::ENTITY, sql = %query, binds = filter.binds.len(), "Listing catalog");

        // Dropping the stream releases the statement, including on early return.
        let mut rows = filter.bind_to(sqlx::query(&query)).fetch(pool);

        let mut entities = Vec::new();
        while let Some(row) = rows
            .try_next()
            .await
            .map_err(|err| internal(R::ENTITY, err))?
        {
            let entity = R::map_row(&row, Utc::now()).map_err(|err| internal(R::ENTITY, err))?;
            entities.push(entity);
        }

        Ok(entities)
    }

    /// Find one row by id.
    ///
    /// Absence is a `NotFound` error, never a default entity. The reserved
    /// `id = 0` row is never returned, so looking it up is always `NotFound`.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<R::Entity, CoreError> {
        let query = select_by_id_sql(R::COLUMNS, R::TABLE);

        let row = sqlx::query(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(|err| internal(R::ENTITY, err))?
            .ok_or(CoreError::NotFound {
                entity: R::ENTITY,
                id,
            })?;

        R::map_row(&row, Utc::now()).map_err(|err| internal(R::ENTITY, err))
    }
}

/// Wrap a storage failure as an internal error. Logged where it is mapped
/// to a response.
fn internal(entity: &'static str, err: sqlx::Error) -> CoreError {
    CoreError::Internal(format!("{entity} query failed: {err}"))
}
