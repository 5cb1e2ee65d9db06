//! SQL fragment builders for catalog listings.
//!
//! Request values never reach the statement text: filters render `?`
//! placeholders and carry their values as [`BindValue`]s, and ordering only
//! ever emits column names from a fixed [`SortKey`] table.

use racebook_core::error::CoreError;
use racebook_core::ordering::{validate_order_by, SortKey, SortTerm};
use racebook_core::types::SENTINEL_ID;
use sqlx::query::Query;
use sqlx::sqlite::{Sqlite, SqliteArguments};

// ---------------------------------------------------------------------------
// Bind values
// ---------------------------------------------------------------------------

/// Typed bind value for dynamically-built catalog queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindValue {
    BigInt(i64),
    Text(String),
}

// ---------------------------------------------------------------------------
// Filter
// ---------------------------------------------------------------------------

/// A ` AND ...` fragment plus the values bound to its placeholders, in order.
///
/// Appended after a constant base predicate, so an empty fragment means no
/// narrowing at all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterClause {
    pub sql: String,
    pub binds: Vec<BindValue>,
}

impl FilterClause {
    /// Narrow `column` to the given set (when non-empty) and, optionally, to
    /// visible rows only.
    pub fn build(column: &str, values: Vec<BindValue>, visible_only: bool) -> Self {
        let mut sql = String::new();

        if !values.is_empty() {
            let placeholders = vec!["?"; values.len()].join(", ");
            sql.push_str(&format!(" AND {column} IN ({placeholders})"));
        }

        if visible_only {
            sql.push_str(" AND visible = 1");
        }

        Self { sql, binds: values }
    }

    /// Bind every value, in placeholder order.
    pub fn bind_to<'q>(
        &'q self,
        mut q: Query<'q, Sqlite, SqliteArguments<'q>>,
    ) -> Query<'q, Sqlite, SqliteArguments<'q>> {
        for val in &self.binds {
            q = match val {
                BindValue::BigInt(v) => q.bind(*v),
                BindValue::Text(v) => q.bind(v.as_str()),
            };
        }
        q
    }
}

// ---------------------------------------------------------------------------
// Ordering
// ---------------------------------------------------------------------------

/// Render ` ORDER BY col DIR, ...` preserving request order.
///
/// Returns an empty string for no terms, and a validation error (with no
/// fragment) if a key is requested in both directions.
pub fn order_by_clause<K: SortKey>(terms: &[SortTerm<K>]) -> Result<String, CoreError> {
    if terms.is_empty() {
        return Ok(String::new());
    }

    validate_order_by(terms)?;

    let columns: Vec<String> = terms
        .iter()
        .map(|term| format!("{} {}", term.key.column(), term.direction.as_str()))
        .collect();

    Ok(format!(" ORDER BY {}", columns.join(", ")))
}

// ---------------------------------------------------------------------------
// Statements
// ---------------------------------------------------------------------------

/// Full listing statement. The sentinel row is always excluded.
pub fn select_list_sql(columns: &str, table: &str, filter: &FilterClause, order_by: &str) -> String {
    format!(
        "SELECT {columns} FROM {table} WHERE id <> {SENTINEL_ID}{}{order_by}",
        filter.sql
    )
}

/// Single-row lookup statement. The sentinel row is never found.
pub fn select_by_id_sql(columns: &str, table: &str) -> String {
    format!("SELECT {columns} FROM {table} WHERE id = ? AND id <> {SENTINEL_ID}")
}
