/// Catalog primary keys are SQLite INTEGER rowids.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Identifier reserved for the bootstrap row of every catalog table.
///
/// Never returned by a listing or lookup.
pub const SENTINEL_ID: DbId = 0;
