/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: the pool is reference-counted and safe for concurrent
/// use, so requests never serialize on it.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: racebook_db::DbPool,
}
