/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheap to clone: the pool is reference-counted. Requests never mutate it.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool; every repository call draws from it.
    pub pool: school_db::DbPool,
}
