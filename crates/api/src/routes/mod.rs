pub mod course;
pub mod dashboard;
pub mod health;
pub mod student;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /students            list, create
/// /students/{id}       get, update, delete
///
/// /courses             list, create
/// /courses/{id}        get, update, delete (guarded)
///
/// /dashboard/stats     aggregate statistics
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/students", student::router())
        .nest("/courses", course::router())
        .nest("/dashboard", dashboard::router())
}
