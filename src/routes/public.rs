use crate::{AppState, handlers, routes::table};
use axum::Router;

/// Public Router Module
///
/// Defines the page routes that are **unauthenticated** and accessible to
/// any client (anonymous or logged-in). Today that is the welcome page only,
/// but any table entry with `guarded: false` lands here automatically.
pub fn public_routes() -> Router<AppState> {
    table::ROUTES
        .iter()
        .filter(|route| !route.guarded)
        .fold(Router::new(), |router, route| {
            router.route(route.path, handlers::page(route))
        })
}
