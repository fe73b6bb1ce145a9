use crate::{AppState, handlers, routes::table};
use axum::Router;

/// Guarded Router Module
///
/// Defines the page routes reachable only with an authenticated **and**
/// verified session: the dashboard, inbox and customers pages.
///
/// Access Control Strategy:
/// This router carries no gate itself. `create_router` wraps it with the
/// session-gate middleware (`require_verified` over the `AuthSession`
/// extractor), which guarantees every handler below this point runs with a
/// validated, verified session or not at all. Keeping the gate at the layer
/// above means no individual page can forget it.
pub fn guarded_routes() -> Router<AppState> {
    table::ROUTES
        .iter()
        .filter(|route| route.guarded)
        .fold(Router::new(), |router, route| {
            router.route(route.path, handlers::page(route))
        })
}
