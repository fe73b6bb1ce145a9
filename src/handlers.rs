use crate::{AppState, render, routes::table::Route};
use axum::{
    http::{HeaderMap, StatusCode, Uri},
    response::Response,
    routing::{MethodRouter, get},
};

/// page
///
/// Builds the GET handler for one route-table entry. Every page route is the
/// same operation — render the declared view with no props — so the table
/// drives a single shared handler instead of one function body per page.
pub fn page(route: &'static Route) -> MethodRouter<AppState> {
    get(move |uri: Uri, headers: HeaderMap| async move {
        render::page(route.view, &uri, &headers)
    })
}

/// not_found
///
/// Router fallback for paths outside the table and the external groups.
/// Renders the Error page with a 404 status; an unknown URL must never
/// surface as a server error.
pub async fn not_found(uri: Uri, headers: HeaderMap) -> Response {
    render::error(StatusCode::NOT_FOUND, &uri, &headers)
}
