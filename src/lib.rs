use axum::{
    Router,
    extract::{FromRef, Request},
    http::HeaderName,
    middleware::{self, Next},
    response::{IntoResponse, Redirect, Response},
};

use tower::ServiceBuilder;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::{DefaultOnResponse, TraceLayer},
};
use tracing::{Level, Span};

// --- Module Structure ---

// Core application services and components.
pub mod auth;
pub mod config;
pub mod handlers;
pub mod render;

// Module for routing segregation (Public, Guarded) plus the route table.
pub mod routes;
use auth::AuthSession; // The resolved authenticated session identity.
use routes::{guarded, public};

// --- Public Re-exports ---

// Makes core state types easily accessible to the main application entry point (main.rs).
pub use config::AppConfig;

/// AppState
///
/// Implements the **Unified State Pattern**. This is the single, thread-safe, and
/// immutable container holding the application's shared services. The routing table
/// itself is compile-time constant, so the state currently carries configuration only;
/// the pattern keeps the seam open for future members.
#[derive(Clone)]
pub struct AppState {
    /// Configuration: The loaded, immutable environment configuration.
    pub config: AppConfig,
}

// Allows extractors and middleware to selectively pull components from the shared AppState.
impl FromRef<AppState> for AppConfig {
    fn from_ref(app_state: &AppState) -> AppConfig {
        app_state.config.clone()
    }
}

/// ExternalGroups
///
/// Mount points for the two route groups owned outside this crate: account
/// settings and the auth flow (login, logout, email verification). Their
/// contents are deliberately not declared here; the portal only reserves the
/// seams where they attach. The default mounts empty groups.
#[derive(Default)]
pub struct ExternalGroups {
    pub settings: Router<AppState>,
    pub auth: Router<AppState>,
}

/// require_verified
///
/// The session gate for the guarded page routes.
///
/// *Mechanism*: The `AuthSession` extractor authenticates the request. If
/// authentication fails, the extractor rejects with a redirect to the login
/// page before this function body runs. An authenticated-but-unverified
/// session is then redirected to the verification notice, so a guarded page
/// only ever renders for a session that is both authenticated and verified.
async fn require_verified(session: AuthSession, request: Request, next: Next) -> Response {
    if !session.verified {
        tracing::debug!(user_id = %session.id, "unverified session on guarded route");
        return Redirect::to(auth::VERIFY_NOTICE_PATH).into_response();
    }
    next.run(request).await
}

/// create_router
///
/// Assembles the application's entire routing structure, applies global and scoped
/// middleware, and registers the application state.
pub fn create_router(state: AppState, external: ExternalGroups) -> Router {
    // Header name constant for Request Correlation.
    let x_request_id = HeaderName::from_static("x-request-id");

    // 1. Base Router Assembly
    let base_router = Router::new()
        // Public Routes: No middleware applied.
        .merge(public::public_routes())
        // Guarded Routes: Protected by the session gate. The route_layer
        // scopes the gate to exactly these routes.
        .merge(guarded::guarded_routes().route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_verified,
        )))
        // External Groups: settings and auth pages, declared elsewhere.
        .merge(external.settings)
        .merge(external.auth)
        // Anything outside the table and the external groups is a 404 page.
        .fallback(handlers::not_found)
        // Apply the Unified State to all routes.
        .with_state(state);

    // 2. Observability and Correlation Layers (Applied outermost/first)
    base_router.layer(
        ServiceBuilder::new()
            // 2a. Request ID Generation: Generates a unique UUID for every incoming request.
            .layer(SetRequestIdLayer::new(x_request_id.clone(), MakeRequestUuid))
            // 2b. Request Tracing: Wraps the entire request/response lifecycle in a
            // tracing span. Uses the `trace_span_logger` to include the generated
            // request ID.
            .layer(
                TraceLayer::new_for_http()
                    .make_span_with(trace_span_logger)
                    .on_response(
                        DefaultOnResponse::new()
                            .level(Level::INFO)
                            .latency_unit(tower_http::LatencyUnit::Millis),
                    ),
            )
            // 2c. Request ID Propagation: Ensures the generated x-request-id header
            // is returned to the client.
            .layer(PropagateRequestIdLayer::new(x_request_id)),
    )
}

/// trace_span_logger
///
/// Helper function used by `TraceLayer` to customize the tracing span creation.
/// It extracts the `x-request-id` header (if present) and includes it in the
/// structured logging metadata alongside the HTTP method and URI, so every log
/// line for a single request is correlated by a unique ID.
fn trace_span_logger(request: &axum::http::Request<axum::body::Body>) -> Span {
    let request_id = request
        .headers()
        .get("x-request-id")
        .and_then(|value| value.to_str().ok())
        .unwrap_or("unknown");

    tracing::info_span!(
        "http_request",
        method = ?request.method(),
        uri = ?request.uri(),
        req_id = %request_id,
    )
}
