/// Router Module Index
///
/// Organizes the portal's page routing into access-segregated modules.
/// Access control is applied explicitly at the module level (via Axum
/// layers), preventing accidental exposure of guarded pages.
///
/// Both routers are generated from the static route table, so the table is
/// the single source of truth for the portal's page surface.

/// The static path/name/view/guarded table plus its lookup functions.
pub mod table;

/// Routes accessible to all users (anonymous, read-only page loads).
pub mod public;

/// Routes protected by the session gate middleware.
/// Requires a validated, email-verified session.
pub mod guarded;
