/// Route
///
/// One static binding of a URL path to a named view. The portal's page
/// surface is declared entirely through the `ROUTES` table below; the
/// routers in `public` and `guarded` are built from it, so a new page is a
/// one-line table edit.
#[derive(Debug)]
pub struct Route {
    /// URL path pattern. Static only; no dynamic segments in this table.
    pub path: &'static str,
    /// Stable identifier used for reverse lookup and link generation.
    pub name: &'static str,
    /// The client-side page component to render.
    pub view: &'static str,
    /// Whether the authenticated+verified session gate applies.
    pub guarded: bool,
}

/// The portal's page routes. Declared once at compile time, never mutated.
///
/// Invariants (checked by the route table tests): names are unique, paths
/// are unique, and every guarded route sits behind the session gate because
/// `guarded_routes()` filters on this flag.
pub const ROUTES: &[Route] = &[
    Route {
        path: "/",
        name: "home",
        view: "Welcome",
        guarded: false,
    },
    Route {
        path: "/dashboard",
        name: "dashboard",
        view: "Dashboard",
        guarded: true,
    },
    Route {
        path: "/inbox",
        name: "inbox",
        view: "Inbox",
        guarded: true,
    },
    Route {
        path: "/customers",
        name: "customers",
        view: "Customers",
        guarded: true,
    },
];

/// path_for
///
/// Reverse lookup: resolve a route name back to its declared path. This is
/// what link generation uses, so templates never hardcode paths.
pub fn path_for(name: &str) -> Option<&'static str> {
    ROUTES
        .iter()
        .find(|route| route.name == name)
        .map(|route| route.path)
}

/// find
///
/// Forward lookup by path. The axum router performs the actual dispatch;
/// this exists for introspection (startup logging, tests).
pub fn find(path: &str) -> Option<&'static Route> {
    ROUTES.iter().find(|route| route.path == path)
}
