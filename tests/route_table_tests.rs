use crm_portal::routes::table::{self, ROUTES};
use std::collections::HashSet;

// --- Table Invariants ---

#[test]
fn test_route_names_are_unique() {
    let mut seen = HashSet::new();
    for route in ROUTES {
        assert!(
            seen.insert(route.name),
            "Duplicate route name in table: {}",
            route.name
        );
    }
}

#[test]
fn test_route_paths_are_unique() {
    let mut seen = HashSet::new();
    for route in ROUTES {
        assert!(
            seen.insert(route.path),
            "Duplicate route path in table: {}",
            route.path
        );
    }
}

#[test]
fn test_reverse_lookup_round_trips() {
    // Every name resolves back to its declared path, and that path resolves
    // back to the same entry.
    for route in ROUTES {
        let path = table::path_for(route.name).expect("name must resolve");
        assert_eq!(path, route.path);

        let found = table::find(path).expect("path must resolve");
        assert_eq!(found.name, route.name);
        assert_eq!(found.view, route.view);
    }
}

#[test]
fn test_unknown_lookups_return_none() {
    assert!(table::path_for("billing").is_none());
    assert!(table::find("/billing").is_none());
}

// --- Declared Surface ---

#[test]
fn test_declared_page_surface() {
    let expect = [
        ("/", "home", "Welcome", false),
        ("/dashboard", "dashboard", "Dashboard", true),
        ("/inbox", "inbox", "Inbox", true),
        ("/customers", "customers", "Customers", true),
    ];

    assert_eq!(ROUTES.len(), expect.len());
    for (path, name, view, guarded) in expect {
        let route = table::find(path).expect("declared path missing from table");
        assert_eq!(route.name, name);
        assert_eq!(route.view, view);
        assert_eq!(route.guarded, guarded, "guard flag mismatch for {}", path);
    }
}

#[test]
fn test_home_is_the_only_public_page() {
    let public: Vec<_> = ROUTES.iter().filter(|r| !r.guarded).collect();
    assert_eq!(public.len(), 1);
    assert_eq!(public[0].name, "home");
}
