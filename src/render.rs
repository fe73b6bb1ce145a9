use axum::{
    Json,
    http::{HeaderMap, HeaderValue, StatusCode, Uri, header},
    response::{Html, IntoResponse, Response},
};
use serde::Serialize;
use serde_json::json;

// Inertia protocol headers. The client-side adapter sends X-Inertia on every
// SPA navigation; the first page load is a plain browser request without it.
pub const INERTIA_HEADER: &str = "x-inertia";
const INERTIA_VERSION_HEADER: &str = "x-inertia-version";
const INERTIA_LOCATION_HEADER: &str = "x-inertia-location";

/// Current asset version. Stamped into every page object so the client can
/// detect a stale front-end bundle and hard-reload (the 409 handshake below).
/// TODO: derive from the front-end build manifest once that pipeline lands.
pub const ASSET_VERSION: &str = "dev";

/// Page
///
/// The Inertia page object: which client-side component to mount, its props,
/// the URL it was rendered for, and the asset version. Serialized verbatim
/// into the JSON response for SPA navigations, or escaped into the HTML
/// shell's `data-page` attribute for full page loads.
#[derive(Serialize)]
pub struct Page {
    pub component: &'static str,
    pub props: serde_json::Value,
    pub url: String,
    pub version: &'static str,
}

/// page
///
/// Renders the named view for the requested URI. All table routes attach no
/// props; the component itself fetches whatever data it needs.
pub fn page(component: &'static str, uri: &Uri, headers: &HeaderMap) -> Response {
    respond(
        Page {
            component,
            props: json!({}),
            url: uri.path().to_string(),
            version: ASSET_VERSION,
        },
        StatusCode::OK,
        headers,
    )
}

/// error
///
/// Renders the shared Error component with the status as its only prop.
/// Used by the router fallback so an unmatched path still produces a proper
/// page response (404), never a bare server error.
pub fn error(status: StatusCode, uri: &Uri, headers: &HeaderMap) -> Response {
    respond(
        Page {
            component: "Error",
            props: json!({ "status": status.as_u16() }),
            url: uri.path().to_string(),
            version: ASSET_VERSION,
        },
        status,
        headers,
    )
}

fn wants_inertia(headers: &HeaderMap) -> bool {
    headers
        .get(INERTIA_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(|value| value == "true")
        .unwrap_or(false)
}

/// respond
///
/// Dispatches a page object into one of the protocol's three response forms:
/// - stale asset version on an Inertia request: 409 + X-Inertia-Location,
///   instructing the client to abandon the SPA visit and hard-reload;
/// - Inertia request: the page object as JSON, tagged with X-Inertia: true;
/// - plain browser request: the HTML document shell carrying the page object.
///
/// All forms set `Vary: X-Inertia` since the same URL serves two bodies.
fn respond(page: Page, status: StatusCode, headers: &HeaderMap) -> Response {
    if wants_inertia(headers) {
        // Asset Version Handshake
        // Only GET routes exist in this table, so the version check applies
        // to every Inertia request that carries the header.
        if let Some(client_version) = headers
            .get(INERTIA_VERSION_HEADER)
            .and_then(|value| value.to_str().ok())
        {
            if client_version != page.version {
                return (
                    StatusCode::CONFLICT,
                    [(INERTIA_LOCATION_HEADER, page.url.clone())],
                )
                    .into_response();
            }
        }

        let mut response = (status, Json(&page)).into_response();
        response
            .headers_mut()
            .insert(INERTIA_HEADER, HeaderValue::from_static("true"));
        response
            .headers_mut()
            .insert(header::VARY, HeaderValue::from_static("X-Inertia"));
        return response;
    }

    // Full page load: embed the page object into the document shell.
    let payload = match serde_json::to_string(&page) {
        Ok(payload) => payload,
        Err(e) => {
            tracing::error!(error = %e, component = page.component, "failed to serialize page object");
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    let mut response = (status, Html(html_shell(page.component, &payload))).into_response();
    response
        .headers_mut()
        .insert(header::VARY, HeaderValue::from_static("X-Inertia"));
    response
}

/// html_shell
///
/// The minimal document the client-side adapter boots from: the page object
/// lives in the `data-page` attribute of the application mount node.
fn html_shell(component: &str, page_json: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head>\n\
         <meta charset=\"utf-8\" />\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\" />\n\
         <title>{title} - CRM Portal</title>\n\
         </head>\n\
         <body>\n\
         <div id=\"app\" data-page=\"{page}\"></div>\n\
         </body>\n\
         </html>\n",
        title = escape_attr(component),
        page = escape_attr(page_json),
    )
}

// Attribute-context HTML escaping for the embedded page JSON.
fn escape_attr(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
