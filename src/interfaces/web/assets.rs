//! Embedded static assets for the browser UI.
//!
//! Only paths on the fixed allow-list are ever served; everything else falls
//! through to the router's 404, so no file outside the curated set (and no
//! traversal trick) can be read through this component.

use axum::{
    body::Body,
    http::{StatusCode, header},
    response::Response,
};
use rust_embed::Embed;

#[derive(Embed)]
#[folder = "web/"]
pub struct WebAssets;

/// URL path → embedded asset name. Compile-time fixed.
const ALLOWED_DOWNLOADS: &[(&str, &str)] = &[
    ("/", "index.html"),
    ("/controller.html", "controller.html"),
    ("/controller.js", "controller.js"),
    ("/scratch_extension.js", "scratch_extension.js"),
    ("/favicon.ico", "favicon.ico"),
];

/// Placeholder replaced with the request's Host header in text assets, so
/// served pages and the Scratch extension point back at this server.
const HOST_PORT_TOKEN: &str = "{{host_port}}";

/// Look up the embedded asset name for a request path. `None` means the
/// path is not on the allow-list.
pub fn lookup(path: &str) -> Option<&'static str> {
    ALLOWED_DOWNLOADS
        .iter()
        .find(|(url, _)| *url == path)
        .map(|(_, asset)| *asset)
}

/// Build the response for an allow-listed asset. Text assets get every
/// `{{host_port}}` occurrence replaced with `host_port`; binary assets are
/// served untouched. Content-Type is guessed from the file name and omitted
/// when unknown. `None` means the embedded file is missing, which is a
/// local 500-class error for the caller.
pub fn render(asset_name: &str, host_port: &str) -> Option<Response> {
    let content = WebAssets::get(asset_name)?;

    let body = match std::str::from_utf8(&content.data) {
        Ok(text) => Body::from(text.replace(HOST_PORT_TOKEN, host_port)),
        Err(_) => Body::from(content.data.to_vec()),
    };

    let mut builder = Response::builder().status(StatusCode::OK);
    if let Some(mime) = mime_guess::from_path(asset_name).first() {
        builder = builder.header(header::CONTENT_TYPE, mime.as_ref());
    }

    // Infallible: status and headers are well-formed above
    Some(builder.body(body).unwrap())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_covers_allow_list_only() {
        assert_eq!(lookup("/"), Some("index.html"));
        assert_eq!(lookup("/controller.html"), Some("controller.html"));
        assert_eq!(lookup("/controller.js"), Some("controller.js"));
        assert_eq!(lookup("/scratch_extension.js"), Some("scratch_extension.js"));
        assert_eq!(lookup("/favicon.ico"), Some("favicon.ico"));

        assert_eq!(lookup("/index.html"), None);
        assert_eq!(lookup("/../etc/passwd"), None);
        assert_eq!(lookup("/controller.html/"), None);
        assert_eq!(lookup(""), None);
    }

    #[test]
    fn test_allow_listed_assets_are_embedded() {
        for (_, asset) in ALLOWED_DOWNLOADS {
            assert!(WebAssets::get(asset).is_some(), "missing asset {asset}");
        }
    }

    #[test]
    fn test_render_substitutes_host_port() {
        let index = WebAssets::get("index.html").unwrap();
        let text = std::str::from_utf8(&index.data).unwrap();
        assert!(text.contains(HOST_PORT_TOKEN));

        let response = render("index.html", "robot.local:8080").unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "text/html"
        );
    }

    #[test]
    fn test_render_unknown_asset_is_none() {
        assert!(render("nope.html", "localhost").is_none());
    }
}
