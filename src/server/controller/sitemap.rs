//! Landing page listing every documented endpoint.
//!
//! The page is rendered once at router construction from the OpenAPI description, so it
//! lists exactly the routes that were mounted.

use axum::response::Html;
use utoipa::openapi::{path::PathItem, OpenApi};

/// Renders the sitemap HTML for the given OpenAPI document.
///
/// Paths without parameters are rendered as links; parameterized paths are listed as
/// plain text.
pub fn render(api: &OpenApi) -> Html<String> {
    let mut items = String::new();

    for (path, item) in api.paths.paths.iter() {
        let methods = methods(item).join(", ");
        let entry = if path.contains('{') {
            path.clone()
        } else {
            format!("<a href=\"{path}\">{path}</a>")
        };

        items.push_str(&format!("<li><code>{methods}</code> {entry}</li>"));
    }

    Html(format!(
        "<!DOCTYPE html><html><head><title>{title}</title></head>\
         <body><h1>{title}</h1><p>Available endpoints:</p><ul>{items}</ul>\
         <p>Interactive documentation: <a href=\"/swagger-ui\">/swagger-ui</a></p></body></html>",
        title = api.info.title,
    ))
}

fn methods(item: &PathItem) -> Vec<&'static str> {
    [
        ("GET", item.get.is_some()),
        ("POST", item.post.is_some()),
        ("PUT", item.put.is_some()),
        ("PATCH", item.patch.is_some()),
        ("DELETE", item.delete.is_some()),
    ]
    .into_iter()
    .filter_map(|(method, present)| present.then_some(method))
    .collect()
}
