use crate::server::{controller::sitemap::render, router::api_router};

/// Tests that the sitemap lists every mounted API route with its methods.
///
/// Expected: plain paths rendered as links, parameterized paths as text
#[test]
fn lists_mounted_routes() {
    let (_, api) = api_router().split_for_parts();

    let html = render(&api).0;

    assert!(html.contains("<a href=\"/users\">/users</a>"));
    assert!(html.contains("<a href=\"/users/favorites\">/users/favorites</a>"));
    assert!(html.contains("<code>POST, DELETE</code> /favorite/planet/{planet_id}"));
    assert!(html.contains("<code>GET</code> /people/{people_id}"));
    assert!(!html.contains("href=\"/planets/{planet_id}\""));
}
