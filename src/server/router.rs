use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{favorite, people, planet, sitemap, user},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "holonet",
        description = "Users, planets, people and favorites REST API"
    ),
    tags(
        (name = "user", description = "User registration and listing"),
        (name = "favorite", description = "Per-user planet and people favorites"),
        (name = "planet", description = "Planets"),
        (name = "people", description = "People (characters)")
    )
)]
pub struct ApiDoc;

/// Builds the documented API routes.
///
/// Routes sharing a path are registered together so that utoipa-axum merges their methods.
pub fn api_router() -> OpenApiRouter<AppState> {
    OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(user::create_user, user::get_all_users))
        .routes(routes!(favorite::get_user_favorites))
        .routes(routes!(
            favorite::add_favorite_planet,
            favorite::delete_favorite_planet
        ))
        .routes(routes!(
            favorite::add_favorite_people,
            favorite::delete_favorite_people
        ))
        .routes(routes!(planet::create_planet, planet::get_all_planets))
        .routes(routes!(planet::get_planet_by_id))
        .routes(routes!(people::create_people, people::get_all_people))
        .routes(routes!(people::get_people_by_id))
}

/// Builds the complete application router: API routes, sitemap at `/`, OpenAPI document and
/// Swagger UI, with permissive CORS and request tracing.
pub fn router(state: AppState) -> Router {
    let (api_routes, api) = api_router().split_for_parts();

    let sitemap_page = sitemap::render(&api);

    api_routes
        .route(
            "/",
            get(move || std::future::ready(sitemap_page.clone())),
        )
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
