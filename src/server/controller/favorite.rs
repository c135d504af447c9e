use axum::{extract::State, http::StatusCode, response::IntoResponse};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        favorite::{FavoriteCreatedDto, UserFavoriteDto},
    },
    server::{
        error::AppError,
        model::favorite::{FavoriteParam, FavoriteTarget},
        service::favorite::FavoriteService,
        state::AppState,
        util::{
            extract::{Json, Path, Query},
            parse::parse_user_id,
        },
    },
};

/// Tag for grouping favorite endpoints in OpenAPI documentation
pub static FAVORITE_TAG: &str = "favorite";

/// Query parameters shared by every favorite endpoint.
///
/// `user_id` is kept as a string so that a missing or non-numeric value produces a JSON
/// 400 response instead of an extractor rejection.
#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct UserIdQuery {
    /// ID of the user owning the favorites.
    pub user_id: Option<String>,
}

/// List a user's favorites.
///
/// Each entry is tagged with `type` ("planet" or "people") and embeds the favorited entity.
///
/// # Returns
/// - `200 OK` - The user's favorites
/// - `400 Bad Request` - user_id missing or not a number
/// - `404 Not Found` - User not found or has no favorites
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/users/favorites",
    tag = FAVORITE_TAG,
    params(UserIdQuery),
    responses(
        (status = 200, description = "Successfully retrieved favorites", body = Vec<UserFavoriteDto>),
        (status = 400, description = "Invalid user_id", body = ErrorDto),
        (status = 404, description = "User not found or no favorites", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_favorites(
    State(state): State<AppState>,
    Query(query): Query<UserIdQuery>,
) -> Result<impl IntoResponse, AppError> {
    let user_id = parse_user_id(query.user_id.as_deref())?;

    let favorites = FavoriteService::new(&state.db)
        .get_for_user(user_id)
        .await?;

    let favorites_dto: Vec<UserFavoriteDto> =
        favorites.into_iter().map(|f| f.into_dto()).collect();

    Ok((StatusCode::OK, Json(favorites_dto)))
}

/// Add a planet to a user's favorites.
///
/// # Returns
/// - `201 Created` - Favorite created
/// - `400 Bad Request` - user_id missing or not a number
/// - `404 Not Found` - User or planet not found
/// - `409 Conflict` - Planet already in the user's favorites
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/favorite/planet/{planet_id}",
    tag = FAVORITE_TAG,
    params(
        ("planet_id" = i32, Path, description = "Planet ID"),
        UserIdQuery
    ),
    responses(
        (status = 201, description = "Successfully added favorite", body = FavoriteCreatedDto),
        (status = 400, description = "Invalid user_id", body = ErrorDto),
        (status = 404, description = "User or planet not found", body = ErrorDto),
        (status = 409, description = "Planet already in favorites", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_favorite_planet(
    State(state): State<AppState>,
    Path(planet_id): Path<i32>,
    Query(query): Query<UserIdQuery>,
) -> Result<impl IntoResponse, AppError> {
    add_favorite(&state, query, FavoriteTarget::Planet(planet_id)).await
}

/// Add a person to a user's favorites.
///
/// # Returns
/// - `201 Created` - Favorite created
/// - `400 Bad Request` - user_id missing or not a number
/// - `404 Not Found` - User or person not found
/// - `409 Conflict` - Person already in the user's favorites
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/favorite/people/{people_id}",
    tag = FAVORITE_TAG,
    params(
        ("people_id" = i32, Path, description = "People ID"),
        UserIdQuery
    ),
    responses(
        (status = 201, description = "Successfully added favorite", body = FavoriteCreatedDto),
        (status = 400, description = "Invalid user_id", body = ErrorDto),
        (status = 404, description = "User or people not found", body = ErrorDto),
        (status = 409, description = "People already in favorites", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_favorite_people(
    State(state): State<AppState>,
    Path(people_id): Path<i32>,
    Query(query): Query<UserIdQuery>,
) -> Result<impl IntoResponse, AppError> {
    add_favorite(&state, query, FavoriteTarget::People(people_id)).await
}

/// Remove a planet from a user's favorites.
///
/// # Returns
/// - `200 OK` - Favorite deleted
/// - `400 Bad Request` - user_id missing or not a number
/// - `404 Not Found` - User not found or planet not in the user's favorites
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/favorite/planet/{planet_id}",
    tag = FAVORITE_TAG,
    params(
        ("planet_id" = i32, Path, description = "Planet ID"),
        UserIdQuery
    ),
    responses(
        (status = 200, description = "Successfully removed favorite", body = MessageDto),
        (status = 400, description = "Invalid user_id", body = ErrorDto),
        (status = 404, description = "User or favorite not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_favorite_planet(
    State(state): State<AppState>,
    Path(planet_id): Path<i32>,
    Query(query): Query<UserIdQuery>,
) -> Result<impl IntoResponse, AppError> {
    remove_favorite(&state, query, FavoriteTarget::Planet(planet_id)).await
}

/// Remove a person from a user's favorites.
///
/// # Returns
/// - `200 OK` - Favorite deleted
/// - `400 Bad Request` - user_id missing or not a number
/// - `404 Not Found` - User not found or person not in the user's favorites
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/favorite/people/{people_id}",
    tag = FAVORITE_TAG,
    params(
        ("people_id" = i32, Path, description = "People ID"),
        UserIdQuery
    ),
    responses(
        (status = 200, description = "Successfully removed favorite", body = MessageDto),
        (status = 400, description = "Invalid user_id", body = ErrorDto),
        (status = 404, description = "User or favorite not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_favorite_people(
    State(state): State<AppState>,
    Path(people_id): Path<i32>,
    Query(query): Query<UserIdQuery>,
) -> Result<impl IntoResponse, AppError> {
    remove_favorite(&state, query, FavoriteTarget::People(people_id)).await
}

async fn add_favorite(
    state: &AppState,
    query: UserIdQuery,
    target: FavoriteTarget,
) -> Result<(StatusCode, Json<FavoriteCreatedDto>), AppError> {
    // Validated before touching the database.
    let user_id = parse_user_id(query.user_id.as_deref())?;

    let favorite = FavoriteService::new(&state.db)
        .add(FavoriteParam { user_id, target })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(FavoriteCreatedDto {
            message: format!("{} added to favorites", target.label()),
            favorite: favorite.into_dto(),
        }),
    ))
}

async fn remove_favorite(
    state: &AppState,
    query: UserIdQuery,
    target: FavoriteTarget,
) -> Result<(StatusCode, Json<MessageDto>), AppError> {
    let user_id = parse_user_id(query.user_id.as_deref())?;

    FavoriteService::new(&state.db)
        .remove(FavoriteParam { user_id, target })
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new(format!(
            "{} deleted from favorites",
            target.label()
        ))),
    ))
}
