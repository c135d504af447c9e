use axum::{extract::State, http::StatusCode, response::IntoResponse};

use crate::{
    model::{
        api::ErrorDto,
        user::{CreateUserDto, UserCreatedDto, UserDto},
    },
    server::{
        error::AppError,
        model::user::CreateUserParam,
        service::user::UserService,
        state::AppState,
        util::extract::Json,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// Register a new user.
///
/// Requires name, last_name, email and password. Missing fields are reported one at a time
/// in that order. The email must not already be registered.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - User registration data
///
/// # Returns
/// - `201 Created` - User created, returned without password
/// - `400 Bad Request` - Missing field or email already registered
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/users",
    tag = USER_TAG,
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "Successfully created user", body = UserCreatedDto),
        (status = 400, description = "Missing field or duplicate email", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreateUserParam::from_dto(payload)?;

    let user = UserService::new(&state.db).create(params).await?;

    Ok((
        StatusCode::CREATED,
        Json(UserCreatedDto {
            message: "User created successfully".to_string(),
            user: user.into_dto(),
        }),
    ))
}

/// List all users.
///
/// # Returns
/// - `200 OK` - Every registered user
/// - `404 Not Found` - No users exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/users",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Successfully retrieved users", body = Vec<UserDto>),
        (status = 404, description = "No users exist", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_users(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let users = UserService::new(&state.db).get_all().await?;

    let users_dto: Vec<UserDto> = users.into_iter().map(|u| u.into_dto()).collect();

    Ok((StatusCode::OK, Json(users_dto)))
}
