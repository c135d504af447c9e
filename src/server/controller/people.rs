use axum::{extract::State, http::StatusCode, response::IntoResponse};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        people::{CreatePeopleDto, PeopleCreatedDto, PeopleDto},
    },
    server::{
        error::AppError,
        model::people::CreatePeopleParam,
        service::people::PeopleService,
        state::AppState,
        util::extract::{Json, Path},
    },
};

/// Tag for grouping people endpoints in OpenAPI documentation
pub static PEOPLE_TAG: &str = "people";

/// Create a person.
///
/// Only `name` is required; gender and birth are stored as given. The response body is a
/// two element array of a message object and the created person.
///
/// # Returns
/// - `201 Created` - `[{"message": "People created"}, <people>]`
/// - `400 Bad Request` - Name missing
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/people",
    tag = PEOPLE_TAG,
    request_body = CreatePeopleDto,
    responses(
        (status = 201, description = "People created, returned as [message, people]"),
        (status = 400, description = "Name missing", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_people(
    State(state): State<AppState>,
    Json(payload): Json<CreatePeopleDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreatePeopleParam::from_dto(payload)?;

    let people = PeopleService::new(&state.db).create(params).await?;

    Ok((
        StatusCode::CREATED,
        Json(PeopleCreatedDto(
            MessageDto::new("People created"),
            people.into_dto(),
        )),
    ))
}

/// List all people.
#[utoipa::path(
    get,
    path = "/people",
    tag = PEOPLE_TAG,
    responses(
        (status = 200, description = "Successfully retrieved people", body = Vec<PeopleDto>),
        (status = 404, description = "No people exist", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_people(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let people = PeopleService::new(&state.db).get_all().await?;

    let people_dto: Vec<PeopleDto> = people.into_iter().map(|p| p.into_dto()).collect();

    Ok((StatusCode::OK, Json(people_dto)))
}

/// Get a person by ID.
#[utoipa::path(
    get,
    path = "/people/{people_id}",
    tag = PEOPLE_TAG,
    params(
        ("people_id" = i32, Path, description = "People ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved people", body = PeopleDto),
        (status = 404, description = "People not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_people_by_id(
    State(state): State<AppState>,
    Path(people_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let people = PeopleService::new(&state.db).get_by_id(people_id).await?;

    Ok((StatusCode::OK, Json(people.into_dto())))
}
