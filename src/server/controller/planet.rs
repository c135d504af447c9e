use axum::{extract::State, http::StatusCode, response::IntoResponse};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        planet::{CreatePlanetDto, PlanetCreatedDto, PlanetDto},
    },
    server::{
        error::AppError,
        model::planet::CreatePlanetParam,
        service::planet::PlanetService,
        state::AppState,
        util::extract::{Json, Path},
    },
};

/// Tag for grouping planet endpoints in OpenAPI documentation
pub static PLANET_TAG: &str = "planet";

/// Create a planet.
///
/// Only `name` is required; weather and population are stored as given. The response body
/// is a two element array of a message object and the created planet.
///
/// # Returns
/// - `201 Created` - `[{"message": "Planet created"}, <planet>]`
/// - `400 Bad Request` - Name missing
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/planets",
    tag = PLANET_TAG,
    request_body = CreatePlanetDto,
    responses(
        (status = 201, description = "Planet created, returned as [message, planet]"),
        (status = 400, description = "Name missing", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_planet(
    State(state): State<AppState>,
    Json(payload): Json<CreatePlanetDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreatePlanetParam::from_dto(payload)?;

    let planet = PlanetService::new(&state.db).create(params).await?;

    Ok((
        StatusCode::CREATED,
        Json(PlanetCreatedDto(
            MessageDto::new("Planet created"),
            planet.into_dto(),
        )),
    ))
}

/// List all planets.
///
/// # Returns
/// - `200 OK` - Every planet
/// - `404 Not Found` - No planets exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/planets",
    tag = PLANET_TAG,
    responses(
        (status = 200, description = "Successfully retrieved planets", body = Vec<PlanetDto>),
        (status = 404, description = "No planets exist", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_planets(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let planets = PlanetService::new(&state.db).get_all().await?;

    let planets_dto: Vec<PlanetDto> = planets.into_iter().map(|p| p.into_dto()).collect();

    Ok((StatusCode::OK, Json(planets_dto)))
}

/// Get a planet by ID.
///
/// # Returns
/// - `200 OK` - The planet
/// - `404 Not Found` - No planet with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/planets/{planet_id}",
    tag = PLANET_TAG,
    params(
        ("planet_id" = i32, Path, description = "Planet ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved planet", body = PlanetDto),
        (status = 404, description = "Planet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_planet_by_id(
    State(state): State<AppState>,
    Path(planet_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let planet = PlanetService::new(&state.db).get_by_id(planet_id).await?;

    Ok((StatusCode::OK, Json(planet.into_dto())))
}
