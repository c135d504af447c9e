use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::api::{optional_text, MessageDto};

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct PlanetDto {
    pub id: i32,
    pub name: String,
    pub weather: Option<String>,
    pub population: Option<String>,
}

/// Request body for `POST /planets`. Only `name` is required; the other fields
/// also accept numbers and booleans, stored as text.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Default)]
pub struct CreatePlanetDto {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub weather: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub population: Option<String>,
}

/// Serialized as a two element JSON array: `[{"message": ...}, <planet>]`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PlanetCreatedDto(pub MessageDto, pub PlanetDto);
