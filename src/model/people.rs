use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::api::{optional_text, MessageDto};

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct PeopleDto {
    pub id: i32,
    pub name: String,
    pub gender: Option<String>,
    pub birth: Option<String>,
}

/// Request body for `POST /people`. Only `name` is required; the other fields
/// also accept numbers and booleans, stored as text.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Default)]
pub struct CreatePeopleDto {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub gender: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub birth: Option<String>,
}

/// Serialized as a two element JSON array: `[{"message": ...}, <people>]`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PeopleCreatedDto(pub MessageDto, pub PeopleDto);
