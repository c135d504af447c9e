use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{people::PeopleDto, planet::PlanetDto};

/// Raw favorite row. Exactly one of `planet_id` / `people_id` is set.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct FavoriteDto {
    pub id: i32,
    pub user_id: i32,
    pub planet_id: Option<i32>,
    pub people_id: Option<i32>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct FavoriteCreatedDto {
    pub message: String,
    pub favorite: FavoriteDto,
}

/// Favorited entity embedded in a user's favorites listing.
///
/// Serializes as `{"type": "planet", "planet": {...}}` or `{"type": "people", "people": {...}}`.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FavoriteTargetDto {
    Planet { planet: PlanetDto },
    People { people: PeopleDto },
}

/// Entry of `GET /users/favorites`.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct UserFavoriteDto {
    pub id: i32,
    #[serde(flatten)]
    pub target: FavoriteTargetDto,
}
