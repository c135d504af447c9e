//! Favorite domain models and parameters.
//!
//! A favorite links a user to exactly one planet or one person. `FavoriteTarget` carries
//! which of the two a request refers to so that planet and people favorites share one
//! code path.

use crate::{
    model::favorite::{FavoriteDto, FavoriteTargetDto, UserFavoriteDto},
    server::model::{people::People, planet::Planet},
};

/// Favorite row as stored.
#[derive(Debug, Clone, PartialEq)]
pub struct Favorite {
    pub id: i32,
    pub user_id: i32,
    pub planet_id: Option<i32>,
    pub people_id: Option<i32>,
}

impl Favorite {
    pub fn into_dto(self) -> FavoriteDto {
        FavoriteDto {
            id: self.id,
            user_id: self.user_id,
            planet_id: self.planet_id,
            people_id: self.people_id,
        }
    }

    pub fn from_entity(entity: entity::favorite::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            planet_id: entity.planet_id,
            people_id: entity.people_id,
        }
    }
}

/// The entity a favorite points at, identified by ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteTarget {
    Planet(i32),
    People(i32),
}

impl FavoriteTarget {
    /// Capitalized entity name used in response messages.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Planet(_) => "Planet",
            Self::People(_) => "People",
        }
    }
}

/// Parameters for adding or removing a favorite.
#[derive(Debug, Clone, Copy)]
pub struct FavoriteParam {
    pub user_id: i32,
    pub target: FavoriteTarget,
}

/// Favorite with its target entity loaded, as listed for a user.
#[derive(Debug, Clone, PartialEq)]
pub struct UserFavorite {
    pub id: i32,
    pub target: UserFavoriteTarget,
}

#[derive(Debug, Clone, PartialEq)]
pub enum UserFavoriteTarget {
    Planet(Planet),
    People(People),
}

impl UserFavorite {
    pub fn into_dto(self) -> UserFavoriteDto {
        let target = match self.target {
            UserFavoriteTarget::Planet(planet) => FavoriteTargetDto::Planet {
                planet: planet.into_dto(),
            },
            UserFavoriteTarget::People(people) => FavoriteTargetDto::People {
                people: people.into_dto(),
            },
        };

        UserFavoriteDto {
            id: self.id,
            target,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn planet_favorite_serializes_with_type_tag() {
        let favorite = UserFavorite {
            id: 7,
            target: UserFavoriteTarget::Planet(Planet {
                id: 3,
                name: "Hoth".to_string(),
                weather: Some("frozen".to_string()),
                population: None,
            }),
        };

        let value = serde_json::to_value(favorite.into_dto()).unwrap();

        assert_eq!(
            value,
            json!({
                "id": 7,
                "type": "planet",
                "planet": {"id": 3, "name": "Hoth", "weather": "frozen", "population": null}
            })
        );
    }

    #[test]
    fn people_favorite_serializes_with_type_tag() {
        let favorite = UserFavorite {
            id: 8,
            target: UserFavoriteTarget::People(People {
                id: 4,
                name: "Yoda".to_string(),
                gender: Some("male".to_string()),
                birth: Some("896BBY".to_string()),
            }),
        };

        let value = serde_json::to_value(favorite.into_dto()).unwrap();

        assert_eq!(value["type"], "people");
        assert_eq!(value["people"]["name"], "Yoda");
    }
}
