//! Planet data repository for database operations.

use crate::server::model::planet::{CreatePlanetParam, Planet};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

/// Repository providing database operations for planets.
pub struct PlanetRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlanetRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new planet, storing optional fields as given.
    ///
    /// # Returns
    /// - `Ok(Planet)` - The created planet
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, param: CreatePlanetParam) -> Result<Planet, DbErr> {
        let entity = entity::planet::ActiveModel {
            name: ActiveValue::Set(param.name),
            weather: ActiveValue::Set(param.weather),
            population: ActiveValue::Set(param.population),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Planet::from_entity(entity))
    }

    /// Finds a planet by ID.
    ///
    /// # Returns
    /// - `Ok(Some(Planet))` - Planet found
    /// - `Ok(None)` - No planet with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, planet_id: i32) -> Result<Option<Planet>, DbErr> {
        let entity = entity::prelude::Planet::find_by_id(planet_id)
            .one(self.db)
            .await?;

        Ok(entity.map(Planet::from_entity))
    }

    /// Gets every planet whose ID is in `planet_ids`.
    ///
    /// Returns early with an empty vector when no IDs are given. IDs with no matching row
    /// are silently skipped.
    pub async fn find_by_ids(&self, planet_ids: &[i32]) -> Result<Vec<Planet>, DbErr> {
        if planet_ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::Planet::find()
            .filter(entity::planet::Column::Id.is_in(planet_ids.iter().copied()))
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Planet::from_entity).collect())
    }

    /// Gets all planets ordered by ID.
    pub async fn get_all(&self) -> Result<Vec<Planet>, DbErr> {
        let entities = entity::prelude::Planet::find()
            .order_by_asc(entity::planet::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Planet::from_entity).collect())
    }
}
