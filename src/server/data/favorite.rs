//! Favorite data repository for database operations.
//!
//! Favorites are looked up by `(user_id, planet_id)` or `(user_id, people_id)` depending on
//! the `FavoriteTarget`. Uniqueness of those pairs is not enforced here; the favorite service
//! checks for an existing row before inserting.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::favorite::{Favorite, FavoriteParam, FavoriteTarget};

/// Repository providing database operations for favorites.
pub struct FavoriteRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteRepository<'a> {
    /// Creates a new FavoriteRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `FavoriteRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a favorite for the target, leaving the other foreign key null.
    ///
    /// # Arguments
    /// - `param` - User ID and the planet or person being favorited
    ///
    /// # Returns
    /// - `Ok(Favorite)` - The created favorite
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, param: FavoriteParam) -> Result<Favorite, DbErr> {
        let (planet_id, people_id) = match param.target {
            FavoriteTarget::Planet(id) => (Some(id), None),
            FavoriteTarget::People(id) => (None, Some(id)),
        };

        let entity = entity::favorite::ActiveModel {
            user_id: ActiveValue::Set(param.user_id),
            planet_id: ActiveValue::Set(planet_id),
            people_id: ActiveValue::Set(people_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Favorite::from_entity(entity))
    }

    /// Finds the user's favorite for the given target.
    ///
    /// # Arguments
    /// - `param` - User ID and the planet or person to look for
    ///
    /// # Returns
    /// - `Ok(Some(Favorite))` - The first matching favorite
    /// - `Ok(None)` - The user has not favorited this target
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_user_and_target(
        &self,
        param: FavoriteParam,
    ) -> Result<Option<Favorite>, DbErr> {
        let target_filter = match param.target {
            FavoriteTarget::Planet(id) => entity::favorite::Column::PlanetId.eq(id),
            FavoriteTarget::People(id) => entity::favorite::Column::PeopleId.eq(id),
        };

        let entity = entity::prelude::Favorite::find()
            .filter(entity::favorite::Column::UserId.eq(param.user_id))
            .filter(target_filter)
            .order_by_asc(entity::favorite::Column::Id)
            .one(self.db)
            .await?;

        Ok(entity.map(Favorite::from_entity))
    }

    /// Gets all favorites of a user ordered by ID.
    ///
    /// # Returns
    /// - `Ok(Vec<Favorite>)` - The user's favorites (empty if none)
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_user(&self, user_id: i32) -> Result<Vec<Favorite>, DbErr> {
        let entities = entity::prelude::Favorite::find()
            .filter(entity::favorite::Column::UserId.eq(user_id))
            .order_by_asc(entity::favorite::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Favorite::from_entity).collect())
    }

    /// Deletes a favorite by ID.
    ///
    /// # Returns
    /// - `Ok(())` - Favorite deleted (or no row with that ID existed)
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, favorite_id: i32) -> Result<(), DbErr> {
        entity::prelude::Favorite::delete_by_id(favorite_id)
            .exec(self.db)
            .await?;

        Ok(())
    }
}
