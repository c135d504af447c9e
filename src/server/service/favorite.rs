//! Favorite service for business logic.
//!
//! Adding a favorite checks that the user and the target exist and that the pair is not
//! already present; removing one checks the user and the pair. Planet and people favorites
//! go through the same methods, distinguished by `FavoriteTarget`.

use std::collections::HashMap;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        favorite::FavoriteRepository, people::PeopleRepository, planet::PlanetRepository,
        user::UserRepository,
    },
    error::AppError,
    model::favorite::{Favorite, FavoriteParam, FavoriteTarget, UserFavorite, UserFavoriteTarget},
};

/// Service providing business logic for favorites.
pub struct FavoriteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteService<'a> {
    /// Creates a new FavoriteService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `FavoriteService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists a user's favorites with their planet or person embedded.
    ///
    /// Favorites whose target row no longer exists are skipped.
    ///
    /// # Arguments
    /// - `user_id` - ID of the user whose favorites to list
    ///
    /// # Returns
    /// - `Ok(Vec<UserFavorite>)` - The user's favorites ordered by ID
    /// - `Err(AppError::NotFound)` - User does not exist or has no favorites
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_for_user(&self, user_id: i32) -> Result<Vec<UserFavorite>, AppError> {
        self.require_user(user_id).await?;

        let favorites = FavoriteRepository::new(self.db).get_by_user(user_id).await?;
        if favorites.is_empty() {
            return Err(AppError::NotFound("No favorites yet".to_string()));
        }

        let planet_ids: Vec<i32> = favorites.iter().filter_map(|f| f.planet_id).collect();
        let people_ids: Vec<i32> = favorites.iter().filter_map(|f| f.people_id).collect();

        let planets: HashMap<i32, _> = PlanetRepository::new(self.db)
            .find_by_ids(&planet_ids)
            .await?
            .into_iter()
            .map(|p| (p.id, p))
            .collect();
        let people: HashMap<i32, _> = PeopleRepository::new(self.db)
            .find_by_ids(&people_ids)
            .await?
            .into_iter()
            .map(|p| (p.id, p))
            .collect();

        // Planet wins if a row has both keys set.
        let result = favorites
            .into_iter()
            .filter_map(|favorite| {
                let target = if let Some(planet) =
                    favorite.planet_id.and_then(|id| planets.get(&id).cloned())
                {
                    UserFavoriteTarget::Planet(planet)
                } else if let Some(person) =
                    favorite.people_id.and_then(|id| people.get(&id).cloned())
                {
                    UserFavoriteTarget::People(person)
                } else {
                    return None;
                };

                Some(UserFavorite {
                    id: favorite.id,
                    target,
                })
            })
            .collect();

        Ok(result)
    }

    /// Adds a planet or person to a user's favorites.
    ///
    /// # Arguments
    /// - `param` - User ID and the target to favorite
    ///
    /// # Returns
    /// - `Ok(Favorite)` - The created favorite
    /// - `Err(AppError::NotFound)` - User or target does not exist
    /// - `Err(AppError::Conflict)` - The user already favorited this target
    /// - `Err(AppError::DbErr)` - Database error during query or insert
    pub async fn add(&self, param: FavoriteParam) -> Result<Favorite, AppError> {
        self.require_user(param.user_id).await?;
        self.require_target(param.target).await?;

        let favorite_repo = FavoriteRepository::new(self.db);

        if favorite_repo
            .find_by_user_and_target(param)
            .await?
            .is_some()
        {
            return Err(AppError::Conflict(format!(
                "{} already added to favorites",
                param.target.label()
            )));
        }

        let favorite = favorite_repo.create(param).await?;

        tracing::info!(
            "User {} added {:?} to favorites",
            param.user_id,
            param.target
        );

        Ok(favorite)
    }

    /// Removes a planet or person from a user's favorites.
    ///
    /// The target itself is not required to exist; only the favorite row is.
    ///
    /// # Arguments
    /// - `param` - User ID and the target to remove
    ///
    /// # Returns
    /// - `Ok(())` - Favorite deleted
    /// - `Err(AppError::NotFound)` - User does not exist or has no such favorite
    /// - `Err(AppError::DbErr)` - Database error during query or delete
    pub async fn remove(&self, param: FavoriteParam) -> Result<(), AppError> {
        self.require_user(param.user_id).await?;

        let favorite_repo = FavoriteRepository::new(self.db);

        let Some(favorite) = favorite_repo.find_by_user_and_target(param).await? else {
            return Err(AppError::NotFound(format!(
                "Favorite {} not found for this user",
                param.target.label().to_lowercase()
            )));
        };

        favorite_repo.delete(favorite.id).await?;

        tracing::info!(
            "User {} removed {:?} from favorites",
            param.user_id,
            param.target
        );

        Ok(())
    }

    async fn require_user(&self, user_id: i32) -> Result<(), AppError> {
        match UserRepository::new(self.db).find_by_id(user_id).await? {
            Some(_) => Ok(()),
            None => Err(AppError::NotFound("User not found".to_string())),
        }
    }

    async fn require_target(&self, target: FavoriteTarget) -> Result<(), AppError> {
        let exists = match target {
            FavoriteTarget::Planet(id) => PlanetRepository::new(self.db)
                .find_by_id(id)
                .await?
                .is_some(),
            FavoriteTarget::People(id) => PeopleRepository::new(self.db)
                .find_by_id(id)
                .await?
                .is_some(),
        };

        if !exists {
            return Err(AppError::NotFound(format!("{} not found", target.label())));
        }

        Ok(())
    }
}
