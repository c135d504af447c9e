//! Favorite factory functions.
//!
//! Favorites have no defaults worth customizing, so only shorthand functions are provided.
//! The referenced user and target rows must already exist.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a favorite linking a user to a planet.
///
/// # Arguments
/// - `db` - Database connection
/// - `user_id` - ID of an existing user
/// - `planet_id` - ID of an existing planet
///
/// # Returns
/// - `Ok(entity::favorite::Model)` - Created favorite with `people_id` left null
/// - `Err(DbErr)` - Database error during insert
pub async fn create_planet_favorite(
    db: &DatabaseConnection,
    user_id: i32,
    planet_id: i32,
) -> Result<entity::favorite::Model, DbErr> {
    entity::favorite::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        planet_id: ActiveValue::Set(Some(planet_id)),
        people_id: ActiveValue::Set(None),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Creates a favorite linking a user to a person.
///
/// # Returns
/// - `Ok(entity::favorite::Model)` - Created favorite with `planet_id` left null
/// - `Err(DbErr)` - Database error during insert
pub async fn create_people_favorite(
    db: &DatabaseConnection,
    user_id: i32,
    people_id: i32,
) -> Result<entity::favorite::Model, DbErr> {
    entity::favorite::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        planet_id: ActiveValue::Set(None),
        people_id: ActiveValue::Set(Some(people_id)),
        ..Default::default()
    }
    .insert(db)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{builder::TestBuilder, factory};

    #[tokio::test]
    async fn creates_planet_favorite_with_null_people() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_all_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let user = factory::create_user(db).await?;
        let planet = factory::create_planet(db).await?;

        let favorite = create_planet_favorite(db, user.id, planet.id).await?;

        assert_eq!(favorite.user_id, user.id);
        assert_eq!(favorite.planet_id, Some(planet.id));
        assert_eq!(favorite.people_id, None);

        Ok(())
    }

    #[tokio::test]
    async fn creates_user_with_both_favorite_kinds() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_all_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let (user, planet, people) = factory::helpers::create_user_with_favorites(db).await?;

        assert!(user.id > 0);
        assert!(planet.id > 0);
        assert!(people.id > 0);

        Ok(())
    }
}
