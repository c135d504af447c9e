//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a user together with one planet favorite and one people favorite.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, planet, people))` - The created user and the two favorited targets
/// - `Err(DbErr)` - Database error during creation
pub async fn create_user_with_favorites(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::planet::Model,
        entity::people::Model,
    ),
    DbErr,
> {
    let user = crate::factory::user::create_user(db).await?;
    let planet = crate::factory::planet::create_planet(db).await?;
    let people = crate::factory::people::create_people(db).await?;

    crate::factory::favorite::create_planet_favorite(db, user.id, planet.id).await?;
    crate::factory::favorite::create_people_favorite(db, user.id, people.id).await?;

    Ok((user, planet, people))
}
