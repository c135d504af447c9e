use super::*;

/// Tests that lookups are scoped to the user.
///
/// Another user's favorite for the same planet must not match.
///
/// Expected: Ok(Some) for the owner, Ok(None) for the other user
#[tokio::test]
async fn matches_only_the_owning_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let planet = factory::create_planet(db).await?;
    let created = factory::create_planet_favorite(db, owner.id, planet.id).await?;

    let repo = FavoriteRepository::new(db);

    let found = repo
        .find_by_user_and_target(FavoriteParam {
            user_id: owner.id,
            target: FavoriteTarget::Planet(planet.id),
        })
        .await?;
    assert_eq!(found.map(|f| f.id), Some(created.id));

    let not_found = repo
        .find_by_user_and_target(FavoriteParam {
            user_id: other.id,
            target: FavoriteTarget::Planet(planet.id),
        })
        .await?;
    assert!(not_found.is_none());

    Ok(())
}

/// Tests that planet and people IDs are not confused.
///
/// A planet favorite with ID N must not be found when searching for people N.
///
/// Expected: Ok(None)
#[tokio::test]
async fn does_not_match_other_target_kind_with_same_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let planet = factory::create_planet(db).await?;
    factory::create_planet_favorite(db, user.id, planet.id).await?;

    let repo = FavoriteRepository::new(db);
    let found = repo
        .find_by_user_and_target(FavoriteParam {
            user_id: user.id,
            target: FavoriteTarget::People(planet.id),
        })
        .await?;

    assert!(found.is_none());

    Ok(())
}
