use super::*;

/// Tests listing a user's favorites of both kinds.
///
/// Expected: Ok with both favorites in creation order, none from other users
#[tokio::test]
async fn returns_only_the_users_favorites() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, planet, people) = factory::helpers::create_user_with_favorites(db).await?;
    let other = factory::create_user(db).await?;
    factory::create_planet_favorite(db, other.id, planet.id).await?;

    let repo = FavoriteRepository::new(db);
    let favorites = repo.get_by_user(user.id).await?;

    assert_eq!(favorites.len(), 2);
    assert_eq!(favorites[0].planet_id, Some(planet.id));
    assert_eq!(favorites[1].people_id, Some(people.id));
    assert!(favorites.iter().all(|f| f.user_id == user.id));

    Ok(())
}
