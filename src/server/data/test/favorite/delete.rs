use super::*;

/// Tests deleting a favorite by ID.
///
/// Verifies the favorite is gone and the user's other favorites remain.
///
/// Expected: Ok with one favorite left
#[tokio::test]
async fn deletes_only_the_given_favorite() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, planet, people) = factory::helpers::create_user_with_favorites(db).await?;

    let repo = FavoriteRepository::new(db);
    let favorite = repo
        .find_by_user_and_target(FavoriteParam {
            user_id: user.id,
            target: FavoriteTarget::Planet(planet.id),
        })
        .await?
        .unwrap();

    repo.delete(favorite.id).await?;

    let remaining = repo.get_by_user(user.id).await?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].people_id, Some(people.id));

    Ok(())
}
