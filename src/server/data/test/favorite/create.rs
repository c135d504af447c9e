use super::*;

/// Tests creating a planet favorite.
///
/// Verifies the people foreign key is left null.
///
/// Expected: Ok with planet_id set and people_id None
#[tokio::test]
async fn creates_planet_favorite() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let planet = factory::create_planet(db).await?;

    let repo = FavoriteRepository::new(db);
    let favorite = repo
        .create(FavoriteParam {
            user_id: user.id,
            target: FavoriteTarget::Planet(planet.id),
        })
        .await?;

    assert_eq!(favorite.user_id, user.id);
    assert_eq!(favorite.planet_id, Some(planet.id));
    assert_eq!(favorite.people_id, None);

    Ok(())
}

/// Tests creating a people favorite.
///
/// Expected: Ok with people_id set and planet_id None
#[tokio::test]
async fn creates_people_favorite() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let people = factory::create_people(db).await?;

    let repo = FavoriteRepository::new(db);
    let favorite = repo
        .create(FavoriteParam {
            user_id: user.id,
            target: FavoriteTarget::People(people.id),
        })
        .await?;

    assert_eq!(favorite.planet_id, None);
    assert_eq!(favorite.people_id, Some(people.id));

    Ok(())
}
