use super::*;

/// Tests loading several planets at once.
///
/// Verifies that only requested IDs are returned and unknown IDs are skipped.
///
/// Expected: Ok with the two requested planets
#[tokio::test]
async fn returns_only_requested_existing_planets() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Planet)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let hoth = factory::create_planet(db).await?;
    let endor = factory::create_planet(db).await?;
    factory::create_planet(db).await?;

    let repo = PlanetRepository::new(db);
    let mut planets = repo.find_by_ids(&[hoth.id, endor.id, 999]).await?;
    planets.sort_by_key(|p| p.id);

    assert_eq!(planets.len(), 2);
    assert_eq!(planets[0].id, hoth.id);
    assert_eq!(planets[1].id, endor.id);

    Ok(())
}

/// Tests that an empty ID slice short-circuits.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_for_no_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Planet)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_planet(db).await?;

    let repo = PlanetRepository::new(db);
    let planets = repo.find_by_ids(&[]).await?;

    assert!(planets.is_empty());

    Ok(())
}
