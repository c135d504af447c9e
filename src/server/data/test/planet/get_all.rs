use super::*;

/// Tests retrieving all planets.
///
/// Expected: Ok with every planet in ID order
#[tokio::test]
async fn returns_all_planets() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Planet)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_planet(db).await?;
    let second = factory::create_planet(db).await?;

    let repo = PlanetRepository::new(db);
    let planets = repo.get_all().await?;

    assert_eq!(
        planets.iter().map(|p| p.id).collect::<Vec<_>>(),
        vec![first.id, second.id]
    );

    Ok(())
}
