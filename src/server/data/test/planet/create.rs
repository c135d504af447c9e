use super::*;

/// Tests creating a planet with only a name.
///
/// Verifies that optional fields are stored as null.
///
/// Expected: Ok with weather and population None
#[tokio::test]
async fn creates_planet_with_null_optional_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Planet)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PlanetRepository::new(db);
    let planet = repo
        .create(CreatePlanetParam {
            name: "Dagobah".to_string(),
            weather: None,
            population: None,
        })
        .await?;

    assert_eq!(planet.name, "Dagobah");
    assert!(planet.weather.is_none());
    assert!(planet.population.is_none());

    let stored = repo.find_by_id(planet.id).await?;
    assert_eq!(stored, Some(planet));

    Ok(())
}
