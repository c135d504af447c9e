use super::*;
use crate::server::{model::planet::CreatePlanetParam, service::planet::PlanetService};

/// Tests that a planet reads back with the exact fields stored at creation.
///
/// Expected: Ok with identical planet
#[tokio::test]
async fn get_by_id_returns_stored_fields() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Planet)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = PlanetService::new(db);
    let created = service
        .create(CreatePlanetParam {
            name: "Tatooine".to_string(),
            weather: Some("arid".to_string()),
            population: Some("200000".to_string()),
        })
        .await?;

    let fetched = service.get_by_id(created.id).await?;

    assert_eq!(fetched, created);
    assert_eq!(fetched.name, "Tatooine");
    assert_eq!(fetched.weather.as_deref(), Some("arid"));
    assert_eq!(fetched.population.as_deref(), Some("200000"));

    Ok(())
}

/// Tests fetching a planet that does not exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn get_by_id_fails_for_missing_planet() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Planet)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = PlanetService::new(db).get_by_id(42).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests listing planets on an empty and a populated table.
///
/// Expected: Err(NotFound) first, then Ok with one planet
#[tokio::test]
async fn get_all_requires_at_least_one_planet() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Planet)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = PlanetService::new(db);
    assert!(matches!(service.get_all().await, Err(AppError::NotFound(_))));

    factory::create_planet(db).await?;

    assert_eq!(service.get_all().await?.len(), 1);

    Ok(())
}
