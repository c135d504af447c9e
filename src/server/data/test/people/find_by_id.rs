use super::*;

/// Tests finding an existing person and a missing one.
///
/// Expected: Ok(Some) for the created person, Ok(None) otherwise
#[tokio::test]
async fn finds_existing_people_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::People)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::people::PeopleFactory::new(db)
        .name("Chewbacca")
        .gender(Some("male".to_string()))
        .build()
        .await?;

    let repo = PeopleRepository::new(db);

    let found = repo.find_by_id(created.id).await?;
    assert_eq!(found.map(|p| p.name), Some("Chewbacca".to_string()));

    let missing = repo.find_by_id(created.id + 100).await?;
    assert!(missing.is_none());

    Ok(())
}
