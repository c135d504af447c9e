use super::*;

/// Tests creating a person with every field.
///
/// Expected: Ok with all fields stored
#[tokio::test]
async fn creates_people_with_all_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::People)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PeopleRepository::new(db);
    let people = repo
        .create(CreatePeopleParam {
            name: "Obi-Wan Kenobi".to_string(),
            gender: Some("male".to_string()),
            birth: Some("57BBY".to_string()),
        })
        .await?;

    assert_eq!(people.name, "Obi-Wan Kenobi");
    assert_eq!(people.gender.as_deref(), Some("male"));
    assert_eq!(people.birth.as_deref(), Some("57BBY"));

    Ok(())
}
