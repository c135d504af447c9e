use super::*;

/// Tests finding a user by exact email.
///
/// Expected: Ok(Some) for the registered email, Ok(None) for another one
#[tokio::test]
async fn finds_user_by_exact_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::user::UserFactory::new(db)
        .email("leia@alderaan.org")
        .build()
        .await?;

    let repo = UserRepository::new(db);

    let found = repo.find_by_email("leia@alderaan.org").await?;
    assert_eq!(found.map(|u| u.id), Some(created.id));

    let missing = repo.find_by_email("vader@empire.gov").await?;
    assert!(missing.is_none());

    Ok(())
}
