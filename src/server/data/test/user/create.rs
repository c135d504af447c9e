use super::*;

/// Tests creating a new user.
///
/// Verifies that the repository stores every field and assigns an ID.
///
/// Expected: Ok with user created
#[tokio::test]
async fn creates_new_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(CreateUserParam {
            name: "Luke".to_string(),
            last_name: "Skywalker".to_string(),
            email: "luke@tatooine.net".to_string(),
            password: "force".to_string(),
        })
        .await?;

    assert!(user.id > 0);
    assert_eq!(user.name, "Luke");
    assert_eq!(user.last_name, "Skywalker");
    assert_eq!(user.email, "luke@tatooine.net");
    assert_eq!(user.password, "force");

    Ok(())
}

/// Tests that the repository itself does not reject duplicate emails.
///
/// Email uniqueness is a service-level check, so two inserts with the same email succeed
/// at this layer.
///
/// Expected: Ok for both inserts with distinct IDs
#[tokio::test]
async fn allows_duplicate_email_at_repository_level() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let param = CreateUserParam {
        name: "Luke".to_string(),
        last_name: "Skywalker".to_string(),
        email: "luke@tatooine.net".to_string(),
        password: "force".to_string(),
    };

    let first = repo.create(param.clone()).await?;
    let second = repo.create(param).await?;

    assert_ne!(first.id, second.id);

    Ok(())
}
