use super::*;
use axum::{extract::State, http::StatusCode};

use crate::{
    model::people::CreatePeopleDto,
    server::{
        controller::people::{create_people, get_all_people, get_people_by_id},
        util::extract::{Json, Path},
    },
};

/// Tests creating a person and listing people.
///
/// Expected: 201 with [message, person], then 200 listing the person
#[tokio::test]
async fn created_people_is_listed() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let state = AppState::new(test.db.clone().unwrap());

    let payload = CreatePeopleDto {
        name: Some("Leia Organa".to_string()),
        gender: Some("female".to_string()),
        birth: Some("19BBY".to_string()),
    };

    let response = into_response(create_people(State(state.clone()), Json(payload)).await);
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = body_json(response).await;
    assert_eq!(body[0]["message"], "People created");
    assert_eq!(body[1]["birth"], "19BBY");

    let response = into_response(get_all_people(State(state)).await);
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["name"], "Leia Organa");

    Ok(())
}

/// Tests fetching people by ID.
///
/// Expected: 200 for a seeded person, 404 for an unknown ID
#[tokio::test]
async fn get_by_id() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let state = AppState::new(test.db.clone().unwrap());

    let people = factory::create_people(&state.db).await?;

    let response = into_response(get_people_by_id(State(state.clone()), Path(people.id)).await);
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["name"], people.name);

    let response = into_response(get_people_by_id(State(state), Path(people.id + 1)).await);
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["message"], "People not found");

    Ok(())
}
