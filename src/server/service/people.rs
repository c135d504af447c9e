use sea_orm::DatabaseConnection;

use crate::server::{
    data::people::PeopleRepository,
    error::AppError,
    model::people::{CreatePeopleParam, People},
};

pub struct PeopleService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PeopleService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new person
    pub async fn create(&self, param: CreatePeopleParam) -> Result<People, AppError> {
        let repo = PeopleRepository::new(self.db);

        let people = repo.create(param).await?;

        tracing::info!("Created people {}", people.id);

        Ok(people)
    }

    /// Gets every person, failing with NotFound when there are none
    pub async fn get_all(&self) -> Result<Vec<People>, AppError> {
        let repo = PeopleRepository::new(self.db);

        let people = repo.get_all().await?;
        if people.is_empty() {
            return Err(AppError::NotFound("No people exist".to_string()));
        }

        Ok(people)
    }

    /// Gets a person by ID
    pub async fn get_by_id(&self, people_id: i32) -> Result<People, AppError> {
        let repo = PeopleRepository::new(self.db);

        repo.find_by_id(people_id)
            .await?
            .ok_or_else(|| AppError::NotFound("People not found".to_string()))
    }
}
