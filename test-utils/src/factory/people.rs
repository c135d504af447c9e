//! People factory for creating test character entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test people with customizable fields.
pub struct PeopleFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    gender: Option<String>,
    birth: Option<String>,
}

impl<'a> PeopleFactory<'a> {
    /// Creates a new PeopleFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Person {id}"`
    /// - gender: `None`
    /// - birth: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            name: format!("Person {}", next_id()),
            gender: None,
            birth: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn gender(mut self, gender: Option<String>) -> Self {
        self.gender = gender;
        self
    }

    pub fn birth(mut self, birth: Option<String>) -> Self {
        self.birth = birth;
        self
    }

    /// Builds and inserts the people entity into the database.
    pub async fn build(self) -> Result<entity::people::Model, DbErr> {
        entity::people::ActiveModel {
            name: ActiveValue::Set(self.name),
            gender: ActiveValue::Set(self.gender),
            birth: ActiveValue::Set(self.birth),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a person with default values.
pub async fn create_people(db: &DatabaseConnection) -> Result<entity::people::Model, DbErr> {
    PeopleFactory::new(db).build().await
}
