//! People data repository for database operations.

use crate::server::model::people::{CreatePeopleParam, People};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

/// Repository providing database operations for people (characters).
pub struct PeopleRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PeopleRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new person, storing optional fields as given.
    pub async fn create(&self, param: CreatePeopleParam) -> Result<People, DbErr> {
        let entity = entity::people::ActiveModel {
            name: ActiveValue::Set(param.name),
            gender: ActiveValue::Set(param.gender),
            birth: ActiveValue::Set(param.birth),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(People::from_entity(entity))
    }

    /// Finds a person by ID.
    pub async fn find_by_id(&self, people_id: i32) -> Result<Option<People>, DbErr> {
        let entity = entity::prelude::People::find_by_id(people_id)
            .one(self.db)
            .await?;

        Ok(entity.map(People::from_entity))
    }

    /// Gets every person whose ID is in `people_ids`, skipping IDs with no row.
    pub async fn find_by_ids(&self, people_ids: &[i32]) -> Result<Vec<People>, DbErr> {
        if people_ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::People::find()
            .filter(entity::people::Column::Id.is_in(people_ids.iter().copied()))
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(People::from_entity).collect())
    }

    /// Gets all people ordered by ID.
    pub async fn get_all(&self) -> Result<Vec<People>, DbErr> {
        let entities = entity::prelude::People::find()
            .order_by_asc(entity::people::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(People::from_entity).collect())
    }
}
