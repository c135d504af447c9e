//! People (character) domain models and parameters.

use crate::{
    model::people::{CreatePeopleDto, PeopleDto},
    server::{error::AppError, util::parse::require_field},
};

#[derive(Debug, Clone, PartialEq)]
pub struct People {
    pub id: i32,
    pub name: String,
    pub gender: Option<String>,
    pub birth: Option<String>,
}

impl People {
    pub fn into_dto(self) -> PeopleDto {
        PeopleDto {
            id: self.id,
            name: self.name,
            gender: self.gender,
            birth: self.birth,
        }
    }

    pub fn from_entity(entity: entity::people::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            gender: entity.gender,
            birth: entity.birth,
        }
    }
}

/// Parameters for creating a person. Optional fields are stored as given.
#[derive(Debug, Clone)]
pub struct CreatePeopleParam {
    pub name: String,
    pub gender: Option<String>,
    pub birth: Option<String>,
}

impl CreatePeopleParam {
    /// # Returns
    /// - `Ok(CreatePeopleParam)` - Name present
    /// - `Err(AppError::BadRequest)` - Name missing or empty
    pub fn from_dto(dto: CreatePeopleDto) -> Result<Self, AppError> {
        Ok(Self {
            name: require_field(dto.name, "Name is required")?,
            gender: dto.gender,
            birth: dto.birth,
        })
    }
}
