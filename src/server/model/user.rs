//! User domain models and parameters.

use crate::{
    model::user::{CreateUserDto, UserDto},
    server::{error::AppError, util::parse::require_field},
};

/// Registered user of the API.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub last_name: String,
    pub email: String,
    /// Stored as submitted; never serialized.
    pub password: String,
}

impl User {
    /// Converts the user domain model to a DTO for API responses, dropping the password.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            name: self.name,
            last_name: self.last_name,
            email: self.email,
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            last_name: entity.last_name,
            email: entity.email,
            password: entity.password,
        }
    }
}

/// Parameters for registering a new user.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

impl CreateUserParam {
    /// Validates the request body and converts it into creation parameters.
    ///
    /// Fields are checked in the order name, last_name, email, password and the first
    /// missing one is reported.
    ///
    /// # Returns
    /// - `Ok(CreateUserParam)` - Every field present and non-empty
    /// - `Err(AppError::BadRequest)` - Names the first missing field
    pub fn from_dto(dto: CreateUserDto) -> Result<Self, AppError> {
        Ok(Self {
            name: require_field(dto.name, "The field name is required")?,
            last_name: require_field(dto.last_name, "The field last name is required")?,
            email: require_field(dto.email, "The field email is required")?,
            password: require_field(dto.password, "The field password is required")?,
        })
    }
}
