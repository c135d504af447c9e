//! User service for business logic.
//!
//! This module provides the `UserService` for registering and listing users. It enforces
//! email uniqueness with a lookup before insert.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::user::{CreateUserParam, User},
};

/// Service providing business logic for user management.
pub struct UserService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new user.
    ///
    /// # Arguments
    /// - `param` - Validated user fields
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(AppError::BadRequest)` - A user with this email already exists
    /// - `Err(AppError::DbErr)` - Database error during query or insert
    pub async fn create(&self, param: CreateUserParam) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        if user_repo.find_by_email(&param.email).await?.is_some() {
            return Err(AppError::BadRequest("User already exist".to_string()));
        }

        let user = user_repo.create(param).await?;

        tracing::info!("Created user {}", user.id);

        Ok(user)
    }

    /// Retrieves every user.
    ///
    /// # Returns
    /// - `Ok(Vec<User>)` - All users, ordered by ID
    /// - `Err(AppError::NotFound)` - No users exist
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<User>, AppError> {
        let user_repo = UserRepository::new(self.db);

        let users = user_repo.get_all().await?;
        if users.is_empty() {
            return Err(AppError::NotFound("No users exist".to_string()));
        }

        Ok(users)
    }
}
