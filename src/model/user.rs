use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Serialized user. The password is never part of a response.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct UserDto {
    pub id: i32,
    pub name: String,
    pub last_name: String,
    pub email: String,
}

/// Request body for `POST /users`.
///
/// Every field is optional at the JSON level so that a missing field is reported with a
/// field-specific message instead of a deserialization rejection.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Default)]
pub struct CreateUserDto {
    pub name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct UserCreatedDto {
    pub message: String,
    pub user: UserDto,
}
