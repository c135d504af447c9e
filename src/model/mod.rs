//! JSON request and response bodies exposed by the API.

pub mod api;
pub mod favorite;
pub mod people;
pub mod planet;
pub mod user;
