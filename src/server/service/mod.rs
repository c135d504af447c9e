//! Service layer for business logic and orchestration.
//!
//! This module sits between the controller (API) layer and the data (repository) layer.
//! Services are responsible for:
//!
//! - **Business Logic**: Existence checks, duplicate checks and empty-collection rules
//! - **Orchestration**: Coordinating several repositories for one request
//! - **Domain Models**: Working with domain models rather than DTOs or entity models

pub mod favorite;
pub mod people;
pub mod planet;
pub mod user;

#[cfg(test)]
mod test;
