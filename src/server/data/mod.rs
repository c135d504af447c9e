//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations for each
//! entity. Repositories use SeaORM entity models internally and return domain models to
//! keep the data layer separate from business logic.

pub mod favorite;
pub mod people;
pub mod planet;
pub mod user;

#[cfg(test)]
mod test;
