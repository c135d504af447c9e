//! HTTP request handlers.
//!
//! Controllers extract and validate request input, convert DTOs into domain parameters,
//! call the matching service and convert the result back into a DTO response.

pub mod favorite;
pub mod people;
pub mod planet;
pub mod sitemap;
pub mod user;

#[cfg(test)]
mod test;
