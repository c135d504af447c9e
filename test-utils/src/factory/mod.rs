//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let user = factory::create_user(&db).await?;
//!     let planet = factory::create_planet(&db).await?;
//!     let favorite = factory::create_planet_favorite(&db, user.id, planet.id).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let user = factory::user::UserFactory::new(&db)
//!     .email("leia@alderaan.org")
//!     .name("Leia")
//!     .build()
//!     .await?;
//! ```

pub mod favorite;
pub mod helpers;
pub mod people;
pub mod planet;
pub mod user;

pub use favorite::{create_people_favorite, create_planet_favorite};
pub use people::create_people;
pub use planet::create_planet;
pub use user::create_user;
