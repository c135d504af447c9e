use sea_orm::DatabaseConnection;

use crate::server::{
    data::planet::PlanetRepository,
    error::AppError,
    model::planet::{CreatePlanetParam, Planet},
};

pub struct PlanetService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlanetService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new planet
    pub async fn create(&self, param: CreatePlanetParam) -> Result<Planet, AppError> {
        let repo = PlanetRepository::new(self.db);

        let planet = repo.create(param).await?;

        tracing::info!("Created planet {}", planet.id);

        Ok(planet)
    }

    /// Gets every planet, failing with NotFound when there are none
    pub async fn get_all(&self) -> Result<Vec<Planet>, AppError> {
        let repo = PlanetRepository::new(self.db);

        let planets = repo.get_all().await?;
        if planets.is_empty() {
            return Err(AppError::NotFound("No planets exist".to_string()));
        }

        Ok(planets)
    }

    /// Gets a planet by ID
    pub async fn get_by_id(&self, planet_id: i32) -> Result<Planet, AppError> {
        let repo = PlanetRepository::new(self.db);

        repo.find_by_id(planet_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Planet not found".to_string()))
    }
}
