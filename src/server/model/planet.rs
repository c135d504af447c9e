//! Planet domain models and parameters.

use crate::{
    model::planet::{CreatePlanetDto, PlanetDto},
    server::{error::AppError, util::parse::require_field},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Planet {
    pub id: i32,
    pub name: String,
    pub weather: Option<String>,
    pub population: Option<String>,
}

impl Planet {
    pub fn into_dto(self) -> PlanetDto {
        PlanetDto {
            id: self.id,
            name: self.name,
            weather: self.weather,
            population: self.population,
        }
    }

    pub fn from_entity(entity: entity::planet::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            weather: entity.weather,
            population: entity.population,
        }
    }
}

/// Parameters for creating a planet. Optional fields are stored as given.
#[derive(Debug, Clone)]
pub struct CreatePlanetParam {
    pub name: String,
    pub weather: Option<String>,
    pub population: Option<String>,
}

impl CreatePlanetParam {
    /// # Returns
    /// - `Ok(CreatePlanetParam)` - Name present
    /// - `Err(AppError::BadRequest)` - Name missing or empty
    pub fn from_dto(dto: CreatePlanetDto) -> Result<Self, AppError> {
        Ok(Self {
            name: require_field(dto.name, "Name is required")?,
            weather: dto.weather,
            population: dto.population,
        })
    }
}
