//! Domain models for tournaments and their teams.

use chrono::{DateTime, Utc};

use crate::{error::schedule::ScheduleError, model::format::TournamentFormat};

/// A tournament with its configured format.
#[derive(Debug, Clone, PartialEq)]
pub struct Tournament {
    pub id: i32,
    pub name: String,
    /// Stored format string; parse with [`Tournament::format`].
    pub format: String,
    pub created_at: DateTime<Utc>,
}

impl Tournament {
    /// Converts an entity model to a tournament domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Tournament` - The converted tournament domain model
    pub fn from_entity(entity: entity::tournament::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            format: entity.format,
            created_at: entity.created_at,
        }
    }

    /// Parses the stored format.
    ///
    /// # Returns
    /// - `Ok(TournamentFormat)` - Known format
    /// - `Err(ScheduleError::UnknownFormat)` - Stored value is not a recognized format
    pub fn format(&self) -> Result<TournamentFormat, ScheduleError> {
        self.format.parse()
    }
}

/// A participating team, as shown in fixtures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    pub id: i32,
    pub tournament_id: i32,
    pub name: String,
    pub image: Option<String>,
}

impl Team {
    /// Converts an entity model to a team domain model at the repository boundary.
    pub fn from_entity(entity: entity::team::Model) -> Self {
        Self {
            id: entity.id,
            tournament_id: entity.tournament_id,
            name: entity.name,
            image: entity.image,
        }
    }
}

/// Parameters for creating a tournament.
#[derive(Debug, Clone)]
pub struct CreateTournamentParams {
    pub name: String,
    pub format: TournamentFormat,
}

/// Parameters for registering a team in a tournament.
#[derive(Debug, Clone)]
pub struct CreateTeamParams {
    pub tournament_id: i32,
    pub name: String,
    pub image: Option<String>,
}
