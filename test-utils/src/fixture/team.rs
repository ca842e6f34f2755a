//! Team fixtures for creating in-memory test data.
//!
//! Provides fixture functions for creating team entity models without database insertion.

use entity::team;

/// Default test team name.
pub const DEFAULT_NAME: &str = "Test Team";

/// Default tournament ID for teams.
pub const DEFAULT_TOURNAMENT_ID: i32 = 1;

/// Creates a team entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - tournament_id: `1`
/// - name: `"Test Team"`
/// - image: `None`
///
/// # Returns
/// - `team::Model` - In-memory team entity
///
/// # Example
///
/// ```rust,ignore
/// let team = fixture::team::entity();
/// assert_eq!(team.name, "Test Team");
/// ```
pub fn entity() -> team::Model {
    team::Model {
        id: 1,
        tournament_id: DEFAULT_TOURNAMENT_ID,
        name: DEFAULT_NAME.to_string(),
        image: None,
    }
}

/// Creates a team entity builder for customization.
///
/// # Returns
/// - `TeamEntityBuilder` - Builder instance with default values
pub fn entity_builder() -> TeamEntityBuilder {
    TeamEntityBuilder::default()
}

/// Builder for creating customized team entity models.
pub struct TeamEntityBuilder {
    id: i32,
    tournament_id: i32,
    name: String,
    image: Option<String>,
}

impl Default for TeamEntityBuilder {
    fn default() -> Self {
        let team = entity();
        Self {
            id: team.id,
            tournament_id: team.tournament_id,
            name: team.name,
            image: team.image,
        }
    }
}

impl TeamEntityBuilder {
    /// Sets the team ID.
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    /// Sets the owning tournament ID.
    pub fn tournament_id(mut self, tournament_id: i32) -> Self {
        self.tournament_id = tournament_id;
        self
    }

    /// Sets the team name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the team image URL.
    pub fn image(mut self, image: Option<String>) -> Self {
        self.image = image;
        self
    }

    /// Builds and returns the team entity model.
    pub fn build(self) -> team::Model {
        team::Model {
            id: self.id,
            tournament_id: self.tournament_id,
            name: self.name,
            image: self.image,
        }
    }
}
