//! Fixture group fixtures for creating in-memory test data.

use entity::fixture_group;

/// Default group title.
pub const DEFAULT_TITLE: &str = "Group A";

/// Default number of proceeders.
pub const DEFAULT_PROCEEDERS: i32 = 2;

/// Creates a fixture group entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - tournament_id: `1`
/// - title: `"Group A"`
/// - position: `0`
/// - number_of_proceeders: `2`
/// - is_final: `false`
pub fn entity() -> fixture_group::Model {
    entity_builder().build()
}

/// Creates a fixture group entity builder for customization.
pub fn entity_builder() -> FixtureGroupEntityBuilder {
    FixtureGroupEntityBuilder::default()
}

/// Builder for creating customized fixture group entity models.
pub struct FixtureGroupEntityBuilder {
    id: i32,
    tournament_id: i32,
    title: String,
    position: i32,
    number_of_proceeders: i32,
    is_final: bool,
}

impl Default for FixtureGroupEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            tournament_id: 1,
            title: DEFAULT_TITLE.to_string(),
            position: 0,
            number_of_proceeders: DEFAULT_PROCEEDERS,
            is_final: false,
        }
    }
}

impl FixtureGroupEntityBuilder {
    /// Sets the group ID.
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    /// Sets the owning tournament ID.
    pub fn tournament_id(mut self, tournament_id: i32) -> Self {
        self.tournament_id = tournament_id;
        self
    }

    /// Sets the group title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the position of the group within the draw.
    pub fn position(mut self, position: i32) -> Self {
        self.position = position;
        self
    }

    /// Sets how many finishers advance out of the group.
    pub fn number_of_proceeders(mut self, number_of_proceeders: i32) -> Self {
        self.number_of_proceeders = number_of_proceeders;
        self
    }

    /// Marks the group as the knockout phase of the draw.
    pub fn is_final(mut self, is_final: bool) -> Self {
        self.is_final = is_final;
        self
    }

    /// Builds and returns the fixture group entity model.
    pub fn build(self) -> fixture_group::Model {
        fixture_group::Model {
            id: self.id,
            tournament_id: self.tournament_id,
            title: self.title,
            position: self.position,
            number_of_proceeders: self.number_of_proceeders,
            is_final: self.is_final,
        }
    }
}
