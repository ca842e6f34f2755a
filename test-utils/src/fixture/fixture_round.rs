//! Fixture round fixtures for creating in-memory test data.

use entity::fixture_round;

/// Creates a fixture round entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - group_id: `1`
/// - position: `0`
/// - title: `"Round 1"`
pub fn entity() -> fixture_round::Model {
    entity_builder().build()
}

/// Creates a fixture round entity builder for customization.
pub fn entity_builder() -> FixtureRoundEntityBuilder {
    FixtureRoundEntityBuilder::default()
}

/// Builder for creating customized fixture round entity models.
pub struct FixtureRoundEntityBuilder {
    id: i32,
    group_id: i32,
    position: i32,
    title: Option<String>,
}

impl Default for FixtureRoundEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            group_id: 1,
            position: 0,
            title: None,
        }
    }
}

impl FixtureRoundEntityBuilder {
    /// Sets the round ID.
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    /// Sets the owning group ID.
    pub fn group_id(mut self, group_id: i32) -> Self {
        self.group_id = group_id;
        self
    }

    /// Sets the round position. The default title follows the position.
    pub fn position(mut self, position: i32) -> Self {
        self.position = position;
        self
    }

    /// Sets the round title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Builds and returns the fixture round entity model.
    pub fn build(self) -> fixture_round::Model {
        fixture_round::Model {
            id: self.id,
            group_id: self.group_id,
            position: self.position,
            title: self
                .title
                .unwrap_or_else(|| format!("Round {}", self.position + 1)),
        }
    }
}
