//! Fixture match fixtures for creating in-memory test data.
//!
//! The default match has both sides open (no team, no rank placeholder), which is how a
//! knockout slot waiting on a previous match is stored.

use entity::fixture_match;

/// Creates a fixture match entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - round_id: `1`
/// - position: `0`
/// - every optional field: `None`
pub fn entity() -> fixture_match::Model {
    entity_builder().build()
}

/// Creates a fixture match entity builder for customization.
///
/// # Example
///
/// ```rust,ignore
/// let m = fixture::fixture_match::entity_builder()
///     .team1(Some(4))
///     .team2_placeholder(1, 2)
///     .build();
/// ```
pub fn entity_builder() -> FixtureMatchEntityBuilder {
    FixtureMatchEntityBuilder {
        model: fixture_match::Model {
            id: 1,
            round_id: 1,
            position: 0,
            team1_id: None,
            team2_id: None,
            team1_rank: None,
            team1_source_group_id: None,
            team2_rank: None,
            team2_source_group_id: None,
            next_match_id: None,
            venue: None,
            referee: None,
            start_time: None,
            end_time: None,
        },
    }
}

/// Builder for creating customized fixture match entity models.
pub struct FixtureMatchEntityBuilder {
    model: fixture_match::Model,
}

impl FixtureMatchEntityBuilder {
    /// Sets the match ID.
    pub fn id(mut self, id: i32) -> Self {
        self.model.id = id;
        self
    }

    /// Sets the owning round ID.
    pub fn round_id(mut self, round_id: i32) -> Self {
        self.model.round_id = round_id;
        self
    }

    /// Sets the position within the round.
    pub fn position(mut self, position: i32) -> Self {
        self.model.position = position;
        self
    }

    /// Binds the first side to a team.
    pub fn team1(mut self, team_id: Option<i32>) -> Self {
        self.model.team1_id = team_id;
        self
    }

    /// Binds the second side to a team.
    pub fn team2(mut self, team_id: Option<i32>) -> Self {
        self.model.team2_id = team_id;
        self
    }

    /// Sets the first side to "finisher `rank` of `source_group_id`".
    pub fn team1_placeholder(mut self, rank: i32, source_group_id: i32) -> Self {
        self.model.team1_rank = Some(rank);
        self.model.team1_source_group_id = Some(source_group_id);
        self
    }

    /// Sets the second side to "finisher `rank` of `source_group_id`".
    pub fn team2_placeholder(mut self, rank: i32, source_group_id: i32) -> Self {
        self.model.team2_rank = Some(rank);
        self.model.team2_source_group_id = Some(source_group_id);
        self
    }

    /// Sets the knockout advancement pointer.
    pub fn next_match_id(mut self, next_match_id: Option<i32>) -> Self {
        self.model.next_match_id = next_match_id;
        self
    }

    /// Sets the venue.
    pub fn venue(mut self, venue: Option<String>) -> Self {
        self.model.venue = venue;
        self
    }

    /// Builds and returns the fixture match entity model.
    pub fn build(self) -> fixture_match::Model {
        self.model
    }
}
