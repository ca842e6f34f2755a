//! Tournament fixtures for creating in-memory test data.

use chrono::Utc;
use entity::tournament;

/// Default test tournament name.
pub const DEFAULT_NAME: &str = "Test Tournament";

/// Default tournament format.
pub const DEFAULT_FORMAT: &str = "round_robin";

/// Creates a tournament entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - name: `"Test Tournament"`
/// - format: `"round_robin"`
/// - created_at: now
pub fn entity() -> tournament::Model {
    entity_builder().build()
}

/// Creates a tournament entity builder for customization.
pub fn entity_builder() -> TournamentEntityBuilder {
    TournamentEntityBuilder::default()
}

/// Builder for creating customized tournament entity models.
pub struct TournamentEntityBuilder {
    id: i32,
    name: String,
    format: String,
}

impl Default for TournamentEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            name: DEFAULT_NAME.to_string(),
            format: DEFAULT_FORMAT.to_string(),
        }
    }
}

impl TournamentEntityBuilder {
    /// Sets the tournament ID.
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    /// Sets the tournament name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the stored format string.
    ///
    /// The value is stored verbatim so tests can exercise unknown formats.
    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.format = format.into();
        self
    }

    /// Builds and returns the tournament entity model.
    pub fn build(self) -> tournament::Model {
        tournament::Model {
            id: self.id,
            name: self.name,
            format: self.format,
            created_at: Utc::now(),
        }
    }
}
