pub use super::fixture_group::Entity as FixtureGroup;
pub use super::fixture_match::Entity as FixtureMatch;
pub use super::fixture_round::Entity as FixtureRound;
pub use super::team::Entity as Team;
pub use super::tournament::Entity as Tournament;
