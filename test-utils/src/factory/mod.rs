//! Factory methods for creating test data.
//!
//! This module provides factory methods for inserting test entities with sensible defaults,
//! reducing boilerplate in tests. Default values come from the matching `fixture` module.
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
//!     // Create with defaults
//!     let tournament = factory::create_tournament(&db, "knockout").await?;
//!
//!     // Create a tournament together with its teams
//!     let (tournament, teams) =
//!         factory::helpers::create_tournament_with_teams(&db, "group_playoff", 8).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Available Factories
//!
//! - `tournament` - Create tournament entities
//! - `team` - Create team entities
//! - `fixture_group` - Create fixture group entities
//! - `fixture_round` - Create fixture round entities
//! - `fixture_match` - Create fixture match entities
//! - `helpers` - ID generation and multi-entity helpers

pub mod fixture_group;
pub mod fixture_match;
pub mod fixture_round;
pub mod helpers;
pub mod team;
pub mod tournament;

pub use fixture_group::create_group;
pub use fixture_match::create_match;
pub use fixture_round::create_round;
pub use team::{create_team, create_teams};
pub use tournament::create_tournament;
