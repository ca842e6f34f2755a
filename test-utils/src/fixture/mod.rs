//! Test fixtures providing reusable test data without database insertion.
//!
//! This module contains fixture functions that create in-memory entity models for use in
//! unit tests and as default values for factories. Unlike factories, fixtures do NOT
//! insert data into the database.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! // Create in-memory entity model (no DB)
//! let team = fixture::team::entity();
//!
//! // Create with custom fields
//! let slot = fixture::fixture_match::entity_builder()
//!     .team1_placeholder(2, 7)
//!     .build();
//! ```

pub mod fixture_group;
pub mod fixture_match;
pub mod fixture_round;
pub mod team;
pub mod tournament;

pub use fixture_group::{entity as group_entity, entity_builder as group_entity_builder};
pub use fixture_match::{entity as match_entity, entity_builder as match_entity_builder};
pub use fixture_round::{entity as round_entity, entity_builder as round_entity_builder};
pub use team::{entity as team_entity, entity_builder as team_entity_builder};
pub use tournament::{entity as tournament_entity, entity_builder as tournament_entity_builder};
