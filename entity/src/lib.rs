//! SeaORM entity models for persisted tournament draws.
//!
//! A tournament owns teams and fixture groups. Each group owns ordered rounds, and each
//! round owns ordered match slots. Match slots reference either concrete teams or a
//! `(rank, source group)` placeholder that resolves once the source group completes.

pub mod prelude;

pub mod fixture_group;
pub mod fixture_match;
pub mod fixture_round;
pub mod team;
pub mod tournament;
