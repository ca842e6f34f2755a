//! Domain models for draws and persisted fixtures.
//!
//! `draw` holds the ephemeral scheduler output, `fixture` the persisted draw converted
//! from entity models at the repository boundary, and `view` the display tree the
//! reconstructor produces from it.

pub mod draw;
pub mod fixture;
pub mod format;
pub mod tournament;
pub mod view;
