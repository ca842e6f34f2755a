//! Database repository layer.
//!
//! Repositories borrow a SeaORM connection, query entity models and convert them to
//! domain models at the boundary. `draw` is the only writer of fixture rows; everything
//! the reconstructor reads goes through `group`.

pub mod draw;
pub mod group;
pub mod team;
pub mod tournament;

#[cfg(test)]
mod test;
