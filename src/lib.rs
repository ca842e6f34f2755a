//! Tournament fixture engine.
//!
//! Generates draws for round-robin, knockout and group-plus-playoff tournaments, stores
//! them, and reconstructs stored draws into display trees.
//!
//! # Architecture
//!
//! - **Scheduler** (`scheduler/`) - Pure draw generation over participant indices
//! - **Reconstructor** (`reconstructor/`) - Pure reshaping of a stored draw for display
//! - **Service Layer** (`service/`) - Publishing and reconstruction orchestration
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Draws, persisted fixtures and display views
//! - **Error Layer** (`error/`) - Application error types
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based configuration
//! - **Startup** (`startup`) - Tracing and database initialization
//! - **CLI** (`cli`) - Command-line entry points

pub mod cli;
pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod reconstructor;
pub mod scheduler;
pub mod service;
pub mod startup;
