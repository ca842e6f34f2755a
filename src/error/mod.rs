//! Error types for the fixture engine.
//!
//! This module provides the crate's error hierarchy. `AppError` is the top-level type
//! returned by services and the CLI; it wraps the domain-specific errors raised by the
//! scheduler, the reconstructor, configuration loading and the database layer.

pub mod config;
pub mod fixture;
pub mod schedule;

use thiserror::Error;

use crate::error::{config::ConfigError, fixture::FixtureError, schedule::ScheduleError};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application. Most variants
/// use `#[from]` for automatic error conversion so `?` can be used across layers.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Invalid draw request (participant count, group count, unknown format).
    ///
    /// Rejected before any computation; the caller must fix the input.
    #[error(transparent)]
    ScheduleErr(#[from] ScheduleError),

    /// Persisted draw is internally inconsistent.
    ///
    /// Never auto-recovered, repairing a corrupt draw would fabricate a bracket.
    #[error(transparent)]
    FixtureErr(#[from] FixtureError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// JSON serialization error while rendering output.
    #[error(transparent)]
    JsonErr(#[from] serde_json::Error),

    /// Resource not found error.
    ///
    /// # Fields
    /// - Message describing what resource was not found
    #[error("{0}")]
    NotFound(String),

    /// Invalid request error.
    ///
    /// # Fields
    /// - Message describing what was invalid about the request
    #[error("{0}")]
    BadRequest(String),

    /// Internal error with custom message.
    ///
    /// # Fields
    /// - Detailed error message for logging
    #[error("{0}")]
    InternalError(String),
}

impl AppError {
    /// Whether the error was caused by the caller's input rather than by the system.
    ///
    /// Client errors are not retryable: the same request will fail the same way.
    ///
    /// # Returns
    /// - `true` - For `ScheduleErr`, `NotFound` and `BadRequest`
    /// - `false` - For configuration, integrity, database and internal failures
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::ScheduleErr(_) | Self::NotFound(_) | Self::BadRequest(_)
        )
    }
}
