use crate::{
    error::{config::ConfigError, AppError},
    scheduler::DEFAULT_PROCEEDERS,
};

/// Runtime configuration loaded from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub database_url: String,

    /// Finishers advancing out of each group when a publish does not say otherwise.
    pub default_proceeders: usize,
    /// Round-robin repetitions when a publish does not say otherwise.
    pub default_rounds: i32,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` first to pick up a `.env` file.
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and valid
    /// - `Err(AppError::ConfigErr)` - `DATABASE_URL` missing, or an optional variable invalid
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Loads configuration through `lookup`, which returns the value of a variable if set.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let default_proceeders = match lookup("FIXTURE_DEFAULT_PROCEEDERS") {
            Some(value) => match value.parse::<usize>() {
                Ok(proceeders) if proceeders >= 1 => proceeders,
                _ => {
                    return Err(ConfigError::InvalidEnvVar {
                        name: "FIXTURE_DEFAULT_PROCEEDERS".to_string(),
                        value,
                        reason: "expected a positive integer".to_string(),
                    }
                    .into())
                }
            },
            None => DEFAULT_PROCEEDERS,
        };

        let default_rounds = match lookup("FIXTURE_DEFAULT_ROUNDS") {
            Some(value) => value.parse::<i32>().map_err(|_| ConfigError::InvalidEnvVar {
                name: "FIXTURE_DEFAULT_ROUNDS".to_string(),
                value: value.clone(),
                reason: "expected an integer".to_string(),
            })?,
            None => 1,
        };

        Ok(Self {
            database_url,
            default_proceeders,
            default_rounds,
        })
    }
}
