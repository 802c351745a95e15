//! Store configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional.
//!
//! - `ECOSANKALP_DATA_DIR` - Directory for file-backed storage (default: in-memory)
//! - `ECOSANKALP_ADMIN_SECRET` - Admin console password (default: admin123)
//! - `ECOSANKALP_REPORT_AWARD` - Points for submitting a report (default: 25)
//! - `ECOSANKALP_MODULE_AWARD` - Points for completing a module (default: 50)
//! - `ECOSANKALP_CITIZEN_SEED_POINTS` - Starting balance for citizens (default: 350)
//! - `ECOSANKALP_PAYMENT_LATENCY_MS` - Simulated gateway latency (default: 1200)

use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use secrecy::SecretString;
use thiserror::Error;

const DEFAULT_ADMIN_SECRET: &str = "admin123";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Green Points awarded for platform activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RewardConfig {
    /// Credited when a report is submitted.
    pub report_award: u32,
    /// Credited when a training module is completed.
    pub module_award: u32,
    /// Balance a citizen starts a login session with.
    pub citizen_seed_points: u32,
}

impl Default for RewardConfig {
    fn default() -> Self {
        Self {
            report_award: 25,
            module_award: 50,
            citizen_seed_points: 350,
        }
    }
}

/// Store configuration.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Where slot files live; `None` keeps everything in memory.
    pub data_dir: Option<PathBuf>,
    /// Admin console password.
    pub admin_secret: SecretString,
    /// Point awards.
    pub rewards: RewardConfig,
    /// Delay the scripted payment gateway waits before answering.
    pub payment_latency: Duration,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            admin_secret: SecretString::from(DEFAULT_ADMIN_SECRET.to_owned()),
            rewards: RewardConfig::default(),
            payment_latency: Duration::from_millis(1200),
        }
    }
}

impl StoreConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a numeric variable does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let defaults = Self::default();
        let rewards = RewardConfig {
            report_award: get_parsed_or("ECOSANKALP_REPORT_AWARD", defaults.rewards.report_award)?,
            module_award: get_parsed_or("ECOSANKALP_MODULE_AWARD", defaults.rewards.module_award)?,
            citizen_seed_points: get_parsed_or(
                "ECOSANKALP_CITIZEN_SEED_POINTS",
                defaults.rewards.citizen_seed_points,
            )?,
        };
        let latency_ms: u64 = get_parsed_or("ECOSANKALP_PAYMENT_LATENCY_MS", 1200)?;

        Ok(Self {
            data_dir: get_optional_env("ECOSANKALP_DATA_DIR").map(PathBuf::from),
            admin_secret: get_optional_env("ECOSANKALP_ADMIN_SECRET")
                .map_or(defaults.admin_secret, SecretString::from),
            rewards,
            payment_latency: Duration::from_millis(latency_ms),
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional, non-empty environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Parse an environment variable, falling back to a default when unset.
fn get_parsed_or<T>(key: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    get_optional_env(key).map_or(Ok(default), |raw| parse_value(key, &raw))
}

fn parse_value<T>(key: &str, raw: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}
