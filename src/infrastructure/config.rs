//! Application configuration management.
//!
//! Configuration is loaded once at startup from environment variables,
//! with a `.env` file honored when present. The completion endpoint
//! credentials are deliberately optional: without them the service runs
//! with the remote call disabled instead of carrying credentials in source.
//!
//! # Example
//!
//! ```rust,ignore
//! use task_tracker::infrastructure::AppConfig;
//!
//! let config = AppConfig::from_env()?;
//! println!("Serving on {}:{}", config.app_host, config.app_port);
//! ```

use std::env;
use std::num::ParseIntError;

/// Configuration error types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A required environment variable is not set.
    MissingEnvVar(String),
    /// An environment variable has an invalid value.
    InvalidValue {
        /// The name of the environment variable.
        key: String,
        /// Description of why the value is invalid.
        message: String,
    },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingEnvVar(key) => {
                write!(formatter, "Missing environment variable: {key}")
            }
            Self::InvalidValue { key, message } => {
                write!(formatter, "Invalid value for {key}: {message}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Application configuration.
///
/// Values are loaded from environment variables by [`AppConfig::from_env`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// HTTP server host address.
    pub app_host: String,
    /// HTTP server port.
    pub app_port: u16,
    /// Path of the JSON file holding the task list.
    pub tasks_file: String,
    /// Base URL of the completion endpoint; the model name is appended to
    /// it. `None` disables the completion call.
    pub completion_base_url: Option<String>,
    /// Bearer token for the completion endpoint. `None` disables the
    /// completion call.
    pub completion_api_token: Option<String>,
    /// Model identifier appended to the base URL.
    pub completion_model: String,
    /// Round-trip timeout for completion requests, in seconds.
    pub completion_timeout_secs: u64,
}

/// Default model identifier for the completion endpoint.
const DEFAULT_COMPLETION_MODEL: &str = "@cf/meta/llama-3-8b-instruct";

impl AppConfig {
    /// Loads configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `APP_HOST`: server host (optional, default: "0.0.0.0")
    /// - `APP_PORT`: server port (optional, default: 8080)
    /// - `TASKS_FILE`: task list path (optional, default: "tasks.json")
    /// - `COMPLETION_BASE_URL`: completion endpoint prefix (optional;
    ///   unset disables the completion call)
    /// - `COMPLETION_API_TOKEN`: bearer token (optional; unset disables
    ///   the completion call)
    /// - `COMPLETION_MODEL`: model identifier (optional, default:
    ///   "@cf/meta/llama-3-8b-instruct")
    /// - `COMPLETION_TIMEOUT_SECS`: request timeout (optional, default: 30)
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if a numeric variable is set
    /// but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignores errors if file doesn't exist)
        dotenvy::dotenv().ok();

        let app_host = get_optional_env("APP_HOST", "0.0.0.0".to_string());
        let app_port = get_optional_env_parsed("APP_PORT", 8080)?;
        let tasks_file = get_optional_env("TASKS_FILE", "tasks.json".to_string());

        let completion_base_url = env::var("COMPLETION_BASE_URL").ok();
        let completion_api_token = env::var("COMPLETION_API_TOKEN").ok();
        let completion_model =
            get_optional_env("COMPLETION_MODEL", DEFAULT_COMPLETION_MODEL.to_string());
        let completion_timeout_secs = get_optional_env_parsed("COMPLETION_TIMEOUT_SECS", 30)?;

        Ok(Self {
            app_host,
            app_port,
            tasks_file,
            completion_base_url,
            completion_api_token,
            completion_model,
            completion_timeout_secs,
        })
    }

    /// Whether both completion credentials are present.
    #[must_use]
    pub const fn completion_enabled(&self) -> bool {
        self.completion_base_url.is_some() && self.completion_api_token.is_some()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app_host: "0.0.0.0".to_string(),
            app_port: 8080,
            tasks_file: "tasks.json".to_string(),
            completion_base_url: None,
            completion_api_token: None,
            completion_model: DEFAULT_COMPLETION_MODEL.to_string(),
            completion_timeout_secs: 30,
        }
    }
}

/// Gets an optional environment variable with a default value.
fn get_optional_env(key: &str, default: String) -> String {
    env::var(key).unwrap_or(default)
}

/// Gets an optional environment variable and parses it, with a default value.
///
/// # Errors
///
/// Returns `ConfigError::InvalidValue` if the variable is set but cannot be parsed.
fn get_optional_env_parsed<T>(key: &str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr<Err = ParseIntError>,
{
    env::var(key).map_or_else(
        |_| Ok(default),
        |value| {
            value
                .parse()
                .map_err(|error: ParseIntError| ConfigError::InvalidValue {
                    key: key.to_string(),
                    message: error.to_string(),
                })
        },
    )
}
