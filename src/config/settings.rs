//! Configuration settings
//!
//! Provides configuration loading from environment variables, configuration
//! files, and command-line overrides.

use serde::{Deserialize, Serialize};

// Helper functions for serde defaults
fn default_host() -> String {
    "::".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_true() -> bool {
    true
}

fn default_database_uri() -> String {
    "mongodb://localhost:27017".to_string()
}

fn default_database_name() -> String {
    "studentdb".to_string()
}

fn default_collection() -> String {
    "students".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Main configuration settings for the student service
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Server configuration
    #[serde(default)]
    pub server: ServerSettings,
    /// Document store configuration
    #[serde(default)]
    pub database: DatabaseSettings,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,
    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
    /// Enable permissive CORS
    #[serde(default = "default_true")]
    pub enable_cors: bool,
}

/// Document store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseSettings {
    /// MongoDB connection string
    #[serde(default = "default_database_uri")]
    pub uri: String,
    /// Database name
    #[serde(default = "default_database_name")]
    pub database: String,
    /// Collection holding student documents
    #[serde(default = "default_collection")]
    pub collection: String,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Enable verbose logging
    #[serde(default)]
    pub verbose: bool,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            enable_cors: default_true(),
        }
    }
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            uri: default_database_uri(),
            database: default_database_name(),
            collection: default_collection(),
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            verbose: false,
        }
    }
}

impl Settings {
    /// Create new settings with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load settings from environment variables
    pub fn from_env() -> crate::Result<Self> {
        let mut settings = Self::default();

        // Load server settings
        if let Ok(host) = std::env::var("STUDENT_API_HOST") {
            settings.server.host = host;
        }

        if let Ok(port) = std::env::var("STUDENT_API_PORT") {
            settings.server.port = port
                .parse()
                .map_err(|e| crate::Error::config("port", &format!("Invalid port: {}", e)))?;
        }

        // Load database settings
        if let Ok(uri) = std::env::var("MONGODB_URI") {
            settings.database.uri = uri;
        }

        if let Ok(database) = std::env::var("STUDENT_API_DATABASE") {
            settings.database.database = database;
        }

        // Load logging settings
        if let Ok(level) = std::env::var("LOG_LEVEL") {
            settings.logging.level = level;
        }

        if let Ok(verbose) = std::env::var("VERBOSE") {
            settings.logging.verbose = verbose.parse().unwrap_or(false);
        }

        Ok(settings)
    }

    /// Load settings from configuration file
    pub fn from_file<P: AsRef<std::path::Path>>(path: P) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            crate::Error::config("file", &format!("Failed to read config file: {}", e))
        })?;

        let settings: Settings = toml::from_str(&content).map_err(|e| {
            crate::Error::config("file", &format!("Failed to parse config file: {}", e))
        })?;

        Ok(settings)
    }

    /// Merge settings with environment variable overrides
    pub fn merge_with_env(mut self) -> crate::Result<Self> {
        let env_settings = Self::from_env()?;
        let defaults = Self::default();

        // Merge only non-default values from environment
        if env_settings.server.host != defaults.server.host {
            self.server.host = env_settings.server.host;
        }

        if env_settings.server.port != defaults.server.port {
            self.server.port = env_settings.server.port;
        }

        if env_settings.database.uri != defaults.database.uri {
            self.database.uri = env_settings.database.uri;
        }

        if env_settings.database.database != defaults.database.database {
            self.database.database = env_settings.database.database;
        }

        if env_settings.logging.level != defaults.logging.level {
            self.logging.level = env_settings.logging.level;
        }

        if env_settings.logging.verbose != defaults.logging.verbose {
            self.logging.verbose = env_settings.logging.verbose;
        }

        Ok(self)
    }

    /// Validate configuration settings
    pub fn validate(&self) -> crate::Result<()> {
        if self.server.port == 0 {
            return Err(crate::Error::config(
                "port",
                "Invalid server port: cannot be 0",
            ));
        }

        if !self.database.uri.starts_with("mongodb://")
            && !self.database.uri.starts_with("mongodb+srv://")
        {
            return Err(crate::Error::config(
                "uri",
                &format!(
                    "Invalid connection string '{}': expected mongodb:// or mongodb+srv:// scheme",
                    self.database.uri
                ),
            ));
        }

        if self.database.database.is_empty() {
            return Err(crate::Error::config(
                "database",
                "Database name cannot be empty",
            ));
        }

        if self.database.collection.is_empty() {
            return Err(crate::Error::config(
                "collection",
                "Collection name cannot be empty",
            ));
        }

        // Validate log level
        match self.logging.level.to_lowercase().as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(crate::Error::config(
                    "log_level",
                    &format!("Invalid log level: {}", self.logging.level),
                ));
            }
        }

        Ok(())
    }
}
