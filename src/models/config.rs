use serde::Deserialize;

fn default_database_url() -> String {
    "hotspots.db".to_string()
}

fn default_bind_address() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

/// Configuration options for the Hotspots service.
///
/// Loaded from an optional `config.yaml` with environment-variable
/// overrides; every field has a sensible default for local development.
#[derive(Clone, Debug, Deserialize)]
pub struct ServerConfig {
    /// Path or URL of the SQLite database.
    #[serde(default = "default_database_url")]
    pub database_url: String,
    /// Interface the HTTP server binds to.
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
    /// Port the HTTP server listens on.
    #[serde(default = "default_port")]
    pub port: u16,
}
