use uuid::Uuid;

use crate::shared::config::{AppConfig, AppConfigBuilder, ConfigError};

/// Default server URL
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:5000";

/// Environment variable overriding the server URL
pub const SERVER_URL_VAR: &str = "TODOFLOW_SERVER_URL";

/// Client configuration wrapper.
///
/// Every process gets its own random client id; it is sent as the origin
/// token with each mutation and with the event subscription.
#[derive(Debug, Clone)]
pub struct Config {
    app: AppConfig,
    client_id: String,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Build a configuration from `TODOFLOW_SERVER_URL`, falling back to the
    /// default URL when the variable is unset or invalid
    pub fn new() -> Self {
        let client_id = new_client_id();
        let from_env = std::env::var(SERVER_URL_VAR)
            .ok()
            .map(|url| AppConfig::builder().server_url(url).client_id(client_id.clone()).build());

        let app = match from_env {
            Some(Ok(app)) => app,
            Some(Err(e)) => {
                tracing::warn!("[Client] Ignoring {}: {}", SERVER_URL_VAR, e);
                default_app_config(&client_id)
            }
            None => default_app_config(&client_id),
        };

        Self { app, client_id }
    }

    /// Build a configuration from an explicit builder
    ///
    /// A client id is generated if the builder did not set one.
    pub fn with_builder(builder: AppConfigBuilder) -> Result<Self, ConfigError> {
        let mut app = builder.build()?;
        let client_id = app.client_id.clone().unwrap_or_else(new_client_id);
        app.client_id = Some(client_id.clone());
        Ok(Self { app, client_id })
    }

    /// Shorthand for a configuration pointing at `server_url`
    pub fn for_server(server_url: impl Into<String>) -> Result<Self, ConfigError> {
        Self::with_builder(AppConfig::builder().server_url(server_url))
    }

    /// Get the full URL for an API endpoint
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.server_url(), path)
    }

    pub fn server_url(&self) -> &str {
        self.app.server_url.as_deref().unwrap_or(DEFAULT_SERVER_URL)
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }
}

fn new_client_id() -> String {
    Uuid::new_v4().simple().to_string()
}

fn default_app_config(client_id: &str) -> AppConfig {
    AppConfig {
        server_url: Some(DEFAULT_SERVER_URL.to_string()),
        client_id: Some(client_id.to_string()),
    }
}
