use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use serde::Deserialize;

use crate::client::{CartelClient, GatewayOptions, Session};

const DEFAULT_CONFIG_FILE: &str = "cartel.toml";
const CONFIG_PATH_ENV: &str = "CARTEL_CONFIG";
const ENV_PREFIX: &str = "CARTEL";

#[derive(Clone, Deserialize)]
/// Connection settings of the catalog client.
///
/// Read from `cartel.toml` (or the file named by `CARTEL_CONFIG`), then
/// overridden by `CARTEL_*` environment variables such as `CARTEL_BASE_URL`.
pub struct ClientConfig {
    #[serde(default = "ClientConfig::default_base_url")]
    pub base_url: String,
    /// Bearer token issued earlier, used as is
    #[serde(default)]
    pub token: Option<String>,
    /// Admin password, a login is made on connect when no token is set
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub max_retries: u32,
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl ClientConfig {
    fn default_base_url() -> String {
        "http://localhost:8080".to_string()
    }

    /// Loads the configuration, `path` replaces the default file and must exist
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        Self::load_from(path, config::Environment::with_prefix(ENV_PREFIX))
    }

    fn load_from(path: Option<&Path>, environment: config::Environment) -> anyhow::Result<Self> {
        let file = match path {
            Some(path) => config::File::from(path.to_path_buf()).required(true),
            None => {
                let path = std::env::var(CONFIG_PATH_ENV)
                    .map(PathBuf::from)
                    .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_FILE));
                config::File::from(path).required(false)
            }
        };

        config::Config::builder()
            .add_source(file)
            .add_source(environment.try_parsing(true))
            .build()
            .context("Failed to build configuration")?
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }

    pub fn gateway_options(&self) -> GatewayOptions {
        GatewayOptions {
            max_retries: self.max_retries,
            timeout: self.timeout_secs.map(Duration::from_secs),
        }
    }

    /// Client carrying the configured token, no request is sent
    pub fn build_client(&self) -> anyhow::Result<CartelClient> {
        let session = match &self.token {
            Some(token) => Session::with_token(token.clone()),
            None => Session::default(),
        };
        CartelClient::with_session(&self.base_url, session, self.gateway_options())
    }

    /// Like [`ClientConfig::build_client`], then logs in when only a password is configured
    pub async fn connect(&self) -> anyhow::Result<CartelClient> {
        let client = self.build_client()?;
        if let (None, Some(password)) = (&self.token, &self.password) {
            client
                .auth()
                .login(password)
                .await
                .context("Failed to login")?;
        }
        Ok(client)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: Self::default_base_url(),
            token: None,
            password: None,
            max_retries: 0,
            timeout_secs: None,
        }
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("max_retries", &self.max_retries)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}
