use anyhow::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    #[serde(default)]
    pub linkedin: LinkedInConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Credentials are stored as-is; missing entries stay `None`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LinkedInConfig {
    pub access_token: Option<String>,
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
}

impl AppConfig {
    pub fn load(file_path: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(file_path).required(false))
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 5000_i64)?
            .build()?;

        let config: AppConfig = settings.try_deserialize()?;
        log::info!("Loaded configuration from: {}", file_path);
        Ok(config)
    }
}
