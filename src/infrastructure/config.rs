use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Clone)]
pub struct PortalConfig {
    pub server: ServerSettings,
    pub api: ApiSettings,
    #[serde(default)]
    pub session: SessionSettings,
    pub watermark: WatermarkSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub bind: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiSettings {
    pub base_url: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct SessionSettings {
    /// Persist the token here; kept in memory when unset.
    pub token_path: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct WatermarkSettings {
    pub enabled: bool,
}

fn defaults() -> Result<config::ConfigBuilder<config::builder::DefaultState>, config::ConfigError> {
    config::Config::builder()
        .set_default("server.bind", "0.0.0.0:8080")?
        .set_default("api.base_url", "http://localhost:8000")?
        .set_default("api.timeout_secs", 10)?
        .set_default("watermark.enabled", true)
}

/// Defaults, then `config/portal.*` if present, then `PORTAL__SECTION__KEY`
/// environment variables.
pub fn load_portal_config() -> anyhow::Result<PortalConfig> {
    let settings = defaults()?
        .add_source(config::File::with_name("config/portal").required(false))
        .add_source(config::Environment::with_prefix("PORTAL").separator("__"))
        .build()?;

    Ok(settings.try_deserialize()?)
}
