use anyhow::Context;

#[derive(Clone)]
pub struct AppConfig {
    pub bind_addr: String,
    pub omise_public_key: String,
    pub omise_secret_key: String,
    pub omise_base_url: String,
    pub gateway_timeout_ms: u64,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string()),
            omise_public_key: std::env::var("OMISE_PUBLIC_KEY")
                .context("OMISE_PUBLIC_KEY is not defined")?,
            omise_secret_key: std::env::var("OMISE_SECRET_KEY")
                .context("OMISE_SECRET_KEY is not defined")?,
            omise_base_url: std::env::var("OMISE_BASE_URL")
                .unwrap_or_else(|_| "https://api.omise.co".to_string()),
            gateway_timeout_ms: std::env::var("GATEWAY_TIMEOUT_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(2500),
        })
    }
}
