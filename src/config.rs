use anyhow::{Context, Result};

const LISTEN_ADDR: &str = "0.0.0.0:5000";

/// Process configuration. The RapidAPI key is the only secret; the listen
/// address is fixed and there is no further config surface.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub rapidapi_key: String,
    pub listen_addr: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        let rapidapi_key =
            std::env::var("RAPIDAPI_KEY").context("RAPIDAPI_KEY is not set")?;

        Ok(Self {
            rapidapi_key,
            listen_addr: LISTEN_ADDR.to_string(),
        })
    }
}
