use std::time::Duration;

use serde::Deserialize;
use url::Url;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_WEBHOOK_URL: &str = "http://localhost:5678/webhook/Contact";
pub const DEFAULT_WEBHOOK_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_ALLOWED_ORIGINS: [&str; 2] = [
    "https://contact-form-project-1-0c2g.onrender.com",
    "http://localhost:5500",
];

/// Process configuration, read once from the environment at startup.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Envy {
    pub port: Option<u16>,

    pub n8n_webhook_url: Option<String>,
    pub webhook_timeout_secs: Option<u64>,

    pub allowed_origins: Option<Vec<String>>,
}

impl Envy {
    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    pub fn webhook_url(&self) -> &str {
        self.n8n_webhook_url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or(DEFAULT_WEBHOOK_URL)
    }

    pub fn parsed_webhook_url(&self) -> Result<Url, url::ParseError> {
        Url::parse(self.webhook_url())
    }

    pub fn webhook_timeout(&self) -> Duration {
        Duration::from_secs(
            self.webhook_timeout_secs
                .unwrap_or(DEFAULT_WEBHOOK_TIMEOUT_SECS),
        )
    }

    pub fn allowed_origins(&self) -> Vec<String> {
        match &self.allowed_origins {
            Some(origins) if !origins.is_empty() => origins
                .iter()
                .map(|origin| origin.trim().to_string())
                .filter(|origin| !origin.is_empty())
                .collect(),
            _ => DEFAULT_ALLOWED_ORIGINS
                .iter()
                .map(|origin| origin.to_string())
                .collect(),
        }
    }
}
