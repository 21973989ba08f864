use std::time::Duration;

use anyhow::Result;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Config {
    pub service: ServiceConfig,
    pub api: ApiConfig,
    pub recording: RecordingConfig,
}

#[derive(Debug, Deserialize)]
pub struct ServiceConfig {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the remote pipeline service.
    pub base_url: String,

    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize)]
pub struct RecordingConfig {
    /// Debounce window for the record button, in milliseconds.
    pub debounce_ms: u64,
}

impl Config {
    /// Load configuration from a file, falling back to defaults for any
    /// value (or the whole file) that is missing.
    pub fn load(path: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .set_default("service.name", "talkturn")?
            .set_default("api.base_url", "http://localhost:3000")?
            .set_default("api.timeout_secs", 30_i64)?
            .set_default("recording.debounce_ms", 300_i64)?
            .add_source(config::File::with_name(path).required(false))
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.api.timeout_secs)
    }

    pub fn debounce_window(&self) -> Duration {
        Duration::from_millis(self.recording.debounce_ms)
    }
}
