use anyhow::{Context, Result};
use std::env;

#[derive(Clone, Debug)]
pub struct PulseConfig {
    pub api_url: String,
    /// Forwarded as the report endpoint's testCount parameter when set.
    pub test_count: Option<u32>,
}

#[derive(Clone, Debug)]
pub struct DirectoryConfig {
    pub api_url: String,
}

#[derive(Clone, Debug, Default)]
pub struct DbProbeConfig {
    pub url: String,
    pub username: String,
    pub password: String,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub pulse: PulseConfig,
    pub directory: Option<DirectoryConfig>,
    pub db_probe: DbProbeConfig,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let api_url = env::var("PULSE_API_URL").context("PULSE_API_URL must be set")?;

        let test_count = match env::var("PULSE_TEST_COUNT") {
            Ok(raw) => Some(
                raw.parse::<u32>()
                    .context("PULSE_TEST_COUNT must be a number")?,
            ),
            Err(_) => None,
        };

        let pulse = PulseConfig {
            api_url,
            test_count,
        };

        // Directory lookups are optional; the console runs without them.
        let directory = env::var("DIRECTORY_API_URL")
            .ok()
            .map(|api_url| DirectoryConfig { api_url });

        let db_probe = DbProbeConfig {
            url: env::var("PULSE_DB_URL").unwrap_or_default(),
            username: env::var("PULSE_DB_USER").unwrap_or_default(),
            password: env::var("PULSE_DB_PASSWORD").unwrap_or_default(),
        };

        Ok(Self {
            pulse,
            directory,
            db_probe,
        })
    }
}
