use anyhow::{anyhow, Context, Result};
use dotenvy::dotenv;
use log::LevelFilter;
use serde::Deserialize;
use std::{env, path::Path, str::FromStr, time::Duration};

const CONFIG_PATH_ENV: &str = "CONFIG_PATH";
const DATABASE_URL_ENV: &str = "DATABASE_URL";

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct Config {
    pub database_url: String,
    pub log_level: String,
    /// Humantime duration, e.g. "5s" or "1500ms".
    pub busy_timeout: String,
    /// Load seed rows as part of `build`.
    pub seed: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            database_url: "dreamhome.db".to_string(),
            log_level: "info".to_string(),
            busy_timeout: "5s".to_string(),
            seed: true,
        }
    }
}

impl Config {
    pub fn busy_timeout(&self) -> Result<Duration> {
        humantime::parse_duration(&self.busy_timeout)
            .with_context(|| format!("invalid busy_timeout `{}`", self.busy_timeout))
    }

    pub fn log_level(&self) -> Result<LevelFilter> {
        LevelFilter::from_str(&self.log_level)
            .map_err(|_| anyhow!("invalid log_level `{}`", self.log_level))
    }
}

pub fn create_test_config() -> Config {
    Config {
        database_url: ":memory:".to_string(),
        log_level: "debug".to_string(),
        busy_timeout: "1s".to_string(),
        seed: true,
    }
}

pub fn parse_config(contents: &str) -> Result<Config> {
    toml::from_str(contents).context("failed to parse config")
}

/// Reads the config from `path`, or from `CONFIG_PATH` when no path is given.
/// Without either, defaults are used. `DATABASE_URL` always wins over the file.
pub fn read_config(path: Option<&Path>) -> Result<Config> {
    dotenv().ok();

    let path = path
        .map(Path::to_path_buf)
        .or_else(|| env::var(CONFIG_PATH_ENV).ok().map(Into::into));

    let mut config = match path {
        Some(path) => {
            let contents = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config {}", path.display()))?;
            parse_config(&contents)?
        }
        None => Config::default(),
    };

    if let Ok(url) = env::var(DATABASE_URL_ENV) {
        config.database_url = url;
    }

    Ok(config)
}
