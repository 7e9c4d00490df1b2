use anyhow::{bail, Context};
use serde::Deserialize;
use std::path::PathBuf;
use std::{env, fs};
use tracing::warn;

const DEFAULT_ENV: &str = "dev";
const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8000";
const DEFAULT_MAX_POOL_SIZE: u32 = 10;
pub const DEFAULT_MAX_BODY_SIZE: usize = 16 * 1024 * 1024;

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Config {
    /// Not checked here: an empty url fails when the pool connects.
    #[serde(default)]
    pub database_url: String,
    #[serde(default = "default_env")]
    pub env: String,
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
    #[serde(default = "default_max_pool_size")]
    pub max_pool_size: u32,
    /// Largest accepted JSON request body, in bytes.
    #[serde(default = "default_max_body_size")]
    pub max_body_size: usize,
}

fn default_env() -> String {
    DEFAULT_ENV.to_owned()
}

fn default_bind_address() -> String {
    DEFAULT_BIND_ADDRESS.to_owned()
}

fn default_max_pool_size() -> u32 {
    DEFAULT_MAX_POOL_SIZE
}

fn default_max_body_size() -> usize {
    DEFAULT_MAX_BODY_SIZE
}

impl Config {
    pub fn from_file(path: PathBuf) -> Result<Config, anyhow::Error> {
        let config = fs::read_to_string(path).context("Unable to read config file")?;
        Config::from_toml(config.as_str())
    }

    pub fn from_env() -> Result<Config, anyhow::Error> {
        Config::from_lookup(|key| env::var(key).ok())
    }

    fn from_toml(config: &str) -> Result<Config, anyhow::Error> {
        let config: Config = toml::from_str(config).context("Unable to parse config")?;
        config.checked()
    }

    fn from_lookup<F>(lookup: F) -> Result<Config, anyhow::Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").unwrap_or_else(|| {
            warn!("DATABASE_URL is not set");
            String::new()
        });
        let env = lookup("ENV").unwrap_or_else(default_env);
        let bind_address = lookup("BIND_ADDRESS").unwrap_or_else(default_bind_address);
        let max_pool_size = match lookup("MAX_POOL_SIZE") {
            Some(value) => value
                .parse::<u32>()
                .context("Unable to parse MAX_POOL_SIZE value")?,
            None => DEFAULT_MAX_POOL_SIZE,
        };
        let max_body_size = match lookup("MAX_BODY_SIZE") {
            Some(value) => value
                .parse::<usize>()
                .context("Unable to parse MAX_BODY_SIZE value")?,
            None => DEFAULT_MAX_BODY_SIZE,
        };

        let config = Config {
            database_url,
            env,
            bind_address,
            max_pool_size,
            max_body_size,
        };
        config.checked()
    }

    fn checked(self) -> Result<Config, anyhow::Error> {
        if self.max_pool_size == 0 {
            bail!("max_pool_size must be at least 1");
        }
        if self.max_body_size == 0 {
            bail!("max_body_size must be at least 1");
        }
        Ok(self)
    }
}
