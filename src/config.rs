use serde::{Deserialize, Serialize};

use crate::consts;
use crate::errors::PlannerError;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Base URL of the OpenAI-compatible chat-completions API.
    pub api_url: String,
    /// Model identifier sent with every request.
    pub model: String,
    /// In the config file this names the environment variable holding the
    /// credential; after loading it holds the resolved key itself.
    pub api_key: String,
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
}

fn default_bind_addr() -> String {
    consts::DEFAULT_BIND_ADDR.to_string()
}

pub trait ConfigLoader: Send + Sync {
    fn load_config(&self) -> Result<Config, PlannerError>;
}

pub struct FileConfigLoader;

impl FileConfigLoader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader for FileConfigLoader {
    fn load_config(&self) -> Result<Config, PlannerError> {
        let config_file = std::env::var("FP_CONFIG_FILE").unwrap_or("./config.json".to_string());
        let config_str = std::fs::read_to_string(&config_file)?;
        let mut config = parse_config(&config_str)?;

        config.api_key = std::env::var(&config.api_key).unwrap_or_default();

        Ok(config)
    }
}

pub fn parse_config(config_str: &str) -> Result<Config, PlannerError> {
    let config: Config = serde_json::from_str(config_str)?;
    Ok(config)
}

pub fn load_config() -> Result<Config, PlannerError> {
    let loader = FileConfigLoader::new();
    loader.load_config()
}
