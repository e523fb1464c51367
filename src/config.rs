use std::{env, path::Path};

use anyhow::{Context, Result};
use dotenvy::dotenv;
use serde::Deserialize;

use crate::{
    predictor::loader::DEFAULT_MODEL_PATH,
    scoring::{AreaSweep, DEFAULT_PREDICTION_COLUMN},
};

const CONFIG_PATH_ENV: &str = "CONFIG_PATH";

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub model_path: String,
    pub output_path: String,
    pub prediction_column: String,
    pub currency_symbol: String,
    pub price_unit: String,
    pub log_level: String,
    pub sweep: AreaSweep,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            model_path: DEFAULT_MODEL_PATH.to_string(),
            output_path: "predictions.csv".to_string(),
            prediction_column: DEFAULT_PREDICTION_COLUMN.to_string(),
            currency_symbol: "₹".to_string(),
            price_unit: "lakhs".to_string(),
            log_level: "info".to_string(),
            sweep: AreaSweep::default(),
        }
    }
}

pub fn create_test_config() -> Config {
    Config {
        model_path: "xxx.json".to_string(),
        output_path: "xxx.csv".to_string(),
        log_level: "off".to_string(),
        ..Config::default()
    }
}

/// Reads the file named by `CONFIG_PATH` (a `.env` file is honoured), or
/// falls back to defaults when the variable is unset.
pub fn read_config() -> Result<Config> {
    dotenv().ok();
    match env::var(CONFIG_PATH_ENV) {
        Ok(config_path) => read_config_from(config_path),
        Err(_) => Ok(Config::default()),
    }
}

pub fn read_config_from<P: AsRef<Path>>(path: P) -> Result<Config> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    toml::from_str(&text).with_context(|| format!("failed to parse config {}", path.display()))
}
