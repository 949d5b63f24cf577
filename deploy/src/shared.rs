use std::path::PathBuf;
use std::str::FromStr;

use dotenvy::dotenv;
use fuels::crypto::SecretKey;
use fuels::prelude::{Provider, WalletUnlocked};
use fuels::types::bech32::Bech32Address;
use thiserror::Error;
use tracing::debug;

use crate::artifact::ArtifactSource;
use crate::fuel::FuelRunner;
use crate::network::DEVELOPMENT;

pub const DEFAULT_CONTRACT: &str = "cred_eth";
pub const DEFAULT_ARTIFACTS_DIR: &str = "..";
pub const DEFAULT_BUILD_PROFILE: &str = "release";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing env var {0}")]
    Missing(&'static str),

    #[error("Invalid value for {var}: {message}")]
    Invalid { var: &'static str, message: String },

    #[error("Fuel error: {0}")]
    Fuels(#[from] fuels::types::errors::Error),
}

#[derive(Clone)]
pub struct Config {
    pub fuel_url: String,
    pub network: String,
    pub account_pks: Vec<String>,
    pub default_pk: Option<String>,
    pub contract: String,
    pub artifacts_dir: PathBuf,
    pub build_profile: String,
    pub random_salt: bool,
}

/// Loads `.env` if present, then reads the process environment.
pub fn config() -> Result<Config, ConfigError> {
    if let Err(e) = dotenv() {
        debug!("No .env loaded: {}", e);
    }
    Config::from_vars(|var| std::env::var(var).ok())
}

impl Config {
    pub fn from_vars<F>(var: F) -> Result<Config, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &'static str| var(name).ok_or(ConfigError::Missing(name));
        let account_pks: Vec<String> = required("ACCOUNT_PKS")?
            .split(',')
            .map(|pk| pk.trim().to_string())
            .filter(|pk| !pk.is_empty())
            .collect();
        let random_salt = match var("RANDOM_SALT") {
            None => true,
            Some(value) => value.parse::<bool>().map_err(|e| ConfigError::Invalid {
                var: "RANDOM_SALT",
                message: e.to_string(),
            })?,
        };
        let network = var("NETWORK").unwrap_or_else(|| DEVELOPMENT.to_string());
        if network.is_empty() {
            return Err(ConfigError::Invalid {
                var: "NETWORK",
                message: "network identifier must not be empty".to_string(),
            });
        }
        Ok(Config {
            fuel_url: required("FUEL_URL")?,
            network,
            account_pks,
            default_pk: var("DEFAULT_PK").filter(|pk| !pk.is_empty()),
            contract: var("CONTRACT").unwrap_or_else(|| DEFAULT_CONTRACT.to_string()),
            artifacts_dir: var("ARTIFACTS_DIR")
                .unwrap_or_else(|| DEFAULT_ARTIFACTS_DIR.to_string())
                .into(),
            build_profile: var("BUILD_PROFILE")
                .unwrap_or_else(|| DEFAULT_BUILD_PROFILE.to_string()),
            random_salt,
        })
    }

    pub fn artifact_source(&self) -> ArtifactSource {
        ArtifactSource::new(&self.artifacts_dir, &self.build_profile)
    }
}

fn secret_key(var: &'static str, pk: &str) -> Result<SecretKey, ConfigError> {
    SecretKey::from_str(pk).map_err(|e| ConfigError::Invalid {
        var,
        message: e.to_string(),
    })
}

fn wallets(config: &Config, provider: Option<Provider>) -> Result<Vec<WalletUnlocked>, ConfigError> {
    config
        .account_pks
        .iter()
        .map(|pk| {
            secret_key("ACCOUNT_PKS", pk)
                .map(|key| WalletUnlocked::new_from_private_key(key, provider.clone()))
        })
        .collect()
}

/// Account registry derived from the configured keys, without touching the node.
pub fn get_accounts(config: &Config) -> Result<Vec<Bech32Address>, ConfigError> {
    Ok(wallets(config, None)?
        .iter()
        .map(|w| w.address().clone())
        .collect())
}

/// Connects the registry wallets and the default sender to the configured node.
pub async fn get_runner(config: &Config) -> Result<FuelRunner, ConfigError> {
    let provider = Provider::connect(&config.fuel_url).await?;
    runner(config, Some(provider))
}

/// Default sender is `DEFAULT_PK` when set, otherwise the first registry key.
fn runner(config: &Config, provider: Option<Provider>) -> Result<FuelRunner, ConfigError> {
    let wallets = wallets(config, provider.clone())?;
    let default_sender = match &config.default_pk {
        Some(pk) => Some(WalletUnlocked::new_from_private_key(
            secret_key("DEFAULT_PK", pk)?,
            provider,
        )),
        None => wallets.first().cloned(),
    };
    let mut runner = FuelRunner::new(wallets).with_random_salt(config.random_salt);
    if let Some(wallet) = default_sender {
        runner = runner.with_default_sender(wallet);
    }
    Ok(runner)
}
