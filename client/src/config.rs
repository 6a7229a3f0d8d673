//! Provider configuration.
//!
//! Settings come from the environment first and fall back to the
//! `[provider]` section of `Anchor.toml`.

use std::path::PathBuf;

use anchor_client::Cluster;
use solana_sdk::commitment_config::CommitmentConfig;

use crate::{
    error::{ClientError, Result},
    workspace::ProviderSection,
};

pub const PROVIDER_URL: &str = "ANCHOR_PROVIDER_URL";
pub const WALLET: &str = "ANCHOR_WALLET";
pub const COMMITMENT: &str = "ANCHOR_PROVIDER_COMMITMENT";

#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub cluster: Cluster,
    pub wallet_path: PathBuf,
    pub commitment: CommitmentConfig,
}

impl ProviderConfig {
    pub fn from_env(defaults: Option<&ProviderSection>) -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok(), defaults)
    }

    pub fn from_lookup<F>(lookup: F, defaults: Option<&ProviderSection>) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let setting = |key: &'static str, fallback: Option<&String>| {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .or_else(|| fallback.cloned())
                .ok_or(ClientError::MissingSetting(key))
        };

        let url = setting(PROVIDER_URL, defaults.and_then(|p| p.cluster.as_ref()))?;
        let cluster = url.parse::<Cluster>().map_err(|_| ClientError::InvalidSetting {
            key: PROVIDER_URL,
            value: url.clone(),
        })?;

        let wallet = setting(WALLET, defaults.and_then(|p| p.wallet.as_ref()))?;
        let wallet_path = PathBuf::from(shellexpand::tilde(&wallet).as_ref());

        let commitment = match lookup(COMMITMENT) {
            Some(value) => parse_commitment(&value)?,
            None => CommitmentConfig::processed(),
        };

        Ok(Self {
            cluster,
            wallet_path,
            commitment,
        })
    }

    /// The `[programs.<moniker>]` section that applies to this cluster.
    /// Custom endpoints are treated as a local validator.
    pub fn moniker(&self) -> &'static str {
        match self.cluster {
            Cluster::Mainnet => "mainnet",
            Cluster::Devnet => "devnet",
            Cluster::Testnet => "testnet",
            _ => "localnet",
        }
    }
}

fn parse_commitment(value: &str) -> Result<CommitmentConfig> {
    match value.trim().to_lowercase().as_str() {
        "processed" => Ok(CommitmentConfig::processed()),
        "confirmed" => Ok(CommitmentConfig::confirmed()),
        "finalized" => Ok(CommitmentConfig::finalized()),
        _ => Err(ClientError::InvalidSetting {
            key: COMMITMENT,
            value: value.to_string(),
        }),
    }
}
