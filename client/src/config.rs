//! Explicit network configuration for the client, CLI and demo scripts.
//!
//! Nothing here is global: a [`ClientConfig`] is built once (from the environment, a JSON file,
//! or CLI flags) and passed to [`crate::transactions::CustomRpcClient::new`].

use std::path::{
    Path,
    PathBuf,
};

use anyhow::Context;
use serde::{
    Deserialize,
    Serialize,
};
use solana_commitment_config::CommitmentConfig;
use solana_keypair::Keypair;

pub const NETWORK_ENV: &str = "RECORD_STORE_NETWORK";
pub const RPC_URL_ENV: &str = "RECORD_STORE_RPC_URL";
pub const COMMITMENT_ENV: &str = "RECORD_STORE_COMMITMENT";
pub const KEYPAIR_ENV: &str = "RECORD_STORE_KEYPAIR";

#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum_macros::Display,
    strum_macros::EnumString,
    clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Cluster {
    #[default]
    Localnet,
    Devnet,
    Testnet,
    MainnetBeta,
}

impl Cluster {
    pub fn default_rpc_url(&self) -> &'static str {
        match self {
            Cluster::Localnet => "http://localhost:8899",
            Cluster::Devnet => "https://api.devnet.solana.com",
            Cluster::Testnet => "https://api.testnet.solana.com",
            Cluster::MainnetBeta => "https://api.mainnet-beta.solana.com",
        }
    }

    /// The query string that points the Solana explorer at this cluster.
    pub fn explorer_query(&self) -> &'static str {
        match self {
            Cluster::Localnet => "?cluster=custom&customUrl=http%3A%2F%2Flocalhost%3A8899",
            Cluster::Devnet => "?cluster=devnet",
            Cluster::Testnet => "?cluster=testnet",
            Cluster::MainnetBeta => "",
        }
    }

    pub fn explorer_tx_url(&self, signature: impl std::fmt::Display) -> String {
        format!(
            "https://explorer.solana.com/tx/{signature}{}",
            self.explorer_query()
        )
    }
}

#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum_macros::Display,
    strum_macros::EnumString,
    clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Commitment {
    Processed,
    #[default]
    Confirmed,
    Finalized,
}

impl From<Commitment> for CommitmentConfig {
    fn from(value: Commitment) -> Self {
        match value {
            Commitment::Processed => CommitmentConfig::processed(),
            Commitment::Confirmed => CommitmentConfig::confirmed(),
            Commitment::Finalized => CommitmentConfig::finalized(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClientConfig {
    pub cluster: Cluster,
    /// Overrides the cluster's default RPC URL.
    pub rpc_url: Option<String>,
    pub commitment: Commitment,
    /// Defaults to the Solana CLI keypair at `~/.config/solana/id.json`.
    pub keypair_path: Option<PathBuf>,
}

impl ClientConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Builds a config from a variable lookup. Unset variables fall back to the defaults.
    pub fn from_vars(get: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let cluster = match get(NETWORK_ENV) {
            Some(network) => network
                .parse()
                .with_context(|| format!("Invalid {NETWORK_ENV}: {network}"))?,
            None => Cluster::default(),
        };
        let commitment = match get(COMMITMENT_ENV) {
            Some(commitment) => commitment
                .parse()
                .with_context(|| format!("Invalid {COMMITMENT_ENV}: {commitment}"))?,
            None => Commitment::default(),
        };

        Ok(Self {
            cluster,
            rpc_url: get(RPC_URL_ENV).filter(|url| !url.is_empty()),
            commitment,
            keypair_path: get(KEYPAIR_ENV).map(PathBuf::from),
        })
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)
            .with_context(|| format!("Couldn't read config file {}", path.display()))?;
        serde_json::from_slice(&bytes)
            .with_context(|| format!("Couldn't parse config file {}", path.display()))
    }

    pub fn rpc_url(&self) -> String {
        self.rpc_url
            .clone()
            .unwrap_or_else(|| self.cluster.default_rpc_url().to_string())
    }

    pub fn commitment_config(&self) -> CommitmentConfig {
        self.commitment.into()
    }

    pub fn keypair_path(&self) -> anyhow::Result<PathBuf> {
        match &self.keypair_path {
            Some(path) => Ok(path.clone()),
            None => {
                let home = std::env::var("HOME").context("HOME isn't set")?;
                Ok(PathBuf::from(home).join(".config/solana/id.json"))
            }
        }
    }

    pub fn load_keypair(&self) -> anyhow::Result<Keypair> {
        let path = self.keypair_path()?;
        solana_keypair::read_keypair_file(&path)
            .map_err(|e| anyhow::anyhow!("Couldn't read keypair {}: {e}", path.display()))
    }
}
