use crate::address::{Address, InitCodeHash};
use crate::constants::{factory_address, init_code_hash, ChainId};
use crate::error::{Result, SdkError};
use ahash::AHashMap;
use once_cell::sync::Lazy;
use serde::{Deserialize, Deserializer};
use std::str::FromStr;
use tracing::debug;

static DEFAULT_CONFIG: Lazy<DeploymentConfig> = Lazy::new(DeploymentConfig::default);

/// Where a chain's pair contracts come from: the factory that deploys them and
/// the hash of their creation code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Deployment {
    pub factory: Address,
    pub init_code_hash: InitCodeHash,
}

impl Deployment {
    pub const fn new(factory: Address, init_code_hash: InitCodeHash) -> Self {
        Self {
            factory,
            init_code_hash,
        }
    }
}

#[derive(Debug, Clone)]
pub struct DeploymentConfig {
    deployments: AHashMap<ChainId, Deployment>,
}

impl Default for DeploymentConfig {
    fn default() -> Self {
        let deployments = ChainId::ALL
            .iter()
            .map(|chain_id| {
                (
                    *chain_id,
                    Deployment::new(factory_address(*chain_id), init_code_hash(*chain_id)),
                )
            })
            .collect();
        Self { deployments }
    }
}

impl DeploymentConfig {
    /// Built-in deployments, shared by the whole process.
    pub fn default_config() -> &'static DeploymentConfig {
        &DEFAULT_CONFIG
    }

    /// Parses `{"deployments":[{"chainId":..,"factoryAddress":"0x..","initCodeHash":"0x.."}]}`.
    /// A chain listed twice, an empty list or any malformed entry is rejected.
    pub fn from_json(json: &str) -> Result<Self> {
        let parsed: DeploymentJson =
            serde_json::from_str(json).map_err(|e| SdkError::Config(e.to_string()))?;
        if parsed.deployments.is_empty() {
            return Err(SdkError::Config("no deployments listed".to_string()));
        }
        let mut deployments = AHashMap::with_capacity(parsed.deployments.len());
        for entry in parsed.deployments {
            let deployment = Deployment::new(entry.factory_address, entry.init_code_hash);
            if deployments.insert(entry.chain_id, deployment).is_some() {
                return Err(SdkError::Config(format!(
                    "chain {} listed more than once",
                    entry.chain_id
                )));
            }
        }
        debug!("loaded {} deployments", deployments.len());
        Ok(Self { deployments })
    }

    pub fn deployment(&self, chain_id: ChainId) -> Result<&Deployment> {
        self.deployments
            .get(&chain_id)
            .ok_or(SdkError::UnsupportedChain(chain_id.id()))
    }

    pub fn with_deployment(mut self, chain_id: ChainId, deployment: Deployment) -> Self {
        self.deployments.insert(chain_id, deployment);
        self
    }
}

#[derive(Debug, Deserialize)]
struct DeploymentJson {
    deployments: Vec<DeploymentEntry>,
}

#[derive(Debug, Deserialize)]
struct DeploymentEntry {
    #[serde(rename = "chainId")]
    chain_id: ChainId,
    #[serde(rename = "factoryAddress")]
    factory_address: Address,
    #[serde(deserialize_with = "deserialize_init_code_hash", rename = "initCodeHash")]
    init_code_hash: InitCodeHash,
}

fn deserialize_init_code_hash<'de, D>(deserializer: D) -> std::result::Result<InitCodeHash, D::Error>
where
    D: Deserializer<'de>,
{
    let s: String = Deserialize::deserialize(deserializer)?;
    InitCodeHash::from_str(s.as_str()).map_err(serde::de::Error::custom)
}
