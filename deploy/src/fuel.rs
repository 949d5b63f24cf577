use async_trait::async_trait;
use fuels::prelude::{Contract, ContractId, LoadConfiguration, TxPolicies, WalletUnlocked};
use fuels::programs::contract::Regular;
use fuels::types::bech32::Bech32Address;
use rand::Rng;
use thiserror::Error;
use tracing::{debug, info};

use crate::artifact::Artifact;
use crate::network::SenderOverride;
use crate::runner::{DeploymentRequest, DeploymentRunner};

#[derive(Error, Debug)]
pub enum DeployError {
    #[error("Invalid sender: account #{index} requested but the registry holds {registry_len} account(s)")]
    InvalidSender { index: usize, registry_len: usize },

    #[error("Unknown sender: no signing wallet for {0}")]
    UnknownSender(Bech32Address),

    #[error("No sender: request has no override and no default wallet is configured")]
    NoDefaultSender,

    #[error("Fuel error: {0}")]
    Fuels(#[from] fuels::types::errors::Error),
}

pub type DeployResult<T> = Result<T, DeployError>;

#[derive(Debug, Clone)]
pub struct DeployedContract {
    pub name: String,
    pub contract_id: ContractId,
    pub sender: Bech32Address,
}

/// Deploys artifacts to a Fuel node with one of a fixed set of signing wallets.
pub struct FuelRunner {
    wallets: Vec<WalletUnlocked>,
    default_sender: Option<WalletUnlocked>,
    random_salt: bool,
}

impl FuelRunner {
    pub fn new(wallets: Vec<WalletUnlocked>) -> Self {
        FuelRunner {
            wallets,
            default_sender: None,
            random_salt: true,
        }
    }

    pub fn with_default_sender(mut self, wallet: WalletUnlocked) -> Self {
        self.default_sender = Some(wallet);
        self
    }

    pub fn with_random_salt(mut self, random_salt: bool) -> Self {
        self.random_salt = random_salt;
        self
    }

    /// Registry of sender addresses, in the order the wallets were given.
    pub fn accounts(&self) -> Vec<Bech32Address> {
        self.wallets.iter().map(|w| w.address().clone()).collect()
    }

    pub(crate) fn sender(&self, from: Option<SenderOverride<Bech32Address>>) -> DeployResult<&WalletUnlocked> {
        match from {
            Some(SenderOverride::Account(address)) => self
                .wallets
                .iter()
                .find(|w| *w.address() == address)
                .ok_or(DeployError::UnknownSender(address)),
            Some(SenderOverride::Unavailable { index, registry_len }) => {
                Err(DeployError::InvalidSender { index, registry_len })
            }
            None => self.default_sender.as_ref().ok_or(DeployError::NoDefaultSender),
        }
    }

    /// Loads the bytecode, salted with fresh random bytes unless salting is off.
    fn contract(&self, artifact: &Artifact) -> DeployResult<Contract<Regular>> {
        debug!("Loading {} from {:?}", artifact.name(), artifact.bytecode());
        let contract = Contract::load_from(artifact.bytecode(), LoadConfiguration::default())?;
        if !self.random_salt {
            return Ok(contract);
        }
        let salt: [u8; 32] = rand::thread_rng().gen();
        Ok(contract.with_salt(salt))
    }
}

#[async_trait]
impl DeploymentRunner for FuelRunner {
    type Account = Bech32Address;
    type Receipt = DeployedContract;
    type Error = DeployError;

    async fn deploy(
        &self,
        request: DeploymentRequest<Bech32Address>,
    ) -> DeployResult<DeployedContract> {
        let wallet = self.sender(request.from)?;
        let artifact = request.artifact;
        let contract = self.contract(&artifact)?;
        info!("Deploying {} from {}", artifact.name(), wallet.address());
        let contract_id: ContractId = contract
            .deploy(wallet, TxPolicies::default())
            .await?
            .into();
        info!("{} deployed at {:?}", artifact.name(), contract_id);
        Ok(DeployedContract {
            name: artifact.name().to_string(),
            contract_id,
            sender: wallet.address().clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn request(from: Option<SenderOverride<Bech32Address>>) -> DeploymentRequest<Bech32Address> {
        DeploymentRequest {
            artifact: Artifact::new("cred_eth", "/nonexistent/cred_eth/out/release/cred_eth.bin"),
            from,
        }
    }

    fn bytecode_artifact() -> (PathBuf, Artifact) {
        let root = std::env::temp_dir().join(format!("credeth-fuel-{}", rand::random::<u64>()));
        std::fs::create_dir_all(&root).unwrap();
        let bytecode = root.join("cred_eth.bin");
        std::fs::write(&bytecode, [0u8; 8]).unwrap();
        (root, Artifact::new("cred_eth", bytecode))
    }

    #[test]
    fn test_salting_changes_contract_id() {
        let (root, artifact) = bytecode_artifact();
        let salted = FuelRunner::new(vec![]);
        let unsalted = FuelRunner::new(vec![]).with_random_salt(false);

        let first = salted.contract(&artifact).map(|c| c.contract_id());
        let second = salted.contract(&artifact).map(|c| c.contract_id());
        let plain_first = unsalted.contract(&artifact).map(|c| c.contract_id());
        let plain_second = unsalted.contract(&artifact).map(|c| c.contract_id());
        std::fs::remove_dir_all(root).unwrap();

        assert_ne!(first.unwrap(), second.unwrap());
        assert_eq!(plain_first.unwrap(), plain_second.unwrap());
    }

    #[test]
    fn test_sender_prefers_override_then_default() {
        let first = WalletUnlocked::new_random(None);
        let second = WalletUnlocked::new_random(None);
        let fallback = WalletUnlocked::new_random(None);
        let runner = FuelRunner::new(vec![first.clone(), second.clone()])
            .with_default_sender(fallback.clone());

        let chosen = runner
            .sender(Some(SenderOverride::Account(second.address().clone())))
            .unwrap();
        assert_eq!(chosen.address(), second.address());
        assert_eq!(runner.sender(None).unwrap().address(), fallback.address());
    }

    #[test]
    fn test_accounts_keep_wallet_order() {
        let first = WalletUnlocked::new_random(None);
        let second = WalletUnlocked::new_random(None);
        let runner = FuelRunner::new(vec![first.clone(), second.clone()]);
        assert_eq!(
            runner.accounts(),
            vec![first.address().clone(), second.address().clone()]
        );
    }

    #[tokio::test]
    async fn test_unavailable_sender_is_rejected() {
        let runner = FuelRunner::new(vec![]);
        let err = runner
            .deploy(request(Some(SenderOverride::Unavailable { index: 0, registry_len: 0 })))
            .await
            .unwrap_err();
        assert!(matches!(err, DeployError::InvalidSender { index: 0, registry_len: 0 }));
    }

    #[tokio::test]
    async fn test_unknown_sender_is_rejected() {
        let runner = FuelRunner::new(vec![WalletUnlocked::new_random(None)]);
        let stranger = WalletUnlocked::new_random(None).address().clone();
        let err = runner
            .deploy(request(Some(SenderOverride::Account(stranger.clone()))))
            .await
            .unwrap_err();
        match err {
            DeployError::UnknownSender(address) => assert_eq!(address, stranger),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_no_override_without_default_sender() {
        let runner = FuelRunner::new(vec![WalletUnlocked::new_random(None)]);
        let err = runner.deploy(request(None)).await.unwrap_err();
        assert!(matches!(err, DeployError::NoDefaultSender));
    }

    #[tokio::test]
    async fn test_missing_bytecode_surfaces_fuel_error() {
        let wallet = WalletUnlocked::new_random(None);
        let runner = FuelRunner::new(vec![wallet.clone()]).with_default_sender(wallet);
        let err = runner.deploy(request(None)).await.unwrap_err();
        assert!(matches!(err, DeployError::Fuels(_)));
    }
}
