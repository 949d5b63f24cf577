use crate::artifact::Artifact;
use crate::network::SenderOverride;
use async_trait::async_trait;

/// One deployment of one artifact, with the sender override resolved for the network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploymentRequest<A> {
    pub artifact: Artifact,
    pub from: Option<SenderOverride<A>>,
}

/// Whatever actually loads the bytecode and submits the transaction.
#[async_trait]
pub trait DeploymentRunner: Send + Sync {
    type Account: Clone + Send + Sync;
    type Receipt: Send;
    type Error: Send;

    async fn deploy(
        &self,
        request: DeploymentRequest<Self::Account>,
    ) -> Result<Self::Receipt, Self::Error>;
}
