use crate::artifact::Artifact;
use crate::network::NetworkPolicy;
use crate::runner::{DeploymentRequest, DeploymentRunner};

/// Everything the runner hands over for a single deploy step.
#[derive(Debug, Clone)]
pub struct DeployParams<'a, A> {
    pub artifact: Artifact,
    pub network: &'a str,
    pub accounts: &'a [A],
}

/// Deploys `params.artifact` once, using the sender the default network policy picks.
pub async fn deploy<R: DeploymentRunner>(
    runner: &R,
    params: DeployParams<'_, R::Account>,
) -> Result<R::Receipt, R::Error> {
    deploy_with_policy(runner, &NetworkPolicy::default(), params).await
}

/// Same as [`deploy`] with an explicit policy table. The runner's outcome is returned
/// untouched: no retries, no error mapping.
pub async fn deploy_with_policy<R: DeploymentRunner>(
    runner: &R,
    policy: &NetworkPolicy,
    params: DeployParams<'_, R::Account>,
) -> Result<R::Receipt, R::Error> {
    let from = policy.resolve(params.network, params.accounts);
    let request = DeploymentRequest {
        artifact: params.artifact,
        from,
    };
    runner.deploy(request).await
}
