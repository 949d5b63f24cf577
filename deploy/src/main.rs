use deploy::deployer::{self, DeployParams};
use deploy::network::NetworkPolicy;
use deploy::shared::{config, get_runner};
use tracing::{error, info, warn};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    if let Err(e) = run().await {
        error!("Deploy failed: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = config()?;
    let artifact = config.artifact_source().require(&config.contract)?;
    let runner = get_runner(&config).await?;
    let accounts = runner.accounts();

    if !NetworkPolicy::default().recognizes(&config.network) {
        warn!(
            "Network {:?} has no sender rule, falling back to the runner's default sender",
            config.network
        );
    }
    info!("Network: {}, accounts: {}", config.network, accounts.len());

    let deployed = deployer::deploy(
        &runner,
        DeployParams {
            artifact,
            network: &config.network,
            accounts: &accounts,
        },
    )
    .await?;
    info!("{:#?}", deployed);
    Ok(())
}
