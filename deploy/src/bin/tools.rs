use deploy::network::{NetworkPolicy, SenderOverride};
use deploy::shared::{config, get_accounts};
use tracing::error;

/// Prints which sender a deploy would use for the configured network, without
/// connecting to the node.
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    if let Err(e) = run() {
        error!("Dry run failed: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = config()?;
    let accounts = get_accounts(&config)?;
    let artifact = config.artifact_source().artifact(&config.contract);
    println!("Artifact: {} ({:?})", artifact.name(), artifact.bytecode());
    println!("Network: {}", config.network);
    for (index, account) in accounts.iter().enumerate() {
        println!("Account #{}: {}", index, account);
    }

    let policy = NetworkPolicy::default();
    match policy.resolve(&config.network, &accounts) {
        Some(SenderOverride::Account(account)) => println!("Sender: {}", account),
        Some(SenderOverride::Unavailable { index, registry_len }) => println!(
            "Sender: account #{} requested but only {} configured, deploy will fail",
            index, registry_len
        ),
        None => {
            println!("Sender: runner default (network has no sender rule)");
            println!("Networks with a sender rule: {}", policy.networks().join(", "));
        }
    }
    Ok(())
}
