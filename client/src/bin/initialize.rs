use anyhow::{Context, Result};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vault_acc_client::{ClientError, Provider, ProviderConfig, VaultAcc, Workspace};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cwd = std::env::current_dir().context("failed to read working directory")?;
    let workspace = match Workspace::discover(&cwd) {
        Ok(workspace) => Some(workspace),
        Err(ClientError::WorkspaceNotFound(_)) => None,
        Err(err) => return Err(err).context("failed to load workspace"),
    };

    let config = ProviderConfig::from_env(workspace.as_ref().and_then(|ws| ws.provider.as_ref()))
        .context("failed to configure provider")?;
    let provider = Provider::new(config).context("failed to load provider")?;
    info!(payer = %provider.payer(), cluster = provider.config().cluster.url(), "provider loaded");

    let program = match &workspace {
        Some(workspace) => VaultAcc::from_workspace(&provider, workspace),
        None => {
            warn!("no Anchor.toml found, using the program's declared id");
            VaultAcc::new(&provider, vault_acc::ID)
        }
    }
    .context("failed to resolve VaultAcc")?;

    let tx = program.initialize().context("initialize failed")?;
    println!("Your transaction signature {tx}");

    Ok(())
}
