use chaindata::alchemy::AlchemyTokenApi;
use clap::Parser;
use config::NetworkConfig;
use dashboard::{config::Config, render_grid};
use tracing::info;
use wallet::rpc::RpcWallet;
use workflow::BalanceFetchWorkflow;

/// ERC-20 token balance dashboard.
///
/// Plug in an address (or an ENS name, or an attached wallet endpoint) and
/// print all of its ERC-20 token balances.
#[derive(Parser, Debug)]
#[command(name = "dashboard")]
struct Cli {
    /// Account address or ENS name to look up
    address: Option<String>,

    /// Take the address from the attached wallet endpoint instead
    #[arg(long, conflicts_with = "address")]
    connect: bool,

    /// Path to the configuration file
    #[arg(long, default_value = "dashboard.toml")]
    config: String,
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let config = Config::from_file(&cli.config)?;
    let network = NetworkConfig::from_network_type(config.network);

    info!("Starting dashboard");
    info!("  RPC URL: {}", config.rpc_url);
    info!("  Chain ID: {}", network.chain_id);

    let provider = client::create_provider(&config.rpc_url).await?;
    let chain_data = AlchemyTokenApi::new(provider);

    // Wallet capability is optional; without an endpoint the dashboard only
    // accepts hex addresses.
    let wallet = match &config.wallet_rpc_url {
        Some(url) => {
            let wallet_provider = client::create_provider(url).await?;
            Some(RpcWallet::new(wallet_provider, network.ens_registry))
        }
        None => None,
    };

    let mut dashboard = BalanceFetchWorkflow::new(wallet, chain_data);

    if cli.connect {
        dashboard.connect_wallet().await?;
    } else if let Some(address) = &cli.address {
        dashboard.submit_address(address).await?;
    } else {
        eyre::bail!("provide an address or pass --connect");
    }

    if let Some(result) = dashboard.result() {
        print!("{}", render_grid(result));
    }

    Ok(())
}
