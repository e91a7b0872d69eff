use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use token42_deployer::{commands, CargoContract, DeployConfig, Variant};

#[derive(Parser)]
#[command(name = "token42-deploy", version, about = "Deploy and manage Token42 contracts")]
struct Cli {
    /// Node websocket endpoint; overrides NODE_URL
    #[arg(long, global = true)]
    url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Instantiate a token contract and save its address
    Deploy {
        #[arg(long, value_enum, default_value_t = Variant::Token)]
        variant: Variant,
    },
    /// Transfer token ownership to MULTISIG_OWNER_ADDRESS
    TransferOwnership {
        #[arg(long, value_enum, default_value_t = Variant::Bonus)]
        variant: Variant,
        /// Token address; overrides TOKEN_ADDRESS and the saved record
        #[arg(long)]
        token: Option<String>,
    },
    /// Compare the deployed code hash with the local build
    Verify {
        #[arg(long, value_enum, default_value_t = Variant::Token)]
        variant: Variant,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let mut cfg = DeployConfig::from_env();
    if let Some(url) = cli.url {
        cfg.node_url = url;
    }
    let cargo = CargoContract::new(cfg.node_url.clone());

    match cli.command {
        Command::Deploy { variant } => {
            let record = commands::deploy(&cfg, &cargo, variant).context("deployment failed")?;
            println!("{}", record.contract_address);
        }
        Command::TransferOwnership { variant, token } => {
            if token.is_some() {
                cfg.token_address = token;
            }
            commands::transfer_ownership(&cfg, &cargo, variant).context("ownership transfer failed")?;
        }
        Command::Verify { variant } => {
            commands::verify(&cfg, &cargo, variant).context("verification failed")?;
        }
    }
    Ok(())
}
