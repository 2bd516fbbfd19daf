//! Command line interface for initializing, writing and reading a record slot.

use std::path::PathBuf;

use anyhow::Context;
use clap::{
    Args,
    Parser,
    Subcommand,
};
use client::{
    config::{
        ClientConfig,
        Cluster,
        Commitment,
        COMMITMENT_ENV,
        KEYPAIR_ENV,
        NETWORK_ENV,
        RPC_URL_ENV,
    },
    context::record::RecordContext,
    logs::{
        log_info,
        LogColor,
    },
    print_kv,
    transactions::CustomRpcClient,
};
use solana_address::Address;
use solana_sdk::signature::Signer;

#[derive(Parser)]
#[command(name = "record-store")]
#[command(about = "Stores one resizable record per owner on chain.", long_about = None)]
struct Cli {
    #[command(flatten)]
    network: NetworkArgs,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args)]
struct NetworkArgs {
    /// Loads the base configuration from a JSON file. Flags below override it.
    #[arg(long, value_name = "PATH", global = true)]
    config: Option<PathBuf>,

    #[arg(long, env = NETWORK_ENV, global = true)]
    network: Option<Cluster>,

    /// Overrides the network's default RPC URL.
    #[arg(long, env = RPC_URL_ENV, global = true)]
    url: Option<String>,

    #[arg(long, env = COMMITMENT_ENV, global = true)]
    commitment: Option<Commitment>,

    #[arg(long, env = KEYPAIR_ENV, value_name = "PATH", global = true)]
    keypair: Option<PathBuf>,
}

impl NetworkArgs {
    fn into_config(self) -> anyhow::Result<ClientConfig> {
        let mut config = match self.config {
            Some(path) => ClientConfig::from_json_file(path)?,
            None => ClientConfig::default(),
        };
        if let Some(cluster) = self.network {
            config.cluster = cluster;
        }
        if let Some(url) = self.url {
            config.rpc_url = Some(url);
        }
        if let Some(commitment) = self.commitment {
            config.commitment = commitment;
        }
        if let Some(keypair) = self.keypair {
            config.keypair_path = Some(keypair);
        }
        Ok(config)
    }
}

#[derive(Subcommand)]
enum Command {
    /// Creates the keypair's empty record slot.
    Init,
    /// Replaces the keypair's record.
    Write {
        /// The new record, written as UTF-8 bytes unless `--hex` is set.
        record: String,
        #[arg(long)]
        hex: bool,
    },
    /// Prints a record.
    Read {
        /// Reads another owner's record instead of the keypair's.
        #[arg(long)]
        owner: Option<String>,
    },
    /// Prints the record slot address for an owner.
    Address {
        #[arg(long)]
        owner: Option<String>,
    },
}

fn decode_hex(input: &str) -> anyhow::Result<Vec<u8>> {
    hex::decode(input.trim_start_matches("0x"))
        .with_context(|| format!("Invalid hex record: {input}"))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.network.into_config()?;

    let owner_or_keypair = |owner: Option<String>| -> anyhow::Result<Address> {
        match owner {
            Some(owner) => owner
                .parse::<Address>()
                .map_err(|e| anyhow::anyhow!("Invalid owner address {owner}: {e:?}")),
            None => Ok(config.load_keypair()?.pubkey()),
        }
    };

    match cli.command {
        Command::Address { owner } => {
            let record = RecordContext::new(owner_or_keypair(owner)?);
            print_kv!("Owner", record.owner);
            print_kv!("Record", record.record, LogColor::Highlight);
            print_kv!("Bump", record.bump);
        }
        Command::Read { owner } => {
            let rpc = CustomRpcClient::new(&config, None);
            let record = RecordContext::new(owner_or_keypair(owner)?);
            let view = record.view_record(&rpc).await?;
            print_kv!("Record", record.record);
            print_kv!("Length", view.data.len());
            match view.as_utf8() {
                Ok(text) => print_kv!("Data", format!("{text:?}"), LogColor::Highlight),
                Err(_) => print_kv!("Data", format!("{:02x?}", view.data), LogColor::Highlight),
            }
        }
        Command::Init => {
            let rpc = CustomRpcClient::new(&config, None);
            let owner = config.load_keypair()?;
            let record = RecordContext::new(owner.pubkey());
            log_info("Initializing record", record.record);
            record.send_initialize(&rpc, &owner).await?;
        }
        Command::Write { record: input, hex } => {
            let rpc = CustomRpcClient::new(&config, None);
            let owner = config.load_keypair()?;
            let new_record = if hex {
                decode_hex(&input)?
            } else {
                input.into_bytes()
            };
            let record = RecordContext::new(owner.pubkey());
            log_info("Writing record", format!("{} bytes", new_record.len()));
            record.send_update(&rpc, &owner, &new_record).await?;
        }
    }

    Ok(())
}
