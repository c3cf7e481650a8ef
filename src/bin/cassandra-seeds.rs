// Copyright (c) 2025 - Cowboy AI, Inc.
//! Cassandra Seeds Tool
//!
//! Resolves ring membership from the host inventory and prints it as JSON.
//!
//! ```text
//! cassandra-seeds rings                 # every ring and its members
//! cassandra-seeds ring myring           # one ring
//! cassandra-seeds seeds myring          # seed addresses, JSON array
//! cassandra-seeds seeds myring --plain  # seed addresses, comma separated
//! cassandra-seeds instances myring      # owned-ring instances from NATS KV
//! ```
//!
//! Configuration comes from the environment (see `TopologyConfig::from_env`);
//! the flags below override the matching variables.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::{debug, info, warn};

use cim_infrastructure_cassandra::config::TopologyConfig;
use cim_infrastructure_cassandra::service::HttpTopologyService;

#[derive(Parser)]
#[command(
    name = "cassandra-seeds",
    version,
    about = "Cassandra ring discovery and seed selection"
)]
struct Cli {
    /// Inventory service base URL
    #[arg(long, global = true, env = "CASSANDRA_INVENTORY_URL")]
    inventory_url: Option<String>,

    /// Seeds selected from each datacenter
    #[arg(long, global = true, env = "CASSANDRA_SEEDS_PER_DATACENTER")]
    seeds_per_datacenter: Option<usize>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every ring in the inventory.
    Rings,

    /// Show one ring and its members.
    Ring {
        /// Ring name
        name: String,
    },

    /// Print the seed addresses of a ring.
    Seeds {
        /// Ring name
        name: String,

        /// Print a comma-separated list instead of JSON.
        #[arg(long)]
        plain: bool,
    },

    /// List instances of an owned ring from the NATS KV store.
    #[cfg(feature = "nats-kv")]
    Instances {
        /// Ring name
        name: String,
    },
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value).context("Failed to render JSON")?;
    println!("{}", rendered);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = TopologyConfig::from_env().context("Invalid configuration")?;
    if let Some(url) = cli.inventory_url {
        config.inventory.base_url = url;
    }
    if let Some(count) = cli.seeds_per_datacenter {
        config.seeds_per_datacenter = count;
    }
    debug!(?config, "Configuration loaded");

    let service = HttpTopologyService::from_config(&config).context("Invalid configuration")?;
    info!(inventory = %config.inventory.url(), "Using inventory");

    match cli.command {
        Commands::Rings => {
            let rings = service.rings().await.context("Failed to list rings")?;
            print_json(&rings)?;
        }
        Commands::Ring { name } => {
            let ring = service.ring(&name).await.context("Failed to load ring")?;
            if ring.is_none() {
                warn!(ring = %name, "No such ring");
            }
            print_json(&ring)?;
        }
        Commands::Seeds { name, plain } => {
            let seeds = service
                .seeds(&name)
                .await
                .context("Failed to compute seeds")?
                .with_context(|| format!("No such ring: {}", name))?;

            if plain {
                println!("{}", seeds.into_iter().collect::<Vec<_>>().join(","));
            } else {
                print_json(&seeds)?;
            }
        }
        #[cfg(feature = "nats-kv")]
        Commands::Instances { name } => {
            use cim_infrastructure_cassandra::adapters::NatsKvAttributeStore;
            use cim_infrastructure_cassandra::repository::{
                AttributeInstanceRepository, InstanceRepository,
            };

            let store = NatsKvAttributeStore::connect(&config.instance_store)
                .await
                .context("Failed to open instance store")?;
            let repository = AttributeInstanceRepository::new(store, config.instance_store.clone());
            let instances = repository
                .find_all(&name)
                .await
                .context("Failed to load instances")?;
            print_json(&instances)?;
        }
    }

    Ok(())
}
