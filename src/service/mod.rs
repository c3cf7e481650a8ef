// Copyright (c) 2025 - Cowboy AI, Inc.
//! Service Layer
//!
//! Query-side services built on the repositories.
//!
//! # Architecture
//!
//! ```text
//! Inventory (HTTP)
//!     ↓
//! InventorySource → TopologyResolver → RingRepository
//!     ↓
//! TopologyService ── SeedSelector ──> seed addresses
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use cim_infrastructure_cassandra::config::TopologyConfig;
//! use cim_infrastructure_cassandra::service::HttpTopologyService;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = TopologyConfig::from_env()?;
//!     let service = HttpTopologyService::from_config(&config)?;
//!
//!     if let Some(seeds) = service.seeds("myring").await? {
//!         println!("{}", seeds.into_iter().collect::<Vec<_>>().join(","));
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod seed;
pub mod token;
pub mod topology;

pub use seed::{PerDataCenterSeedSelector, SeedSelector};
pub use token::{AssignedTokenService, TokenService};
pub use topology::{HttpTopologyService, TopologyService};
