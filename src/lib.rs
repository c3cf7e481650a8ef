// Copyright (c) 2025 - Cowboy AI, Inc.
//! Cassandra ring topology for the Composable Information Machine
//!
//! Discovers which hosts form which Cassandra ring from an externally owned
//! host inventory, and computes the seed list every node of a ring
//! bootstraps gossip from.
//!
//! - [`inventory`] - Fetching the raw host manifest
//! - [`topology`] - Role tags → per-ring membership
//! - [`repository`] - Ring queries and owned-ring instance persistence
//! - [`service`] - Seed selection and the query facade
//! - [`adapters`] - Attribute store backends (memory, NATS JetStream KV)

pub mod adapters;
pub mod config;
pub mod domain;
pub mod errors;
pub mod inventory;
pub mod repository;
pub mod service;
pub mod topology;

// Re-export commonly used types
pub use config::{InstanceStoreConfig, InventoryConfig, TopologyConfig};
pub use domain::{CassandraInstance, CassandraRing, InstanceId, ZoneConvention};
pub use errors::{TopologyError, TopologyResult};
pub use inventory::{HostRecord, HttpInventorySource, InventorySource, Manifest, StaticInventorySource};
pub use repository::{
    AttributeInstanceRepository, AttributeStore, DiscoveryRingRepository, InstanceRepository,
    RingRepository,
};
pub use service::{PerDataCenterSeedSelector, SeedSelector, TopologyService};
pub use topology::{TagConvention, Topology, TopologyResolver};
