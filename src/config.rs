// Copyright (c) 2025 - Cowboy AI, Inc.
//! Configuration for topology resolution, seed selection and instance storage
//!
//! All tunables are plain values handed to constructors; nothing is read from
//! process-wide state after start-up. [`TopologyConfig::from_env`] is the
//! loader used by the command-line tool.
//!
//! | Variable | Default |
//! |----------|---------|
//! | `CASSANDRA_INVENTORY_URL` | `http://localhost:8080` |
//! | `CASSANDRA_INVENTORY_PATH` | `/hosts` |
//! | `CASSANDRA_INVENTORY_TIMEOUT_SECS` | `10` |
//! | `CASSANDRA_MEMBERSHIP_TAG` | `cassandra` |
//! | `CASSANDRA_RING_TAG_PREFIX` | `cassandra_` |
//! | `CASSANDRA_SEEDS_PER_DATACENTER` | `2` |
//! | `CASSANDRA_ZONE_CONVENTION` | `region-zone` |
//! | `CASSANDRA_DOMAIN_PREFIX` | `cassandra` |
//! | `CASSANDRA_PAGE_SIZE` | `100` |
//! | `NATS_URL` | `nats://localhost:4222` |
//! | `CASSANDRA_KV_BUCKET` | `CASSANDRA_INSTANCES` |

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::time::Duration;

use crate::domain::ZoneConventionKind;
use crate::errors::{TopologyError, TopologyResult};
use crate::topology::TagConvention;

fn default_inventory_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_inventory_path() -> String {
    "/hosts".to_string()
}

fn default_timeout() -> u64 {
    10
}

fn default_seeds_per_datacenter() -> usize {
    2
}

fn default_domain_prefix() -> String {
    "cassandra".to_string()
}

fn default_page_size() -> usize {
    100
}

fn default_nats_url() -> String {
    "nats://localhost:4222".to_string()
}

fn default_kv_bucket() -> String {
    "CASSANDRA_INSTANCES".to_string()
}

/// Where and how to fetch the host inventory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryConfig {
    /// Inventory service base URL (e.g., "http://inventory.internal:8080")
    #[serde(default = "default_inventory_url")]
    pub base_url: String,

    /// Path of the manifest resource
    #[serde(default = "default_inventory_path")]
    pub path: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl InventoryConfig {
    /// Base URL and path joined with exactly one slash
    pub fn url(&self) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = self.path.trim_start_matches('/');
        if path.is_empty() {
            base.to_string()
        } else {
            format!("{}/{}", base, path)
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            base_url: default_inventory_url(),
            path: default_inventory_path(),
            timeout_secs: default_timeout(),
        }
    }
}

/// Attribute store settings for owned (non-discovered) rings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstanceStoreConfig {
    /// Prefix of per-ring domain names; ring `myring` lives in `cassandra_myring`
    #[serde(default = "default_domain_prefix")]
    pub domain_prefix: String,

    /// Items returned per page by paginated selects
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// NATS server URL for the JetStream key-value backend
    #[serde(default = "default_nats_url")]
    pub nats_url: String,

    /// JetStream key-value bucket holding instance attributes
    #[serde(default = "default_kv_bucket")]
    pub kv_bucket: String,
}

impl InstanceStoreConfig {
    /// Domain name holding a ring's instances
    pub fn domain(&self, ring: &str) -> String {
        format!("{}_{}", self.domain_prefix, ring)
    }
}

impl Default for InstanceStoreConfig {
    fn default() -> Self {
        Self {
            domain_prefix: default_domain_prefix(),
            page_size: default_page_size(),
            nats_url: default_nats_url(),
            kv_bucket: default_kv_bucket(),
        }
    }
}

/// Complete configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopologyConfig {
    #[serde(default)]
    pub inventory: InventoryConfig,

    #[serde(default)]
    pub tags: TagConvention,

    /// Seeds selected from each datacenter
    #[serde(default = "default_seeds_per_datacenter")]
    pub seeds_per_datacenter: usize,

    #[serde(default)]
    pub zone_convention: ZoneConventionKind,

    #[serde(default)]
    pub instance_store: InstanceStoreConfig,
}

impl Default for TopologyConfig {
    fn default() -> Self {
        Self {
            inventory: InventoryConfig::default(),
            tags: TagConvention::default(),
            seeds_per_datacenter: default_seeds_per_datacenter(),
            zone_convention: ZoneConventionKind::default(),
            instance_store: InstanceStoreConfig::default(),
        }
    }
}

impl TopologyConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> TopologyResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> TopologyResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let config = Self {
            inventory: InventoryConfig {
                base_url: lookup("CASSANDRA_INVENTORY_URL")
                    .unwrap_or(defaults.inventory.base_url),
                path: lookup("CASSANDRA_INVENTORY_PATH").unwrap_or(defaults.inventory.path),
                timeout_secs: parse_or(
                    &lookup,
                    "CASSANDRA_INVENTORY_TIMEOUT_SECS",
                    defaults.inventory.timeout_secs,
                )?,
            },
            tags: TagConvention {
                membership_tag: lookup("CASSANDRA_MEMBERSHIP_TAG")
                    .unwrap_or(defaults.tags.membership_tag),
                ring_prefix: lookup("CASSANDRA_RING_TAG_PREFIX")
                    .unwrap_or(defaults.tags.ring_prefix),
            },
            seeds_per_datacenter: parse_or(
                &lookup,
                "CASSANDRA_SEEDS_PER_DATACENTER",
                defaults.seeds_per_datacenter,
            )?,
            zone_convention: parse_or(
                &lookup,
                "CASSANDRA_ZONE_CONVENTION",
                defaults.zone_convention,
            )?,
            instance_store: InstanceStoreConfig {
                domain_prefix: lookup("CASSANDRA_DOMAIN_PREFIX")
                    .unwrap_or(defaults.instance_store.domain_prefix),
                page_size: parse_or(
                    &lookup,
                    "CASSANDRA_PAGE_SIZE",
                    defaults.instance_store.page_size,
                )?,
                nats_url: lookup("NATS_URL").unwrap_or(defaults.instance_store.nats_url),
                kv_bucket: lookup("CASSANDRA_KV_BUCKET")
                    .unwrap_or(defaults.instance_store.kv_bucket),
            },
        };

        config.validate()?;
        Ok(config)
    }

    /// Check values that the type system does not rule out
    pub fn validate(&self) -> TopologyResult<()> {
        if self.inventory.base_url.trim().is_empty() {
            return Err(TopologyError::Configuration(
                "inventory base URL must be set".to_string(),
            ));
        }
        if self.inventory.timeout_secs == 0 {
            return Err(TopologyError::Configuration(
                "inventory timeout must be positive".to_string(),
            ));
        }
        if self.seeds_per_datacenter == 0 {
            return Err(TopologyError::Configuration(
                "seeds per datacenter must be positive".to_string(),
            ));
        }
        if self.instance_store.page_size == 0 {
            return Err(TopologyError::Configuration(
                "page size must be positive".to_string(),
            ));
        }
        self.tags.validate()
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> TopologyResult<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().map_err(|e| {
            TopologyError::Configuration(format!("invalid value for {}: {} ({})", key, raw, e))
        }),
        None => Ok(default),
    }
}
