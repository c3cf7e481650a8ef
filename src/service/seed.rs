// Copyright (c) 2025 - Cowboy AI, Inc.
//! Seed Selection
//!
//! Every node of a ring independently computes the seed list it bootstraps
//! gossip from. Nodes only converge if they all pick the same seeds, so the
//! selection is a pure function of the ring's membership:
//!
//! ```text
//! ring ──group by datacenter──> { dc → [instances sorted by id] }
//!      ──take first N per dc──> union of public IPs
//! ```
//!
//! Datacenters with fewer than `N` members contribute all of them. The result
//! is an ordered set so rendering it yields the same string everywhere.

use std::collections::{BTreeMap, BTreeSet};
use tracing::{debug, warn};

use crate::domain::{CassandraInstance, CassandraRing};
use crate::errors::{TopologyError, TopologyResult};

/// Chooses the seed addresses of a ring
pub trait SeedSelector: Send + Sync {
    fn select_seeds(&self, ring: &CassandraRing) -> BTreeSet<String>;
}

/// Picks a fixed number of seeds from every datacenter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PerDataCenterSeedSelector {
    seeds_per_datacenter: usize,
}

impl PerDataCenterSeedSelector {
    pub fn new(seeds_per_datacenter: usize) -> TopologyResult<Self> {
        if seeds_per_datacenter == 0 {
            return Err(TopologyError::Configuration(
                "seeds per datacenter must be positive".to_string(),
            ));
        }
        Ok(Self {
            seeds_per_datacenter,
        })
    }

    pub fn seeds_per_datacenter(&self) -> usize {
        self.seeds_per_datacenter
    }
}

impl SeedSelector for PerDataCenterSeedSelector {
    fn select_seeds(&self, ring: &CassandraRing) -> BTreeSet<String> {
        // Ring instances iterate in id order, so each partition is already sorted
        let mut by_datacenter: BTreeMap<&str, Vec<&CassandraInstance>> = BTreeMap::new();
        for instance in ring.instances() {
            by_datacenter
                .entry(instance.datacenter.as_str())
                .or_default()
                .push(instance);
        }

        let mut seeds = BTreeSet::new();
        for (datacenter, instances) in by_datacenter {
            for instance in instances.into_iter().take(self.seeds_per_datacenter) {
                if instance.public_ip_address.is_empty() {
                    warn!(
                        ring = ring.name(),
                        datacenter,
                        id = %instance.id,
                        "Selected seed has no public address, skipping"
                    );
                    continue;
                }
                seeds.insert(instance.public_ip_address.clone());
            }
        }

        debug!(ring = ring.name(), seeds = seeds.len(), "Selected seeds");
        seeds
    }
}
