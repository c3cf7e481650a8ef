// Copyright (c) 2025 - Cowboy AI, Inc.
//! Topology Service
//!
//! Application-facing queries that combine a [`RingRepository`] with a
//! [`SeedSelector`]. Each call works on a fresh inventory snapshot; nothing is
//! cached between calls.

use std::collections::BTreeSet;
use tracing::info;

use super::seed::{PerDataCenterSeedSelector, SeedSelector};
use crate::config::TopologyConfig;
use crate::domain::CassandraRing;
use crate::errors::TopologyResult;
use crate::inventory::HttpInventorySource;
use crate::repository::{DiscoveryRingRepository, RingRepository};
use crate::topology::TopologyResolver;

/// Ring and seed queries
#[derive(Debug)]
pub struct TopologyService<R, S> {
    rings: R,
    seeds: S,
}

impl<R, S> TopologyService<R, S>
where
    R: RingRepository,
    S: SeedSelector,
{
    pub fn new(rings: R, seeds: S) -> Self {
        Self { rings, seeds }
    }

    /// Every ring in the inventory
    pub async fn rings(&self) -> TopologyResult<Vec<CassandraRing>> {
        self.rings.list_rings().await
    }

    pub async fn ring(&self, name: &str) -> TopologyResult<Option<CassandraRing>> {
        self.rings.find_ring(name).await
    }

    /// Seed addresses of ring `name`; `None` when the ring does not exist
    pub async fn seeds(&self, name: &str) -> TopologyResult<Option<BTreeSet<String>>> {
        let Some(ring) = self.rings.find_ring(name).await? else {
            return Ok(None);
        };
        let seeds = self.seeds.select_seeds(&ring);
        info!(ring = name, instances = ring.len(), seeds = seeds.len(), "Computed seeds");
        Ok(Some(seeds))
    }
}

/// The service wired the way the command-line tool runs it
pub type HttpTopologyService =
    TopologyService<DiscoveryRingRepository<HttpInventorySource>, PerDataCenterSeedSelector>;

impl HttpTopologyService {
    /// Build an HTTP-inventory-backed service from validated configuration
    pub fn from_config(config: &TopologyConfig) -> TopologyResult<Self> {
        config.validate()?;

        let source = HttpInventorySource::new(config.inventory.clone())?;
        let resolver = TopologyResolver::new(config.tags.clone(), config.zone_convention.convention());
        let seeds = PerDataCenterSeedSelector::new(config.seeds_per_datacenter)?;

        Ok(Self::new(DiscoveryRingRepository::new(source, resolver), seeds))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::{HostRecord, StaticInventorySource};
    use pretty_assertions::assert_eq;

    fn service() -> TopologyService<DiscoveryRingRepository<StaticInventorySource>, PerDataCenterSeedSelector> {
        let source = StaticInventorySource::from_hosts(
            "us-east-1",
            vec![
                HostRecord::new("cass01ea1", ["cassandra", "cassandra_myring"], "us-east-1a", "54.2.1.2").with_id("1"),
                HostRecord::new("cass02ea1", ["cassandra", "cassandra_myring"], "us-east-1b", "54.2.1.3").with_id("2"),
                HostRecord::new("cass03ea1", ["cassandra", "cassandra_myring"], "us-east-1c", "54.2.1.4").with_id("3"),
            ],
        );
        TopologyService::new(
            DiscoveryRingRepository::new(source, TopologyResolver::default()),
            PerDataCenterSeedSelector::new(2).unwrap(),
        )
    }

    #[tokio::test]
    async fn test_seeds_of_known_ring() {
        let seeds = service().seeds("myring").await.unwrap().unwrap();
        let expected: BTreeSet<String> = ["54.2.1.2", "54.2.1.3"].iter().map(|s| s.to_string()).collect();
        assert_eq!(seeds, expected);
    }

    #[tokio::test]
    async fn test_seeds_of_unknown_ring() {
        assert_eq!(service().seeds("missing").await.unwrap(), None);
    }

    #[test]
    fn test_from_config_rejects_invalid() {
        let config = TopologyConfig {
            seeds_per_datacenter: 0,
            ..Default::default()
        };
        assert!(HttpTopologyService::from_config(&config).is_err());
    }

    #[test]
    fn test_from_config() {
        assert!(HttpTopologyService::from_config(&TopologyConfig::default()).is_ok());
    }
}
