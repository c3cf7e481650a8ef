// Copyright (c) 2025 - Cowboy AI, Inc.
//! Ring Repository
//!
//! Read access to rings. The discovery-backed implementation resolves the
//! inventory afresh on every call and refuses writes; discovered topology is
//! owned by the inventory, not by this service.

use async_trait::async_trait;
use tracing::debug;

use crate::domain::CassandraRing;
use crate::errors::{TopologyError, TopologyResult};
use crate::inventory::InventorySource;
use crate::topology::TopologyResolver;

/// Query surface over Cassandra rings
#[async_trait]
pub trait RingRepository: Send + Sync {
    /// Every known ring, ordered by name
    async fn list_rings(&self) -> TopologyResult<Vec<CassandraRing>>;

    /// The ring called `name`, or `None` if there is no such ring
    async fn find_ring(&self, name: &str) -> TopologyResult<Option<CassandraRing>>;

    async fn save(&self, ring: &CassandraRing) -> TopologyResult<()>;

    async fn delete(&self, ring: &CassandraRing) -> TopologyResult<()>;
}

/// Read-only rings discovered from an inventory source
#[derive(Debug)]
pub struct DiscoveryRingRepository<S> {
    source: S,
    resolver: TopologyResolver,
}

impl<S: InventorySource> DiscoveryRingRepository<S> {
    pub fn new(source: S, resolver: TopologyResolver) -> Self {
        Self { source, resolver }
    }

    pub fn source(&self) -> &S {
        &self.source
    }
}

#[async_trait]
impl<S: InventorySource> RingRepository for DiscoveryRingRepository<S> {
    async fn list_rings(&self) -> TopologyResult<Vec<CassandraRing>> {
        let hosts = self.source.hosts().await?;
        let rings = self.resolver.resolve(&hosts).into_rings();
        debug!(rings = rings.len(), hosts = hosts.len(), "Resolved rings from inventory");
        Ok(rings)
    }

    async fn find_ring(&self, name: &str) -> TopologyResult<Option<CassandraRing>> {
        let hosts = self.source.hosts().await?;
        let ring = self.resolver.resolve(&hosts).ring(name);
        if ring.is_none() {
            debug!(ring = name, "Ring not present in inventory");
        }
        Ok(ring)
    }

    async fn save(&self, ring: &CassandraRing) -> TopologyResult<()> {
        Err(TopologyError::UnsupportedOperation(format!(
            "save is not supported for discovered ring {}",
            ring.name()
        )))
    }

    async fn delete(&self, ring: &CassandraRing) -> TopologyResult<()> {
        Err(TopologyError::UnsupportedOperation(format!(
            "delete is not supported for discovered ring {}",
            ring.name()
        )))
    }
}
