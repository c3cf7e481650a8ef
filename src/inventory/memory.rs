// Copyright (c) 2025 - Cowboy AI, Inc.
//! In-memory inventory source for tests and offline use

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{HostRecord, InventorySource, Manifest};
use crate::errors::TopologyResult;

/// Inventory source that serves a manifest held in memory
///
/// The manifest can be swapped between fetches to simulate inventory changes.
#[derive(Debug, Default)]
pub struct StaticInventorySource {
    manifest: RwLock<Manifest>,
}

impl StaticInventorySource {
    pub fn new(manifest: Manifest) -> Self {
        Self {
            manifest: RwLock::new(manifest),
        }
    }

    /// Build a source from hosts that all live in one region
    pub fn from_hosts(region: &str, hosts: impl IntoIterator<Item = HostRecord>) -> Self {
        let manifest = hosts
            .into_iter()
            .fold(Manifest::new(), |manifest, host| manifest.with_host(region, host));
        Self::new(manifest)
    }

    /// Replace the manifest served by later fetches
    pub async fn replace(&self, manifest: Manifest) {
        *self.manifest.write().await = manifest;
    }
}

#[async_trait]
impl InventorySource for StaticInventorySource {
    async fn fetch(&self) -> TopologyResult<Manifest> {
        Ok(self.manifest.read().await.clone())
    }
}
